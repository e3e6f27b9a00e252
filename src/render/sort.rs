//! Painter's algorithm ordering.

use crate::triangle::WorkingTriangle;

/// Orders screen-space triangles farthest first by the mean depth of their
/// corners. The sort is stable: equal depths keep submission order.
///
/// Interpenetrating triangles are not split, so they can still overlap
/// wrongly.
pub fn sort_back_to_front(triangles: &mut [WorkingTriangle]) {
    triangles.sort_by(|a, b| b.average_depth().total_cmp(&a.average_depth()));
}
