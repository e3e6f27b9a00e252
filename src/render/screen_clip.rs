//! Clipping screen-space triangles to the viewport edges.

use crate::clipper::{clip_triangle, ClipPlane};
use crate::math::Vec3;
use crate::projection::Viewport;

use super::frame::RenderFrame;

/// How far a clipped corner may sit from a viewport edge and still be
/// treated as lying on it, in pixels.
const EDGE_SNAP: f32 = 1e-3;

fn snap(value: f32, max: f32) -> f32 {
    if value <= EDGE_SNAP {
        0.0
    } else if value >= max - EDGE_SNAP {
        max
    } else {
        value
    }
}

/// The four viewport edges, in clipping order: top, bottom, left, right.
pub fn screen_planes(viewport: Viewport) -> [ClipPlane; 4] {
    let right = viewport.width as f32 - 1.0;
    let bottom = viewport.height as f32 - 1.0;
    [
        ClipPlane::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0)),
        ClipPlane::new(Vec3::new(0.0, bottom, 0.0), Vec3::new(0.0, -1.0, 0.0)),
        ClipPlane::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)),
        ClipPlane::new(Vec3::new(right, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0)),
    ]
}

/// Clips every triangle in `frame.drawn` against the four edges and appends
/// the pieces to `frame.on_screen`, keeping painter order.
///
/// Each triangle runs through a double-buffered worklist: all pieces produced
/// by one edge are clipped against the next edge before moving on. Corners
/// within [`EDGE_SNAP`] of an edge are moved onto it, so pieces reaching the
/// last row or column cover it exactly.
pub fn clip_to_screen(frame: &mut RenderFrame, viewport: Viewport) {
    let planes = screen_planes(viewport);
    let right = viewport.width as f32 - 1.0;
    let bottom = viewport.height as f32 - 1.0;
    for triangle in &frame.drawn {
        frame.clip_queue.clear();
        frame.clip_queue.push(*triangle);

        for plane in &planes {
            frame.clip_next.clear();
            for piece in &frame.clip_queue {
                clip_triangle(plane, piece).push_into(&mut frame.clip_next);
            }
            std::mem::swap(&mut frame.clip_queue, &mut frame.clip_next);
            if frame.clip_queue.is_empty() {
                break;
            }
        }

        frame.on_screen.extend(frame.clip_queue.iter().map(|piece| {
            let mut piece = *piece;
            for vertex in &mut piece.vertices {
                vertex.position.x = snap(vertex.position.x, right);
                vertex.position.y = snap(vertex.position.y, bottom);
            }
            piece
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triangle::{Triangle, WorkingTriangle};

    fn screen_tri(points: [(f32, f32); 3], color: u32) -> WorkingTriangle {
        Triangle::untextured(points.map(|(x, y)| Vec3::new(x, y, 0.5))).working(color, None)
    }

    fn run(triangles: Vec<WorkingTriangle>, viewport: Viewport) -> RenderFrame {
        let mut frame = RenderFrame::new();
        frame.drawn = triangles;
        clip_to_screen(&mut frame, viewport);
        frame
    }

    #[test]
    fn inside_triangle_is_untouched() {
        let tri = screen_tri([(10.0, 10.0), (50.0, 10.0), (10.0, 50.0)], 1);
        let frame = run(vec![tri], Viewport::new(100, 100));
        assert_eq!(frame.on_screen, vec![tri]);
    }

    #[test]
    fn left_overhang_is_trimmed() {
        let tri = screen_tri([(-10.0, 20.0), (10.0, 20.0), (0.0, 60.0)], 1);
        let frame = run(vec![tri], Viewport::new(100, 100));
        assert!(!frame.on_screen.is_empty());
        for t in &frame.on_screen {
            for v in t.vertices {
                assert!(v.position.x >= 0.0, "x = {}", v.position.x);
            }
        }
    }

    #[test]
    fn corner_overhang_stays_inside_all_edges() {
        let tri = screen_tri([(-40.0, -40.0), (140.0, 30.0), (30.0, 140.0)], 1);
        let frame = run(vec![tri], Viewport::new(100, 80));
        assert!(!frame.on_screen.is_empty());
        for t in &frame.on_screen {
            for v in t.vertices {
                assert!(v.position.x >= -1e-3 && v.position.x <= 99.0 + 1e-3);
                assert!(v.position.y >= -1e-3 && v.position.y <= 79.0 + 1e-3);
            }
        }
    }

    #[test]
    fn clipped_corners_land_exactly_on_edges() {
        let tri = screen_tri([(-50.3, -50.7), (301.9, -50.7), (-50.3, 301.1)], 1);
        let frame = run(vec![tri], Viewport::new(100, 80));
        let mut xs = Vec::new();
        let mut ys = Vec::new();
        for t in &frame.on_screen {
            for v in t.vertices {
                assert!(v.position.x >= 0.0 && v.position.x <= 99.0);
                assert!(v.position.y >= 0.0 && v.position.y <= 79.0);
                xs.push(v.position.x);
                ys.push(v.position.y);
            }
        }
        assert!(xs.contains(&0.0) && xs.contains(&99.0));
        assert!(ys.contains(&0.0) && ys.contains(&79.0));
    }

    #[test]
    fn offscreen_triangle_vanishes() {
        let tri = screen_tri([(-30.0, 10.0), (-5.0, 10.0), (-20.0, 40.0)], 1);
        let frame = run(vec![tri], Viewport::new(100, 100));
        assert!(frame.on_screen.is_empty());
    }

    #[test]
    fn pieces_keep_painter_order() {
        let far = screen_tri([(-10.0, 10.0), (50.0, 10.0), (10.0, 50.0)], 1);
        let near = screen_tri([(20.0, 20.0), (30.0, 20.0), (20.0, 30.0)], 2);
        let frame = run(vec![far, near], Viewport::new(100, 100));
        let colors: Vec<_> = frame.on_screen.iter().map(|t| t.color).collect();
        assert_eq!(colors.last(), Some(&2));
        assert!(colors[..colors.len() - 1].iter().all(|&c| c == 1));
    }
}
