use crate::math::Vec3;
use crate::triangle::Vertex;

/// A plane defined by a point on the plane and its normal vector.
/// The normal points toward the "inside" (kept) half-space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipPlane {
    pub point: Vec3,
    /// Unit length.
    pub normal: Vec3,
}

impl ClipPlane {
    /// The normal is normalized here, so callers may pass any non-zero length.
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        Self {
            point,
            normal: normal.normalize(),
        }
    }

    /// Returns the signed distance from a point to this plane.
    /// Positive = inside (same side as normal), Negative = outside.
    #[inline]
    pub fn signed_distance(&self, position: Vec3) -> f32 {
        self.normal.dot(position - self.point)
    }

    /// Where the segment `start -> end` meets the plane, and the parameter
    /// along the segment.
    ///
    /// The returned vertex interpolates every attribute of the endpoints by
    /// that parameter. The segment must not be parallel to the plane.
    pub fn intersect(&self, start: &Vertex, end: &Vertex) -> (Vertex, f32) {
        let plane_d = -self.normal.dot(self.point);
        let ad = self.normal.dot(start.position);
        let bd = self.normal.dot(end.position);
        let t = (-plane_d - ad) / (bd - ad);
        (start.lerp(end, t), t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn normal_is_normalized() {
        let plane = ClipPlane::new(Vec3::ZERO, Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(plane.normal, Vec3::UP);
    }

    #[test]
    fn signed_distance_sign_matches_side() {
        let plane = ClipPlane::new(Vec3::new(0.0, 0.0, 1.0), Vec3::FORWARD);
        assert_relative_eq!(plane.signed_distance(Vec3::new(4.0, 2.0, 3.0)), 2.0);
        assert_relative_eq!(plane.signed_distance(Vec3::new(0.0, 0.0, -1.0)), -2.0);
        assert_eq!(plane.signed_distance(Vec3::new(5.0, 5.0, 1.0)), 0.0);
    }

    #[test]
    fn intersect_lands_on_plane() {
        let plane = ClipPlane::new(Vec3::new(0.0, 10.0, 0.0), Vec3::DOWN);
        let a = Vertex::new(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, 1.0));
        let b = Vertex::new(Vec3::new(4.0, 20.0, 1.0), Vec3::new(1.0, 1.0, 1.0));
        let (hit, t) = plane.intersect(&a, &b);
        assert_relative_eq!(t, 0.5);
        assert_relative_eq!(hit.position, Vec3::new(2.0, 10.0, 1.0));
        assert_relative_eq!(hit.tex, Vec3::new(0.5, 0.5, 1.0));
    }
}
