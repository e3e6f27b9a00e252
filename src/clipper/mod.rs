//! Triangle clipping against a single plane.
//!
//! The same routine serves both clipping passes of the pipeline: the
//! camera-space near plane (before the perspective divide) and the four
//! screen edges (after it). Clipping a triangle against one plane yields zero,
//! one or two triangles, never a general polygon.

mod plane;

pub use plane::ClipPlane;

use crate::triangle::{Vertex, WorkingTriangle};

/// Result of clipping one triangle against one plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Clipped {
    /// Every vertex was outside.
    Discarded,
    One(WorkingTriangle),
    /// The inside part was a quad, split in two.
    Two(WorkingTriangle, WorkingTriangle),
}

impl Clipped {
    /// Number of output triangles, `0..=2`.
    pub fn count(&self) -> usize {
        match self {
            Clipped::Discarded => 0,
            Clipped::One(_) => 1,
            Clipped::Two(_, _) => 2,
        }
    }

    /// The output triangles in order.
    pub fn triangles(self) -> impl Iterator<Item = WorkingTriangle> {
        let pair = match self {
            Clipped::Discarded => [None, None],
            Clipped::One(a) => [Some(a), None],
            Clipped::Two(a, b) => [Some(a), Some(b)],
        };
        pair.into_iter().flatten()
    }

    /// Appends the output triangles to `out` in order.
    pub fn push_into(self, out: &mut Vec<WorkingTriangle>) {
        match self {
            Clipped::Discarded => {}
            Clipped::One(a) => out.push(a),
            Clipped::Two(a, b) => {
                out.push(a);
                out.push(b);
            }
        }
    }
}

/// Clips `triangle` against `plane`, keeping the half-space the normal points
/// into.
///
/// Vertices exactly on the plane count as inside. New vertices interpolate
/// position and all texture components with the same parameter. Color and
/// texture id carry over to every output triangle.
pub fn clip_triangle(plane: &ClipPlane, triangle: &WorkingTriangle) -> Clipped {
    let vertices = triangle.vertices;
    let distances = vertices.map(|v| plane.signed_distance(v.position));

    let mut inside = [0usize; 3];
    let mut outside = [0usize; 3];
    let (mut n_in, mut n_out) = (0, 0);
    for (i, d) in distances.iter().enumerate() {
        if *d >= 0.0 {
            inside[n_in] = i;
            n_in += 1;
        } else {
            outside[n_out] = i;
            n_out += 1;
        }
    }

    let cross = |from: usize, to: usize| -> Vertex { plane.intersect(&vertices[from], &vertices[to]).0 };

    match n_in {
        0 => Clipped::Discarded,
        3 => Clipped::One(*triangle),
        1 => {
            // Outside corners slide along their edges toward the inside one.
            let keep = inside[0];
            let mut clipped = vertices;
            for &o in &outside[..2] {
                clipped[o] = cross(keep, o);
            }
            Clipped::One(triangle.with_vertices(clipped))
        }
        _ => {
            let (in0, in1, out) = (inside[0], inside[1], outside[0]);
            let x0 = cross(in0, out);
            let x1 = cross(in1, out);
            Clipped::Two(
                triangle.with_vertices([vertices[in0], vertices[in1], x0]),
                triangle.with_vertices([vertices[in1], x0, x1]),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Vec2, Vec3};
    use crate::texture::TextureId;
    use crate::triangle::Triangle;
    use approx::assert_relative_eq;

    const NEAR: f32 = 0.01;

    fn near_plane() -> ClipPlane {
        ClipPlane::new(Vec3::new(0.0, 0.0, NEAR), Vec3::FORWARD)
    }

    fn tri(points: [Vec3; 3]) -> WorkingTriangle {
        Triangle::new(points, [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)])
            .working(0xFF112233, Some(TextureId(7)))
    }

    fn outputs(clipped: Clipped) -> Vec<WorkingTriangle> {
        let mut out = Vec::new();
        clipped.push_into(&mut out);
        out
    }

    #[test]
    fn fully_inside_passes_through_unchanged() {
        let input = tri([Vec3::new(0.0, 0.0, 5.0), Vec3::new(1.0, 0.0, 5.0), Vec3::new(0.0, 1.0, 5.0)]);
        let result = clip_triangle(&near_plane(), &input);
        assert_eq!(result, Clipped::One(input));
    }

    #[test]
    fn fully_behind_is_discarded() {
        let input = tri([Vec3::new(0.0, 0.0, -1.0), Vec3::new(1.0, 0.0, -1.0), Vec3::new(0.0, 1.0, -1.0)]);
        let result = clip_triangle(&near_plane(), &input);
        assert_eq!(result.count(), 0);
        assert!(outputs(result).is_empty());
    }

    #[test]
    fn vertices_on_the_plane_count_as_inside() {
        let input = tri([Vec3::new(0.0, 0.0, NEAR), Vec3::new(1.0, 0.0, NEAR), Vec3::new(0.0, 1.0, NEAR)]);
        assert_eq!(clip_triangle(&near_plane(), &input), Clipped::One(input));
    }

    #[test]
    fn one_inside_moves_outside_vertices_onto_plane() {
        let input = tri([Vec3::new(0.0, 0.0, 5.0), Vec3::new(1.0, 0.0, -1.0), Vec3::new(0.0, 1.0, -1.0)]);
        let result = clip_triangle(&near_plane(), &input);
        assert_eq!(result.count(), 1);

        let out = outputs(result)[0];
        assert_eq!(out.vertices[0], input.vertices[0]);
        let t = (NEAR - 5.0) / (-1.0 - 5.0);
        for v in &out.vertices[1..] {
            assert_relative_eq!(v.position.z, NEAR, epsilon = 1e-5);
            assert_relative_eq!(near_plane().signed_distance(v.position), 0.0, epsilon = 1e-5);
        }
        // Texture coordinates move by the same fraction of the edge.
        assert_relative_eq!(out.vertices[1].tex.x, t, epsilon = 1e-6);
        assert_relative_eq!(out.vertices[1].tex.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(out.vertices[2].tex.y, t, epsilon = 1e-6);
        assert_relative_eq!(out.vertices[2].tex.z, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn two_inside_splits_quad_with_shared_vertex() {
        let input = tri([Vec3::new(0.0, 0.0, -1.0), Vec3::new(1.0, 0.0, 5.0), Vec3::new(0.0, 1.0, 5.0)]);
        let result = clip_triangle(&near_plane(), &input);
        assert_eq!(result.count(), 2);

        let out = outputs(result);
        let (a, b) = (out[0], out[1]);
        assert_eq!(a.vertices[0], input.vertices[1]);
        assert_eq!(a.vertices[1], input.vertices[2]);
        assert_eq!(b.vertices[0], input.vertices[2]);
        assert_eq!(b.vertices[1], a.vertices[2]);
        for v in [a.vertices[2], b.vertices[2]] {
            assert_relative_eq!(v.position.z, NEAR, epsilon = 1e-5);
        }
        // Edge from (1,0,5) to (0,0,-1) with tex (1,0) -> (0,0).
        let t = (NEAR - 5.0) / (-1.0 - 5.0);
        assert_relative_eq!(a.vertices[2].tex.x, 1.0 - t, epsilon = 1e-6);
        assert_relative_eq!(b.vertices[2].tex.y, 1.0 - t, epsilon = 1e-6);
    }

    #[test]
    fn color_and_texture_survive_clipping() {
        let input = tri([Vec3::new(0.0, 0.0, -1.0), Vec3::new(1.0, 0.0, 5.0), Vec3::new(0.0, 1.0, 5.0)]);
        for out in outputs(clip_triangle(&near_plane(), &input)) {
            assert_eq!(out.color, 0xFF112233);
            assert_eq!(out.texture, Some(TextureId(7)));
        }
    }

    #[test]
    fn output_vertex_count_is_zero_three_or_six() {
        let plane = ClipPlane::new(Vec3::new(0.3, 0.0, 0.0), Vec3::new(1.0, 0.5, 0.0));
        let samples = [-2.0, -0.5, 0.3, 0.7, 2.0];
        for &a in &samples {
            for &b in &samples {
                for &c in &samples {
                    let input = tri([Vec3::new(a, 0.1, 0.0), Vec3::new(b, -0.4, 1.0), Vec3::new(c, 0.9, 2.0)]);
                    let result = clip_triangle(&plane, &input);
                    let vertices = outputs(result).len() * 3;
                    assert!(matches!(vertices, 0 | 3 | 6));
                    for out in outputs(result) {
                        for v in out.vertices {
                            assert!(plane.signed_distance(v.position) >= -1e-5);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn left_screen_edge_keeps_non_negative_x() {
        let left = ClipPlane::new(Vec3::ZERO, Vec3::RIGHT);
        let input = tri([Vec3::new(-10.0, 10.0, 0.5), Vec3::new(10.0, 10.0, 0.5), Vec3::new(0.0, 50.0, 0.5)]);
        let out = outputs(clip_triangle(&left, &input));
        assert!(!out.is_empty());
        for t in out {
            for v in t.vertices {
                assert!(v.position.x >= -1e-5, "x = {}", v.position.x);
            }
        }
    }
}
