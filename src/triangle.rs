//! Triangle representations flowing through the pipeline.
//!
//! A [`Triangle`] is mesh data and is never written during a frame. Every
//! frame copies it into a [`WorkingTriangle`] whose vertices are overwritten
//! stage by stage (camera space, clip results, screen space).

use crate::math::{Mat4, Vec2, Vec3};
use crate::texture::TextureId;

/// A single pipeline vertex. Plain value, copied freely.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    /// `(u, v, w)`. `w` starts at 1 and holds `1 / depth` after projection,
    /// with `u` and `v` pre-divided by depth.
    pub tex: Vec3,
}

impl Vertex {
    pub const fn new(position: Vec3, tex: Vec3) -> Self {
        Self { position, tex }
    }

    /// Interpolates position and all three texture components by `t`.
    #[inline]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            position: self.position.lerp(other.position, t),
            tex: self.tex.lerp(other.tex, t),
        }
    }
}

/// Source triangle as stored in a mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub points: [Vec3; 3],
    pub tex_coords: [Vec2; 3],
}

impl Triangle {
    pub fn new(points: [Vec3; 3], tex_coords: [Vec2; 3]) -> Self {
        Self { points, tex_coords }
    }

    /// Triangle with every texture coordinate at the origin.
    pub fn untextured(points: [Vec3; 3]) -> Self {
        Self::new(points, [Vec2::ZERO; 3])
    }

    /// Unit normal from `(p1 - p0) x (p2 - p0)`.
    ///
    /// Clockwise winding as seen from the viewer gives a normal pointing at
    /// the viewer in this left-handed space.
    pub fn normal(&self) -> Vec3 {
        let [p0, p1, p2] = self.points;
        (p1 - p0).cross(p2 - p0).normalize()
    }

    /// Average of the three corners.
    pub fn midpoint(&self) -> Vec3 {
        let [p0, p1, p2] = self.points;
        (p0 + p1 + p2) / 3.0
    }

    /// Applies `matrix` to every corner.
    pub fn transformed(&self, matrix: &Mat4) -> Self {
        Self {
            points: self.points.map(|p| *matrix * p),
            tex_coords: self.tex_coords,
        }
    }

    /// Fresh working copy for this frame.
    pub fn working(&self, color: u32, texture: Option<TextureId>) -> WorkingTriangle {
        let vertex = |i: usize| {
            let uv = self.tex_coords[i];
            Vertex::new(self.points[i], Vec3::new(uv.x, uv.y, 1.0))
        };
        WorkingTriangle {
            vertices: [vertex(0), vertex(1), vertex(2)],
            color,
            texture,
        }
    }
}

/// Per-frame scratch triangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorkingTriangle {
    pub vertices: [Vertex; 3],
    pub color: u32,
    pub texture: Option<TextureId>,
}

impl WorkingTriangle {
    /// Same color and texture, new corners.
    pub fn with_vertices(&self, vertices: [Vertex; 3]) -> Self {
        Self { vertices, ..*self }
    }

    pub fn positions(&self) -> [Vec3; 3] {
        self.vertices.map(|v| v.position)
    }

    /// Screen-space corners with depth dropped.
    pub fn screen_points(&self) -> [Vec2; 3] {
        self.vertices.map(|v| Vec2::new(v.position.x, v.position.y))
    }

    pub fn average_depth(&self) -> f32 {
        self.vertices.iter().map(|v| v.position.z).sum::<f32>() / 3.0
    }

    /// Applies `matrix` to every position, texture coordinates untouched.
    pub fn transformed(&self, matrix: &Mat4) -> Self {
        self.with_vertices(self.vertices.map(|v| Vertex::new(*matrix * v.position, v.tex)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn facing_camera() -> Triangle {
        Triangle::new(
            [Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 1.0, 5.0), Vec3::new(1.0, 0.0, 5.0)],
            [Vec2::new(0.0, 0.0), Vec2::new(0.0, 1.0), Vec2::new(1.0, 0.0)],
        )
    }

    #[test]
    fn normal_is_unit_and_faces_back() {
        assert_relative_eq!(facing_camera().normal(), Vec3::BACK, epsilon = 1e-6);
    }

    #[test]
    fn midpoint_is_centroid() {
        assert_relative_eq!(facing_camera().midpoint(), Vec3::new(1.0 / 3.0, 1.0 / 3.0, 5.0), epsilon = 1e-6);
    }

    #[test]
    fn working_copy_leaves_source_untouched() {
        let source = facing_camera();
        let mut working = source.working(0xFF00FF00, Some(TextureId(2)));
        working.vertices[0].position = Vec3::new(9.0, 9.0, 9.0);

        assert_eq!(source, facing_camera());
        assert_eq!(working.vertices[1].tex, Vec3::new(0.0, 1.0, 1.0));
        assert_eq!(working.texture, Some(TextureId(2)));
    }

    #[test]
    fn vertex_lerp_interpolates_texture_w() {
        let a = Vertex::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        let b = Vertex::new(Vec3::new(2.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 0.5));
        let mid = a.lerp(&b, 0.5);
        assert_eq!(mid.position, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(mid.tex, Vec3::new(0.5, 0.5, 0.75));
    }

    #[test]
    fn average_depth_uses_z() {
        let working = facing_camera().working(0, None);
        assert_relative_eq!(working.average_depth(), 5.0);
    }
}
