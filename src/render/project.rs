//! Camera transform, near-plane clip and projection to screen space.

use log::warn;

use crate::clipper::{clip_triangle, ClipPlane};
use crate::math::{Mat4, Vec3, Vec4};
use crate::projection::Viewport;
use crate::triangle::{Vertex, WorkingTriangle};

use super::frame::RenderFrame;

/// Plane at camera depth `z`, keeping everything in front of it.
pub fn near_plane(z: f32) -> ClipPlane {
    ClipPlane::new(Vec3::new(0.0, 0.0, z), Vec3::FORWARD)
}

/// Projects a camera-space triangle to screen space.
///
/// Each vertex is multiplied by the projection matrix, divided by `w` and
/// mapped to pixels; `z` keeps the NDC depth. Texture coordinates become
/// `(u/w, v/w, 1/w)` for perspective-correct interpolation.
///
/// Returns `None` if any vertex has `w == 0`, which has no screen position.
pub fn project_triangle(triangle: &WorkingTriangle, projection: &Mat4, viewport: Viewport) -> Option<WorkingTriangle> {
    let mut projected = [Vertex::default(); 3];
    for (out, vertex) in projected.iter_mut().zip(triangle.vertices.iter()) {
        let clip = *projection * Vec4::from(vertex.position);
        if clip.w == 0.0 {
            return None;
        }
        let screen = viewport.ndc_to_screen(clip.perspective_divide());
        let tex = Vec3::new(vertex.tex.x / clip.w, vertex.tex.y / clip.w, 1.0 / clip.w);
        *out = Vertex::new(screen, tex);
    }
    Some(triangle.with_vertices(projected))
}

/// Moves `frame.visible` through the view matrix, clips against `near` and
/// appends the projected pieces to `frame.drawn`.
///
/// Returns how many pieces were dropped for having a vertex at `w == 0`.
pub fn project_visible(
    frame: &mut RenderFrame,
    view: &Mat4,
    projection: &Mat4,
    near: &ClipPlane,
    viewport: Viewport,
) -> usize {
    let mut dropped = 0;
    for triangle in &frame.visible {
        let camera_space = triangle.transformed(view);
        for piece in clip_triangle(near, &camera_space).triangles() {
            match project_triangle(&piece, projection, viewport) {
                Some(projected) => frame.drawn.push(projected),
                None => dropped += 1,
            }
        }
    }
    if dropped > 0 {
        warn!("dropped {} triangles with a vertex at w = 0", dropped);
    }
    dropped
}
