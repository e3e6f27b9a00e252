//! Geometry submission: scene entities to the frame's triangle list.

use crate::scene::{Renderable, Scene};

use super::frame::{RenderFrame, Submitted};

/// Copies every mesh triangle into `frame.submitted`, in world space and
/// tagged with the entity's texture.
///
/// Special-draw entities skip the triangle pipeline; their scene index is
/// recorded in `frame.special` so they can draw themselves later.
pub fn submit(frame: &mut RenderFrame, scene: &Scene) {
    for (index, entity) in scene.entities().iter().enumerate() {
        match entity {
            Renderable::Mesh(entity) => {
                let texture = entity.texture;
                if entity.transform.is_identity() {
                    frame.submitted.extend(
                        entity.mesh.triangles().iter().map(|&triangle| Submitted { triangle, texture }),
                    );
                } else {
                    let world = entity.transform.to_matrix();
                    frame.submitted.extend(entity.mesh.triangles().iter().map(|triangle| Submitted {
                        triangle: triangle.transformed(&world),
                        texture,
                    }));
                }
            }
            Renderable::Special(_) => frame.special.push(index),
        }
    }
}
