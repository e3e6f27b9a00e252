//! Triangle meshes and Wavefront OBJ loading.

use std::path::Path;

use log::{debug, warn};

use crate::error::{RenderError, RenderResult};
use crate::math::{Vec2, Vec3};
use crate::triangle::Triangle;

/// A named, ordered list of source triangles.
///
/// Meshes are never modified by the pipeline; each frame works on copies.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    name: String,
    triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new(name: impl Into<String>, triangles: Vec<Triangle>) -> Self {
        Self {
            name: name.into(),
            triangles,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Loads every object in an OBJ file into a single mesh.
    ///
    /// Faces are triangulated on load. Objects without texture coordinates
    /// get `(0, 0)` at every corner.
    pub fn from_obj<P: AsRef<Path>>(path: P) -> RenderResult<Self> {
        let path = path.as_ref();
        let options = tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        };
        let (models, _materials) = tobj::load_obj(path, &options)?;

        let mut triangles = Vec::new();
        for model in &models {
            let mesh = &model.mesh;
            let textured = !mesh.texcoords.is_empty();
            if !textured {
                warn!("OBJ object '{}' has no texture coordinates", model.name);
            }

            let position = |i: usize| {
                Vec3::new(
                    mesh.positions[3 * i],
                    mesh.positions[3 * i + 1],
                    mesh.positions[3 * i + 2],
                )
            };
            let tex_coord = |i: usize| {
                if textured {
                    Vec2::new(mesh.texcoords[2 * i], mesh.texcoords[2 * i + 1])
                } else {
                    Vec2::ZERO
                }
            };

            for face in mesh.indices.chunks_exact(3) {
                let [a, b, c] = [face[0] as usize, face[1] as usize, face[2] as usize];
                triangles.push(Triangle::new(
                    [position(a), position(b), position(c)],
                    [tex_coord(a), tex_coord(b), tex_coord(c)],
                ));
            }
        }

        if triangles.is_empty() {
            return Err(RenderError::EmptyMesh(path.display().to_string()));
        }

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        debug!(
            "loaded mesh '{}' ({} objects, {} triangles)",
            name,
            models.len(),
            triangles.len()
        );
        Ok(Self::new(name, triangles))
    }

    /// Unit cube centered on the origin with a full texture on every face.
    ///
    /// Every face is wound clockwise when seen from outside the cube.
    pub fn cube() -> Self {
        // Corners of each face as (bottom-left, top-left, top-right, bottom-right)
        // seen from outside, in unit-cube coordinates.
        const FACES: [[[f32; 3]; 4]; 6] = [
            // south (-z)
            [[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0], [1.0, 0.0, 0.0]],
            // east (+x)
            [[1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [1.0, 1.0, 1.0], [1.0, 0.0, 1.0]],
            // north (+z)
            [[1.0, 0.0, 1.0], [1.0, 1.0, 1.0], [0.0, 1.0, 1.0], [0.0, 0.0, 1.0]],
            // west (-x)
            [[0.0, 0.0, 1.0], [0.0, 1.0, 1.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]],
            // top (+y)
            [[0.0, 1.0, 0.0], [0.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, 0.0]],
            // bottom (-y)
            [[1.0, 0.0, 1.0], [0.0, 0.0, 1.0], [0.0, 0.0, 0.0], [1.0, 0.0, 0.0]],
        ];
        let uv = [
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 0.0),
        ];
        let corner = |c: [f32; 3]| Vec3::new(c[0] - 0.5, c[1] - 0.5, c[2] - 0.5);

        let triangles = FACES
            .iter()
            .flat_map(|face| {
                let p = face.map(corner);
                [
                    Triangle::new([p[0], p[1], p[2]], [uv[0], uv[1], uv[2]]),
                    Triangle::new([p[0], p[2], p[3]], [uv[0], uv[2], uv[3]]),
                ]
            })
            .collect();
        Self::new("cube", triangles)
    }
}
