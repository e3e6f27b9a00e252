//! Entities the pipeline draws and the textures they reference.

use log::debug;

use crate::math::Mat4;
use crate::mesh::Mesh;
use crate::render::Surface;
use crate::texture::{Texture, TextureId};
use crate::transform::Transform;

/// An entity that draws itself instead of going through the triangle
/// pipeline (menus, debug gizmos, HUD elements).
pub trait SpecialDraw {
    /// Called once per frame before any mesh is rasterized, so meshes
    /// paint over whatever this draws.
    fn draw(&self, surface: &mut dyn Surface, projection: &Mat4, view: &Mat4);
}

/// A mesh placed in the world.
#[derive(Debug, Clone)]
pub struct MeshEntity {
    pub mesh: Mesh,
    pub transform: Transform,
    pub texture: Option<TextureId>,
}

impl MeshEntity {
    pub fn new(mesh: Mesh) -> Self {
        Self {
            mesh,
            transform: Transform::default(),
            texture: None,
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_texture(mut self, texture: TextureId) -> Self {
        self.texture = Some(texture);
        self
    }
}

/// Everything the renderer can be handed, decided when the entity is added.
pub enum Renderable {
    Mesh(MeshEntity),
    Special(Box<dyn SpecialDraw>),
}

impl From<MeshEntity> for Renderable {
    fn from(entity: MeshEntity) -> Self {
        Renderable::Mesh(entity)
    }
}

impl Renderable {
    pub fn special(draw: impl SpecialDraw + 'static) -> Self {
        Renderable::Special(Box::new(draw))
    }
}

/// Index of an entity in a [`Scene`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EntityId(pub usize);

#[derive(Default)]
pub struct Scene {
    entities: Vec<Renderable>,
    textures: Vec<Texture>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entity: impl Into<Renderable>) -> EntityId {
        self.entities.push(entity.into());
        EntityId(self.entities.len() - 1)
    }

    pub fn add_texture(&mut self, texture: Texture) -> TextureId {
        debug!(
            "registered texture {} ({}x{})",
            self.textures.len(),
            texture.width(),
            texture.height()
        );
        self.textures.push(texture);
        TextureId(self.textures.len() - 1)
    }

    /// Unknown ids resolve to `None`; the triangle is then drawn flat shaded.
    pub fn texture(&self, id: TextureId) -> Option<&Texture> {
        self.textures.get(id.0)
    }

    pub fn entities(&self) -> &[Renderable] {
        &self.entities
    }

    pub fn entity(&self, id: EntityId) -> Option<&Renderable> {
        self.entities.get(id.0)
    }

    /// The mesh entity behind `id`, if it is one.
    pub fn mesh_entity_mut(&mut self, id: EntityId) -> Option<&mut MeshEntity> {
        match self.entities.get_mut(id.0) {
            Some(Renderable::Mesh(entity)) => Some(entity),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
