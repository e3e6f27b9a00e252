//! Core rendering engine.
//!
//! The [`Engine`] struct is the main entry point for applications. It owns
//! the scene, the camera, the render pipeline and the frame buffer, and turns
//! per-frame input into camera motion.

use std::path::Path;

use log::{debug, info};

use crate::camera::Camera;
use crate::config::RenderConfig;
use crate::error::RenderResult;
use crate::math::Vec3;
use crate::mesh::Mesh;
use crate::render::{FrameBuffer, FrameStats, Pipeline, RenderFrame};
use crate::scene::{EntityId, MeshEntity, Scene};
use crate::texture::{Texture, TextureId};
use crate::transform::Transform;
use crate::window::InputState;

/// Camera speed in world units per second.
pub const MOVE_SPEED: f32 = 4.0;
/// Camera turn rate in degrees per second.
pub const TURN_SPEED: f32 = 90.0;

pub struct Engine {
    pipeline: Pipeline,
    scene: Scene,
    camera: Camera,
    frame: RenderFrame,
    frame_buffer: FrameBuffer,
    last_stats: FrameStats,
}

impl Engine {
    /// Builds an engine with an empty scene and a camera at the origin
    /// looking along +Z.
    pub fn new(config: RenderConfig) -> RenderResult<Self> {
        let pipeline = Pipeline::new(config)?;
        info!(
            "engine {}x{}, fov {}",
            config.screen_width, config.screen_height, config.fov
        );
        Ok(Self {
            frame_buffer: FrameBuffer::new(config.screen_width, config.screen_height, config.background),
            pipeline,
            scene: Scene::new(),
            camera: Camera::default(),
            frame: RenderFrame::new(),
            last_stats: FrameStats::default(),
        })
    }

    pub fn config(&self) -> &RenderConfig {
        self.pipeline.config()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Loads an OBJ file and places it in the scene.
    pub fn load_mesh<P: AsRef<Path>>(&mut self, path: P, transform: Transform) -> RenderResult<EntityId> {
        let mesh = Mesh::from_obj(path)?;
        Ok(self.scene.add(MeshEntity::new(mesh).with_transform(transform)))
    }

    pub fn load_texture<P: AsRef<Path>>(&mut self, path: P) -> RenderResult<TextureId> {
        let texture = Texture::from_file(path)?;
        Ok(self.scene.add_texture(texture))
    }

    /// Adds the built-in unit cube at `position`.
    pub fn spawn_cube(&mut self, position: Vec3, texture: Option<TextureId>) -> EntityId {
        let mut entity = MeshEntity::new(Mesh::cube()).with_transform(Transform::at(position));
        entity.texture = texture;
        self.scene.add(entity)
    }

    /// Resizes the frame buffer and projection. Rejected sizes leave the
    /// engine unchanged.
    pub fn resize(&mut self, width: u32, height: u32) -> RenderResult<()> {
        self.pipeline.resize(width, height)?;
        let background = self.pipeline.config().background;
        self.frame_buffer.resize(width, height, background);
        Ok(())
    }

    pub fn wireframe(&self) -> bool {
        self.pipeline.config().wireframe
    }

    pub fn edge_labels(&self) -> bool {
        self.pipeline.config().edge_labels
    }

    /// Flips wireframe mode and returns the new state.
    pub fn toggle_wireframe(&mut self) -> bool {
        let enabled = !self.wireframe();
        self.pipeline.set_wireframe(enabled);
        debug!("wireframe {}", if enabled { "on" } else { "off" });
        enabled
    }

    /// Flips edge labels and returns the new state.
    pub fn toggle_edge_labels(&mut self) -> bool {
        let enabled = !self.edge_labels();
        self.pipeline.set_edge_labels(enabled);
        debug!("edge labels {}", if enabled { "on" } else { "off" });
        enabled
    }

    /// Applies one frame of input. `dt` is in seconds.
    pub fn update(&mut self, input: &InputState, dt: f32) {
        self.camera.turn(input.turn * TURN_SPEED * dt);
        self.camera.move_forward(input.forward * MOVE_SPEED * dt);
        self.camera.strafe(input.strafe * MOVE_SPEED * dt);
        self.camera.move_up(input.vertical * MOVE_SPEED * dt);

        if input.toggle_wireframe {
            self.toggle_wireframe();
        }
        if input.toggle_edge_labels {
            self.toggle_edge_labels();
        }
    }

    /// Clears the frame buffer and renders the scene into it.
    pub fn render(&mut self) -> FrameStats {
        self.frame_buffer.clear(self.pipeline.config().background);
        self.last_stats = self.pipeline.render(
            &mut self.frame,
            &self.scene,
            &self.camera,
            &mut self.frame_buffer,
        );
        self.last_stats
    }

    /// Counts from the most recent [`render`](Self::render).
    pub fn last_stats(&self) -> FrameStats {
        self.last_stats
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame_buffer
    }

    /// Returns the rendered frame as bytes (ARGB8888 format)
    pub fn frame_buffer(&self) -> &[u8] {
        self.frame_buffer.as_bytes()
    }
}
