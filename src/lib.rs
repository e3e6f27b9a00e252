//! A CPU software 3D render pipeline.
//!
//! Meshes go through back-face culling, flat shading, near-plane clipping,
//! perspective projection, a painter's-algorithm depth sort and screen-edge
//! clipping before a scanline rasterizer writes them into a 2D [`Surface`].
//! SDL2 is only used by the demo window to display the result.
//!
//! # Quick Start
//!
//! ```ignore
//! use painter3d::prelude::*;
//!
//! let mut engine = Engine::new(RenderConfig::default())?;
//! engine.spawn_cube(Vec3::new(0.0, 0.0, 4.0), None);
//! engine.render();
//! let bytes = engine.frame_buffer();
//! ```
//!
//! The pipeline can also be driven directly with a caller-owned
//! [`RenderFrame`] and any [`Surface`] implementation:
//!
//! ```ignore
//! let pipeline = Pipeline::new(config)?;
//! let mut frame = RenderFrame::new();
//! let stats = pipeline.render(&mut frame, &scene, &camera, &mut my_surface);
//! ```

pub mod camera;
pub mod clipper;
pub mod colors;
pub mod config;
pub mod engine;
pub mod error;
pub mod light;
pub mod math;
pub mod mesh;
pub mod projection;
pub mod render;
pub mod scene;
pub mod texture;
pub mod transform;
pub mod triangle;
pub mod window;

pub use camera::Camera;
pub use clipper::{clip_triangle, ClipPlane, Clipped};
pub use config::RenderConfig;
pub use engine::Engine;
pub use error::{RenderError, RenderResult};
pub use mesh::Mesh;
pub use projection::{screen_to_world, world_to_screen, Projection, Viewport};
pub use render::{FrameBuffer, FrameStats, Pipeline, RenderFrame, Surface};
pub use scene::{EntityId, MeshEntity, Renderable, Scene, SpecialDraw};
pub use texture::{Texture, TextureId};
pub use transform::Transform;
pub use triangle::{Triangle, Vertex, WorkingTriangle};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use painter3d::prelude::*;
/// ```
pub mod prelude {
    // Engine & pipeline
    pub use crate::config::RenderConfig;
    pub use crate::engine::Engine;
    pub use crate::error::{RenderError, RenderResult};
    pub use crate::render::{FrameBuffer, FrameStats, Pipeline, RenderFrame, Surface};

    // Scene
    pub use crate::camera::Camera;
    pub use crate::mesh::Mesh;
    pub use crate::scene::{EntityId, MeshEntity, Renderable, Scene, SpecialDraw};
    pub use crate::texture::{Texture, TextureId};
    pub use crate::transform::Transform;

    // Projection
    pub use crate::projection::{Projection, Viewport};

    // Math
    pub use crate::math::{Mat4, Vec2, Vec3, Vec4};

    // Window & Input
    pub use crate::window::{FrameLimiter, InputState, Window, WindowEvent};
}
