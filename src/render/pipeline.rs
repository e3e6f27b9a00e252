//! The per-frame render pipeline.
//!
//! ```text
//! scene -> submit -> cull & shade -> view + near clip + project
//!       -> depth sort -> screen clip -> rasterize -> surface
//! ```

use log::{debug, trace};

use crate::camera::Camera;
use crate::clipper::ClipPlane;
use crate::config::RenderConfig;
use crate::error::RenderResult;
use crate::light::DirectionalLight;
use crate::math::Mat4;
use crate::projection::{Projection, Viewport};
use crate::scene::{Renderable, Scene};

use super::frame::{FrameStats, RenderFrame};
use super::overlay;
use super::project::{near_plane, project_visible};
use super::rasterizer::fill_textured;
use super::screen_clip::clip_to_screen;
use super::sort::sort_back_to_front;
use super::submit::submit;
use super::surface::Surface;
use super::visibility::cull_and_shade;

/// Everything derived from a [`RenderConfig`] that stays fixed between frames.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: RenderConfig,
    projection: Projection,
    projection_matrix: Mat4,
    light: DirectionalLight,
    near: ClipPlane,
    viewport: Viewport,
}

impl Pipeline {
    /// Validates `config` and precomputes the projection.
    pub fn new(config: RenderConfig) -> RenderResult<Self> {
        config.validate()?;
        let projection = Projection::from_config(&config);
        Ok(Self {
            projection_matrix: projection.matrix(),
            projection,
            light: DirectionalLight::new(config.light_direction),
            near: near_plane(config.near_clip_z),
            viewport: Viewport::new(config.screen_width, config.screen_height),
            config,
        })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Adapts to a new target size. The configuration is left untouched if
    /// the size is rejected.
    pub fn resize(&mut self, width: u32, height: u32) -> RenderResult<()> {
        let config = self.config.with_screen_size(width, height);
        config.validate()?;
        self.config = config;
        self.projection.set_aspect_ratio(config.aspect_ratio());
        self.projection_matrix = self.projection.matrix();
        self.viewport = Viewport::new(width, height);
        debug!("pipeline resized to {}x{}", width, height);
        Ok(())
    }

    pub fn set_wireframe(&mut self, enabled: bool) {
        self.config.wireframe = enabled;
    }

    pub fn set_edge_labels(&mut self, enabled: bool) {
        self.config.edge_labels = enabled;
    }

    /// Renders one frame of `scene` as seen by `camera` into `surface`.
    ///
    /// `frame` is reset first and holds every intermediate list afterwards.
    /// The surface is not cleared. Special entities draw first, so meshes
    /// paint over them.
    pub fn render(
        &self,
        frame: &mut RenderFrame,
        scene: &Scene,
        camera: &Camera,
        surface: &mut dyn Surface,
    ) -> FrameStats {
        frame.reset();

        submit(frame, scene);
        let view = camera.view_matrix();
        for &index in &frame.special {
            if let Some(Renderable::Special(entity)) = scene.entities().get(index) {
                entity.draw(surface, &self.projection_matrix, &view);
            }
        }

        cull_and_shade(frame, camera.position, &self.light);
        project_visible(frame, &view, &self.projection_matrix, &self.near, self.viewport);
        sort_back_to_front(&mut frame.drawn);
        clip_to_screen(frame, self.viewport);

        self.rasterize(frame, scene, surface);

        let stats = frame.stats();
        trace!(
            "frame: {} submitted, {} visible, {} drawn, {} on screen, {} special",
            stats.submitted,
            stats.visible,
            stats.drawn,
            stats.on_screen,
            stats.special
        );
        stats
    }

    /// Fills every on-screen piece, then outlines and labels the whole
    /// drawn triangles so screen-clip seams never show.
    fn rasterize(&self, frame: &RenderFrame, scene: &Scene, surface: &mut dyn Surface) {
        for triangle in &frame.on_screen {
            match triangle.texture.and_then(|id| scene.texture(id)) {
                Some(texture) => fill_textured(surface, triangle.vertices, texture),
                None => surface.fill_triangle(triangle.screen_points(), triangle.color),
            }
        }

        if !self.config.wireframe && !self.config.edge_labels {
            return;
        }
        for triangle in &frame.drawn {
            let points = triangle.screen_points();
            if self.config.wireframe {
                surface.draw_triangle(points, self.config.wireframe_color);
            }
            if self.config.edge_labels {
                overlay::draw_edge_labels(surface, points, self.config.label_color);
            }
        }
    }
}
