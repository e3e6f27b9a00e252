//! Render configuration.
//!
//! [`RenderConfig`] gathers every tunable of the pipeline in one place. It is
//! validated once when the [`Engine`](crate::Engine) or
//! [`Pipeline`](crate::render::Pipeline) is built so the stages can assume
//! sane values.

use crate::colors;
use crate::error::{RenderError, RenderResult};
use crate::math::Vec3;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Field of view in degrees.
    pub fov: f32,
    /// Near plane of the projection matrix.
    pub z_near: f32,
    /// Far plane of the projection matrix.
    pub z_far: f32,
    /// Camera-space depth of the plane triangles are clipped against before
    /// the perspective divide.
    pub near_clip_z: f32,
    pub screen_width: u32,
    pub screen_height: u32,
    /// Stroke triangle edges after filling.
    pub wireframe: bool,
    /// Draw edge indices next to each triangle edge.
    pub edge_labels: bool,
    /// Direction used for flat shading. Normalized by the pipeline.
    pub light_direction: Vec3,
    pub wireframe_color: u32,
    pub label_color: u32,
    pub background: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            fov: 90.0,
            z_near: 0.1,
            z_far: 1000.0,
            near_clip_z: 0.01,
            screen_width: DEFAULT_WIDTH,
            screen_height: DEFAULT_HEIGHT,
            wireframe: false,
            edge_labels: false,
            light_direction: Vec3::FORWARD,
            wireframe_color: colors::WHITE,
            label_color: colors::YELLOW,
            background: colors::BACKGROUND,
        }
    }
}

impl RenderConfig {
    pub fn with_screen_size(mut self, width: u32, height: u32) -> Self {
        self.screen_width = width;
        self.screen_height = height;
        self
    }

    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = fov;
        self
    }

    pub fn with_depth_range(mut self, z_near: f32, z_far: f32) -> Self {
        self.z_near = z_near;
        self.z_far = z_far;
        self
    }

    pub fn with_wireframe(mut self, enabled: bool) -> Self {
        self.wireframe = enabled;
        self
    }

    pub fn with_edge_labels(mut self, enabled: bool) -> Self {
        self.edge_labels = enabled;
        self
    }

    pub fn with_light_direction(mut self, direction: Vec3) -> Self {
        self.light_direction = direction;
        self
    }

    /// Height over width, the form the projection matrix expects.
    pub fn aspect_ratio(&self) -> f32 {
        self.screen_height as f32 / self.screen_width as f32
    }

    /// Checks every value the projection and clipping math depends on.
    pub fn validate(&self) -> RenderResult<()> {
        if !(self.fov > 0.0 && self.fov < 180.0) {
            return Err(RenderError::InvalidConfig(format!(
                "fov must be in (0, 180) degrees, got {}",
                self.fov
            )));
        }
        if !(self.z_near > 0.0 && self.z_near < self.z_far) {
            return Err(RenderError::InvalidConfig(format!(
                "depth range must satisfy 0 < near < far, got near={} far={}",
                self.z_near, self.z_far
            )));
        }
        if !(self.near_clip_z > 0.0) {
            return Err(RenderError::InvalidConfig(format!(
                "near clip depth must be positive, got {}",
                self.near_clip_z
            )));
        }
        if self.screen_width < 2 || self.screen_height < 2 {
            return Err(RenderError::InvalidConfig(format!(
                "screen must be at least 2x2 pixels, got {}x{}",
                self.screen_width, self.screen_height
            )));
        }
        if self.light_direction.magnitude() <= f32::EPSILON {
            return Err(RenderError::InvalidConfig(
                "light direction must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = RenderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fov, 90.0);
        assert_eq!(config.z_near, 0.1);
        assert_eq!(config.z_far, 1000.0);
        assert!(!config.wireframe);
        assert!(!config.edge_labels);
    }

    #[test]
    fn rejects_degenerate_fov() {
        assert!(RenderConfig::default().with_fov(0.0).validate().is_err());
        assert!(RenderConfig::default().with_fov(180.0).validate().is_err());
    }

    #[test]
    fn rejects_inverted_depth_range() {
        let config = RenderConfig::default().with_depth_range(10.0, 10.0);
        assert!(matches!(config.validate(), Err(RenderError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_tiny_screen() {
        assert!(RenderConfig::default().with_screen_size(1, 600).validate().is_err());
    }

    #[test]
    fn aspect_ratio_is_height_over_width() {
        let config = RenderConfig::default().with_screen_size(800, 400);
        assert_eq!(config.aspect_ratio(), 0.5);
    }
}
