//! Perspective projection parameters and screen mapping.
//!
//! The [`Projection`] struct is the single source of truth for the
//! perspective parameters (FOV, aspect ratio, near/far planes). The
//! [`Viewport`] maps normalized device coordinates to pixels and back.

use crate::config::RenderConfig;
use crate::math::{Mat4, Vec3, Vec4};

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Field of view in degrees.
    fov: f32,
    /// Height divided by width.
    aspect_ratio: f32,
    z_near: f32,
    z_far: f32,
}

impl Projection {
    /// Creates a new projection with the given parameters.
    ///
    /// # Arguments
    /// * `fov` - Field of view in degrees, `0 < fov < 180`
    /// * `aspect_ratio` - Height divided by width
    /// * `z_near` - Near plane distance (must be > 0)
    /// * `z_far` - Far plane distance (must be > z_near)
    pub fn new(fov: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        Self {
            fov,
            aspect_ratio,
            z_near,
            z_far,
        }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.fov, config.aspect_ratio(), config.z_near, config.z_far)
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn z_near(&self) -> f32 {
        self.z_near
    }

    pub fn z_far(&self) -> f32 {
        self.z_far
    }

    /// Updates the aspect ratio (typically called on window resize).
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }

    /// Generates the perspective projection matrix.
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective(self.aspect_ratio, self.fov, self.z_near, self.z_far)
    }
}

/// Pixel dimensions of the target surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Maps NDC `[-1, 1]` to pixels. Depth passes through unchanged.
    #[inline]
    pub fn ndc_to_screen(&self, ndc: Vec3) -> Vec3 {
        Vec3::new(
            (ndc.x + 1.0) * 0.5 * self.width as f32,
            (ndc.y + 1.0) * 0.5 * self.height as f32,
            ndc.z,
        )
    }

    #[inline]
    pub fn screen_to_ndc(&self, screen: Vec3) -> Vec3 {
        Vec3::new(
            screen.x / (0.5 * self.width as f32) - 1.0,
            screen.y / (0.5 * self.height as f32) - 1.0,
            screen.z,
        )
    }
}

/// Projects a world point to pixel coordinates, keeping NDC depth in `z`.
///
/// Returns `None` for points with camera-space depth of exactly zero, which
/// have no screen position.
pub fn world_to_screen(point: Vec3, projection: &Mat4, view: &Mat4, viewport: Viewport) -> Option<Vec3> {
    let clip = *projection * (*view * Vec4::from(point));
    if clip.w == 0.0 {
        return None;
    }
    Some(viewport.ndc_to_screen(clip.perspective_divide()))
}

/// Inverse of [`world_to_screen`]: maps a pixel position plus NDC depth back
/// into world space.
///
/// Points with the same `x`, `y` and different depths lie on the ray from the
/// camera through that pixel.
///
/// # Panics
/// Panics if the projection or view matrix is singular. Both are built from
/// validated configuration, so a singular matrix is a setup bug.
pub fn screen_to_world(screen: Vec3, projection: &Mat4, view: &Mat4, viewport: Viewport) -> Vec3 {
    let inverse_projection = projection
        .inverse()
        .expect("projection matrix must be invertible");
    let inverse_view = view.inverse().expect("view matrix must be invertible");

    let ndc = viewport.screen_to_ndc(screen);
    let camera = inverse_projection * Vec4::from(ndc);
    inverse_view * camera.perspective_divide()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use approx::assert_relative_eq;

    #[test]
    fn from_config_uses_height_over_width() {
        let config = RenderConfig::default().with_screen_size(1000, 500);
        let proj = Projection::from_config(&config);
        assert_relative_eq!(proj.aspect_ratio(), 0.5);
        assert_eq!(proj.fov(), 90.0);
    }

    #[test]
    fn matrix_scales_x_by_aspect() {
        let proj = Projection::new(90.0, 0.5, 0.1, 1000.0).matrix();
        assert_relative_eq!(proj.get(0, 0), 0.5, epsilon = 1e-6);
        assert_relative_eq!(proj.get(1, 1), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn viewport_maps_ndc_corners() {
        let viewport = Viewport::new(800, 600);
        assert_eq!(viewport.ndc_to_screen(Vec3::new(-1.0, -1.0, 0.5)), Vec3::new(0.0, 0.0, 0.5));
        assert_eq!(viewport.ndc_to_screen(Vec3::new(1.0, 1.0, 0.5)), Vec3::new(800.0, 600.0, 0.5));
        assert_eq!(viewport.ndc_to_screen(Vec3::ZERO), Vec3::new(400.0, 300.0, 0.0));
    }

    #[test]
    fn world_point_survives_project_unproject() {
        let viewport = Viewport::new(800, 600);
        let projection = Projection::new(90.0, 0.75, 0.1, 1000.0).matrix();
        let mut camera = Camera::new(Vec3::new(1.0, 2.0, -4.0));
        camera.yaw = 20.0;
        let view = camera.make_view_matrix(camera.yaw);

        let world = Vec3::new(0.5, 1.5, 6.0);
        let screen = world_to_screen(world, &projection, &view, viewport).expect("point is in front");
        let recovered = screen_to_world(screen, &projection, &view, viewport);
        assert_relative_eq!(recovered, world, epsilon = 1e-2);
    }

    #[test]
    fn unprojected_pixel_lies_on_camera_ray() {
        let viewport = Viewport::new(640, 480);
        let projection = Projection::new(75.0, 0.75, 0.1, 1000.0).matrix();
        let camera = Camera::new(Vec3::new(0.0, 1.0, -2.0));
        let view = camera.make_view_matrix(camera.yaw);

        let world = Vec3::new(-3.0, 2.0, 10.0);
        let screen = world_to_screen(world, &projection, &view, viewport).expect("point is in front");

        let near_point = screen_to_world(Vec3::new(screen.x, screen.y, 0.0), &projection, &view, viewport);
        let expected = (world - camera.position).normalize();
        let actual = (near_point - camera.position).normalize();
        assert_relative_eq!(actual, expected, epsilon = 1e-3);
    }
}
