//! Flat per-face lighting.

use crate::colors;
use crate::math::Vec3;

/// Channel weights a fully lit face receives, in 0..=255 units.
pub const FACE_TINT: (f32, f32, f32) = (50.0, 75.0, 200.0);

/// A directional light that illuminates the scene uniformly from a direction.
///
/// Shading is two-sided: faces pointing toward or away from the light are lit
/// the same, only grazing faces go dark.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// Normalized light direction.
    pub direction: Vec3,
    /// Color of a face lit head-on.
    pub tint: (f32, f32, f32),
}

impl DirectionalLight {
    /// Create a new directional light pointing in the given direction.
    /// The direction will be normalized automatically.
    pub fn new(direction: Vec3) -> Self {
        Self {
            direction: direction.normalize(),
            tint: FACE_TINT,
        }
    }

    /// `|dot(direction, normal)|` for a unit normal, in `[0, 1]`.
    pub fn intensity(&self, normal: Vec3) -> f32 {
        self.direction.dot(normal).abs()
    }

    /// Flat shading color for a face with the given unit normal.
    pub fn shade(&self, normal: Vec3) -> u32 {
        let i = self.intensity(normal);
        colors::rgb(self.tint.0 * i, self.tint.1 * i, self.tint.2 * i)
    }
}
