//! Small linear algebra toolkit used by the pipeline.
//!
//! Everything here is a plain `Copy` value type. Matrices multiply column
//! vectors on the right (`Mat4 * v`), see [`mat4`] for the full convention.

pub mod mat4;
pub mod vec2;
pub mod vec3;
pub mod vec4;

pub use mat4::Mat4;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

/// Linear interpolation between two scalars: `a` at `t = 0`, `b` at `t = 1`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
