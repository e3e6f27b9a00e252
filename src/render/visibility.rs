//! Back-face culling and flat shading.

use crate::light::DirectionalLight;
use crate::math::Vec3;

use super::frame::RenderFrame;

/// A face is visible when its normal points back toward the camera.
#[inline]
pub fn faces_camera(normal: Vec3, midpoint: Vec3, camera_position: Vec3) -> bool {
    normal.dot(midpoint - camera_position) < 0.0
}

/// Fills `frame.visible` with a fresh, shaded working copy of every submitted
/// triangle that faces the camera.
pub fn cull_and_shade(frame: &mut RenderFrame, camera_position: Vec3, light: &DirectionalLight) {
    for submitted in &frame.submitted {
        let triangle = &submitted.triangle;
        let normal = triangle.normal();
        if !faces_camera(normal, triangle.midpoint(), camera_position) {
            continue;
        }
        frame
            .visible
            .push(triangle.working(light.shade(normal), submitted.texture));
    }
}
