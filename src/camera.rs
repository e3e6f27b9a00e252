//! Free-look camera.
//!
//! # Coordinate System
//!
//! World space is **left-handed, y-up**:
//! - X: positive right
//! - Y: positive up
//! - Z: positive forward (into screen)
//!
//! Camera space keeps +Z forward and +X right but points +Y **down**, the
//! same way pixel rows grow. That single flip lives in
//! [`Camera::make_view_matrix`]; the projection and the NDC-to-pixel mapping
//! never negate anything.
//!
//! Yaw is in degrees, positive turns right (toward +X).

use crate::math::{Mat4, Vec3, Vec4};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    /// Look direction at zero yaw.
    pub look_dir: Vec3,
    pub up: Vec3,
    /// Rotation around the world Y axis, degrees.
    pub yaw: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl Camera {
    /// Creates a camera at `position` looking along +Z.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            look_dir: Vec3::FORWARD,
            up: Vec3::UP,
            yaw: 0.0,
        }
    }

    /// Look direction after applying `yaw` degrees around world Y.
    pub fn direction(&self, yaw: f32) -> Vec3 {
        let rotation = Mat4::rotation_y(-yaw.to_radians());
        let dir = self.look_dir.normalize();
        (rotation * Vec4::direction(dir.x, dir.y, dir.z)).to_vec3()
    }

    /// Current forward direction.
    pub fn forward(&self) -> Vec3 {
        self.direction(self.yaw)
    }

    /// Current right direction, perpendicular to forward and up.
    pub fn right(&self) -> Vec3 {
        self.up.cross(self.forward()).normalize()
    }

    /// World-to-camera matrix for the given yaw.
    ///
    /// Builds the point-at matrix toward `position + direction(yaw)`, takes
    /// its rigid inverse and flips Y into pixel orientation.
    pub fn make_view_matrix(&self, yaw: f32) -> Mat4 {
        let target = self.position + self.direction(yaw);
        let camera_to_world = Mat4::point_at(self.position, target, self.up);
        Mat4::scaling(1.0, -1.0, 1.0) * camera_to_world.quick_inverse()
    }

    /// View matrix for the camera's own yaw.
    pub fn view_matrix(&self) -> Mat4 {
        self.make_view_matrix(self.yaw)
    }

    pub fn move_forward(&mut self, distance: f32) {
        self.position = self.position + self.forward() * distance;
    }

    pub fn strafe(&mut self, distance: f32) {
        self.position = self.position + self.right() * distance;
    }

    /// Moves along world up.
    pub fn move_up(&mut self, distance: f32) {
        self.position = self.position + self.up.normalize() * distance;
    }

    /// Adds `degrees` of yaw, wrapped to `[0, 360)`.
    pub fn turn(&mut self, degrees: f32) {
        self.yaw = (self.yaw + degrees).rem_euclid(360.0);
    }
}
