//! Perspective camera shared by the frame driver, the ray-caster and the
//! rasterizer. Platform-free so both front-ends build matrices the same way.

use glam::{Mat4, Vec3};

/// Right-handed perspective camera that looks from `eye` toward `target`.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(eye: Vec3, fovy_degrees: f32, aspect: f32, znear: f32, zfar: f32) -> Self {
        Self {
            eye,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: fovy_degrees.to_radians(),
            znear,
            zfar,
        }
    }

    /// Re-aim the camera at `focus` without moving it.
    pub fn look_at(&mut self, focus: Vec3) {
        self.target = focus;
    }

    /// Update the aspect ratio from viewport dimensions; zero-sized viewports
    /// keep the previous aspect.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
