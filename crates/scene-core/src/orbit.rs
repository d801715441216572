use crate::camera::Camera;
use glam::Vec3;

/// Orbit angle for one frame: elapsed seconds times the speed coefficient.
/// Negative deltas count as zero, and a non-finite product yields no
/// rotation so a bad speed can never poison the camera position.
#[inline]
pub fn orbit_angle(delta_sec: f32, rotation_speed: f32) -> f32 {
    let rot = delta_sec.max(0.0) * rotation_speed;
    if rot.is_finite() {
        rot
    } else {
        0.0
    }
}

/// Rotate the camera's (x, z) around the Y axis through the origin and re-aim
/// it at `focus`. Y is left untouched.
///
/// Both outputs are computed from the pre-rotation pair.
pub fn advance(camera: &mut Camera, delta_sec: f32, rotation_speed: f32, focus: Vec3) {
    let rot = orbit_angle(delta_sec, rotation_speed);
    camera.eye = rotate_xz(camera.eye, rot);
    camera.look_at(focus);
}

#[inline]
pub fn rotate_xz(p: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3::new(p.x * c + p.z * s, p.y, p.z * c - p.x * s)
}
