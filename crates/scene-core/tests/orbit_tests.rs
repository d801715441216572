use glam::Vec3;
use scene_core::orbit::{advance, orbit_angle, rotate_xz};
use scene_core::Camera;

fn camera_at(eye: Vec3) -> Camera {
    let mut c = Camera::new(eye, 45.0, 1.0, 0.1, 1000.0);
    c.look_at(Vec3::ZERO);
    c
}

fn assert_close(a: Vec3, b: Vec3, tol: f32) {
    assert!((a - b).abs().max_element() < tol, "{a:?} != {b:?}");
}

#[test]
fn zero_speed_or_zero_delta_keeps_position() {
    let start = Vec3::new(15.0, 16.0, 13.0);
    let mut c = camera_at(start);
    advance(&mut c, 0.016, 0.0, Vec3::ZERO);
    assert_eq!(c.eye, start);
    advance(&mut c, 0.0, 0.5, Vec3::ZERO);
    assert_eq!(c.eye, start);
    assert_eq!(c.target, Vec3::ZERO);
}

#[test]
fn negative_delta_is_clamped_to_zero() {
    let start = Vec3::new(15.0, 16.0, 13.0);
    let mut c = camera_at(start);
    advance(&mut c, -1.0, 0.5, Vec3::ZERO);
    assert_eq!(c.eye, start);
    assert_eq!(orbit_angle(-0.2, 1.0), 0.0);
}

#[test]
fn one_tick_matches_analytic_rotation() {
    let mut c = camera_at(Vec3::new(15.0, 16.0, 13.0));
    advance(&mut c, 0.016, 0.5, Vec3::ZERO);

    let rot = 0.016_f64 * 0.5;
    let x = 15.0 * rot.cos() + 13.0 * rot.sin();
    let z = 13.0 * rot.cos() - 15.0 * rot.sin();
    assert!((c.eye.x as f64 - x).abs() < 1e-4, "x = {}", c.eye.x);
    assert!((c.eye.z as f64 - z).abs() < 1e-4, "z = {}", c.eye.z);
    assert_eq!(c.eye.y, 16.0);
}

#[test]
fn rotation_uses_pre_update_x_for_z() {
    // Reusing the already-rotated x for z' would land here instead.
    let rot = 0.3_f32;
    let p = Vec3::new(15.0, 16.0, 13.0);
    let x_new = p.x * rot.cos() + p.z * rot.sin();
    let skewed_z = p.z * rot.cos() - x_new * rot.sin();

    let q = rotate_xz(p, rot);
    assert!((q.z - skewed_z).abs() > 0.1);
    let radius = (p.x * p.x + p.z * p.z).sqrt();
    assert!(((q.x * q.x + q.z * q.z).sqrt() - radius).abs() < 1e-4);
}

#[test]
fn consecutive_advances_compose() {
    let start = Vec3::new(15.0, 16.0, 13.0);
    let (a, b) = (0.02_f32, 0.035_f32);

    let mut two = camera_at(start);
    advance(&mut two, a, 1.0, Vec3::ZERO);
    advance(&mut two, b, 1.0, Vec3::ZERO);

    let mut one = camera_at(start);
    advance(&mut one, a + b, 1.0, Vec3::ZERO);

    assert_close(two.eye, one.eye, 1e-4);
}

#[test]
fn full_turn_returns_to_start_and_keeps_looking_at_focus() {
    let start = Vec3::new(15.0, 16.0, 13.0);
    let focus = Vec3::new(0.0, 1.0, 0.0);
    let mut c = camera_at(start);
    for _ in 0..100 {
        advance(&mut c, std::f32::consts::TAU / 100.0, 1.0, focus);
    }
    assert_close(c.eye, start, 1e-3);
    assert_eq!(c.target, focus);
}

#[test]
fn positive_angle_moves_x_axis_toward_negative_z() {
    let q = rotate_xz(Vec3::X, 0.1);
    assert!(q.z < 0.0);
    assert!(q.x > 0.0);
}

#[test]
fn non_finite_speed_leaves_camera_in_place() {
    let start = Vec3::new(15.0, 16.0, 13.0);
    let mut c = camera_at(start);
    for speed in [f32::INFINITY, f32::NEG_INFINITY, f32::NAN] {
        assert_eq!(orbit_angle(0.016, speed), 0.0);
        advance(&mut c, 0.016, speed, Vec3::ZERO);
        assert_eq!(c.eye, start);
    }
    advance(&mut c, f32::INFINITY, 0.5, Vec3::ZERO);
    assert_eq!(c.eye, start);

    advance(&mut c, 0.016, 0.5, Vec3::ZERO);
    assert!(c.eye.is_finite());
    assert_ne!(c.eye, start);
}
