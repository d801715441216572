use crate::constants::HIGHLIGHT_EMISSIVE_HEX;
use crate::controls::ControlParameters;
use crate::easing::Easing;
use glam::Vec3;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("field of view must be within (0, 180) degrees, got {0}")]
    FieldOfView(f32),
    #[error("clip planes must satisfy 0 < near < far, got near={near} far={far}")]
    ClipRange { near: f32, far: f32 },
    #[error("animation direction must be a finite non-zero vector")]
    Direction,
    #[error("animation speed must be finite, got {0}")]
    Speed(f32),
    #[error("camera eye must be finite")]
    CameraEye,
}

/// Parameters of the translation animation started at scene setup.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationConfig {
    pub direction: Vec3,
    pub speed: f32,
    pub duration_ticks: u32,
    pub easing: Easing,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            direction: Vec3::new(0.0, -1.0, 0.0),
            speed: 0.05,
            // roughly 600 ms at 60 Hz
            duration_ticks: 36,
            easing: Easing::Linear,
        }
    }
}

/// Runtime-tunable scene parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub camera_eye: Vec3,
    pub fov_degrees: f32,
    pub znear: f32,
    pub zfar: f32,
    pub solid_count: usize,
    pub solid_spacing: f32,
    pub solid_height: f32,
    pub highlight_hex: u32,
    pub animation: AnimationConfig,
    pub controls: ControlParameters,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera_eye: Vec3::new(15.0, 16.0, 13.0),
            fov_degrees: 45.0,
            znear: 0.1,
            zfar: 1000.0,
            solid_count: 4,
            solid_spacing: 5.0,
            solid_height: 8.0,
            highlight_hex: HIGHLIGHT_EMISSIVE_HEX,
            animation: AnimationConfig::default(),
            controls: ControlParameters::default(),
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(ConfigError::FieldOfView(self.fov_degrees));
        }
        if !(self.znear > 0.0 && self.zfar > self.znear) {
            return Err(ConfigError::ClipRange {
                near: self.znear,
                far: self.zfar,
            });
        }
        if !self.camera_eye.is_finite() {
            return Err(ConfigError::CameraEye);
        }
        let dir = self.animation.direction;
        if !dir.is_finite() || dir.length_squared() == 0.0 {
            return Err(ConfigError::Direction);
        }
        if !self.animation.speed.is_finite() {
            return Err(ConfigError::Speed(self.animation.speed));
        }
        Ok(())
    }
}
