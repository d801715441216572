//! Live control values and the sink that applies them to a material.

use crate::color::Color;
use crate::constants::{
    CUBE_COLOR_HEX, CUBE_PALETTE, OPACITY_RANGE, OPACITY_STEP, ROTATION_SPEED_RANGE,
    ROTATION_SPEED_STEP,
};
use crate::scene::Material;

/// Values bound to the control widget. The widget keeps them in range; the
/// core accepts whatever it finds here.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlParameters {
    pub rotation_speed: f32,
    pub opacity: f32,
    pub color: Color,
}

impl Default for ControlParameters {
    fn default() -> Self {
        Self {
            rotation_speed: 0.5,
            opacity: 1.0,
            color: Color::from_hex(CUBE_COLOR_HEX),
        }
    }
}

/// Discrete adjustments issued by keyboard-driven widgets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlAction {
    FasterOrbit,
    SlowerOrbit,
    MoreOpaque,
    LessOpaque,
    NextColor,
}

impl ControlParameters {
    pub fn set_rotation_speed(&mut self, value: f32) {
        self.rotation_speed = value.clamp(ROTATION_SPEED_RANGE.0, ROTATION_SPEED_RANGE.1);
    }

    pub fn set_opacity(&mut self, value: f32) {
        self.opacity = value.clamp(OPACITY_RANGE.0, OPACITY_RANGE.1);
    }

    /// Apply an action with the widget's range limits.
    pub fn apply_action(&mut self, action: ControlAction) {
        match action {
            ControlAction::FasterOrbit => {
                self.set_rotation_speed(self.rotation_speed + ROTATION_SPEED_STEP)
            }
            ControlAction::SlowerOrbit => {
                self.set_rotation_speed(self.rotation_speed - ROTATION_SPEED_STEP)
            }
            ControlAction::MoreOpaque => self.set_opacity(self.opacity + OPACITY_STEP),
            ControlAction::LessOpaque => self.set_opacity(self.opacity - OPACITY_STEP),
            ControlAction::NextColor => {
                let current = self.color.to_hex();
                let next = CUBE_PALETTE
                    .iter()
                    .position(|&c| c == current)
                    .map(|i| (i + 1) % CUBE_PALETTE.len())
                    .unwrap_or(0);
                self.color = Color::from_hex(CUBE_PALETTE[next]);
            }
        }
    }
}

/// Overwrite opacity and color on `material`. No smoothing: the next frame
/// shows exactly the control values.
pub fn apply_controls(material: &mut Material, controls: &ControlParameters) {
    material.opacity = controls.opacity;
    material.color = controls.color;
}
