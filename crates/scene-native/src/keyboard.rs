use scene_core::ControlAction;
use winit::keyboard::{Key, NamedKey};

/// What a key press asks the app to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    Control(ControlAction),
    CancelAnimation,
}

/// Arrow keys nudge orbit speed and opacity, `C` cycles the cube color and
/// Escape stops the running animation.
pub fn command_for_key(key: &Key) -> Option<KeyCommand> {
    match key {
        Key::Named(NamedKey::ArrowRight) => Some(KeyCommand::Control(ControlAction::FasterOrbit)),
        Key::Named(NamedKey::ArrowLeft) => Some(KeyCommand::Control(ControlAction::SlowerOrbit)),
        Key::Named(NamedKey::ArrowUp) => Some(KeyCommand::Control(ControlAction::MoreOpaque)),
        Key::Named(NamedKey::ArrowDown) => Some(KeyCommand::Control(ControlAction::LessOpaque)),
        Key::Named(NamedKey::Escape) => Some(KeyCommand::CancelAnimation),
        Key::Character(c) if c.eq_ignore_ascii_case("c") => {
            Some(KeyCommand::Control(ControlAction::NextColor))
        }
        _ => None,
    }
}
