//! Hover highlighting.
//!
//! At most one object is highlighted. Entering an object saves its emissive
//! color and replaces it with the highlight color; leaving restores the saved
//! value before the selection is dropped. Re-hovering the same object changes
//! nothing, so the saved value is never overwritten with the highlight.

use crate::color::Color;
use crate::constants::{HIGHLIGHT_EMISSIVE_HEX, PRESS_EMISSIVE_MAX_HEX};
use crate::ray::Ray;
use crate::scene::{ObjectId, Scene};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum HighlightState {
    #[default]
    Idle,
    Highlighted {
        object: ObjectId,
        saved_emissive: Color,
    },
}

impl HighlightState {
    pub fn selected(&self) -> Option<ObjectId> {
        match self {
            HighlightState::Idle => None,
            HighlightState::Highlighted { object, .. } => Some(*object),
        }
    }
}

/// Pointer affordance the host surface should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cursor {
    Default,
    Interactive,
}

/// A change of selection produced by [`PickState::update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: Option<ObjectId>,
    pub to: Option<ObjectId>,
}

impl Transition {
    pub fn cursor(&self) -> Cursor {
        if self.to.is_some() {
            Cursor::Interactive
        } else {
            Cursor::Default
        }
    }
}

#[derive(Clone, Debug)]
pub struct PickState {
    state: HighlightState,
    highlight: Color,
}

impl Default for PickState {
    fn default() -> Self {
        Self::new(Color::from_hex(HIGHLIGHT_EMISSIVE_HEX))
    }
}

impl PickState {
    pub fn new(highlight: Color) -> Self {
        Self {
            state: HighlightState::Idle,
            highlight,
        }
    }

    pub fn state(&self) -> HighlightState {
        self.state
    }

    pub fn selected(&self) -> Option<ObjectId> {
        self.state.selected()
    }

    /// Hit-test `ray` against the scene and move the highlight to the nearest
    /// object.
    pub fn hover(&mut self, scene: &mut Scene, ray: &Ray) -> Option<Transition> {
        let nearest = scene.nearest_hit(ray).map(|h| h.object);
        self.update(scene, nearest)
    }

    /// Move the highlight to `nearest`. Returns `None` when the selection is
    /// unchanged, in which case nothing in the scene was touched.
    pub fn update(&mut self, scene: &mut Scene, nearest: Option<ObjectId>) -> Option<Transition> {
        let previous = self.selected();
        if previous == nearest {
            return None;
        }
        if let HighlightState::Highlighted {
            object,
            saved_emissive,
        } = self.state
        {
            scene.set_emissive(object, saved_emissive);
        }
        self.state = match nearest.and_then(|id| scene.emissive(id).map(|e| (id, e))) {
            Some((object, saved_emissive)) => {
                scene.set_emissive(object, self.highlight);
                HighlightState::Highlighted {
                    object,
                    saved_emissive,
                }
            }
            None => HighlightState::Idle,
        };
        let transition = Transition {
            from: previous,
            to: self.selected(),
        };
        log::info!("[pick] {:?} -> {:?}", transition.from, transition.to);
        Some(transition)
    }

    /// Give the highlighted object a random emissive color. The saved
    /// pre-highlight value is kept, so leaving the object still restores it.
    /// Returns the new color, or `None` when nothing is highlighted.
    pub fn press<R: Rng + ?Sized>(&mut self, scene: &mut Scene, rng: &mut R) -> Option<Color> {
        let object = self.selected()?;
        let hex = (PRESS_EMISSIVE_MAX_HEX as f32 * rng.gen::<f32>()) as u32;
        let color = Color::from_hex(hex.min(PRESS_EMISSIVE_MAX_HEX - 1));
        scene.set_emissive(object, color);
        log::info!("[pick] press on {:?} -> emissive {}", object, color);
        Some(color)
    }

    /// Restore the highlighted object and return to `Idle`.
    pub fn clear(&mut self, scene: &mut Scene) -> Option<Transition> {
        self.update(scene, None)
    }
}
