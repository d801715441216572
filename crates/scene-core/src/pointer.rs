use glam::Vec2;

/// Pointer position in normalized device coordinates plus a pending press.
///
/// Event handlers write here; the frame driver reads it once per tick and
/// consumes the press. While `outside` is set the pointer hovers nothing.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    pub ndc: Vec2,
    pub pressed: bool,
    pub outside: bool,
}

impl PointerState {
    pub fn move_to(&mut self, ndc: Vec2) {
        self.ndc = ndc;
        self.outside = false;
    }

    /// The pointer left the drawing surface.
    pub fn leave(&mut self) {
        self.outside = true;
    }

    pub fn press(&mut self) {
        self.pressed = true;
    }

    /// Returns whether a press was pending and clears it.
    pub fn take_press(&mut self) -> bool {
        std::mem::take(&mut self.pressed)
    }
}

/// Map a pixel position inside a `width`×`height` viewport to NDC, with +Y up.
#[inline]
pub fn client_to_ndc(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    let w = width.max(1.0);
    let h = height.max(1.0);
    Vec2::new((x / w) * 2.0 - 1.0, -(y / h) * 2.0 + 1.0)
}
