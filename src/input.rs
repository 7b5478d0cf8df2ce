use hashbrown::HashSet;

/// Keys the simulation reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    F,
    Space,
    ShiftLeft,
}

/// Primary (left) mouse button.
pub const MOUSE_MINE: u8 = 0;
/// Secondary (right) mouse button.
pub const MOUSE_PLACE: u8 = 2;

/// Read-only view of the input devices for one frame.
pub trait InputSource {
    fn is_key_down(&self, key: Key) -> bool;
    /// Went down since the last [`end_frame`](Self::end_frame).
    fn was_key_pressed(&self, key: Key) -> bool;
    fn is_mouse_down(&self, button: u8) -> bool;
    fn was_mouse_pressed(&self, button: u8) -> bool;
    /// Accumulated pointer motion; the second call in a frame returns zero.
    fn take_mouse_motion(&mut self) -> (f32, f32);
    /// Forgets this frame's presses.
    fn end_frame(&mut self);
}

/// Event-fed input state. Platform glue forwards device events, the
/// simulation reads it and calls `end_frame` once per tick.
#[derive(Debug, Default)]
pub struct InputState {
    keys_down: HashSet<Key>,
    keys_pressed: HashSet<Key>,
    mouse_down: HashSet<u8>,
    mouse_pressed: HashSet<u8>,
    motion: (f32, f32),
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        // Auto-repeat does not count as a fresh press.
        if self.keys_down.insert(key) {
            self.keys_pressed.insert(key);
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.keys_down.remove(&key);
    }

    pub fn mouse_down(&mut self, button: u8) {
        if self.mouse_down.insert(button) {
            self.mouse_pressed.insert(button);
        }
    }

    pub fn mouse_up(&mut self, button: u8) {
        self.mouse_down.remove(&button);
    }

    pub fn mouse_motion(&mut self, dx: f32, dy: f32) {
        self.motion.0 += dx;
        self.motion.1 += dy;
    }
}

impl InputSource for InputState {
    fn is_key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    fn was_key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    fn is_mouse_down(&self, button: u8) -> bool {
        self.mouse_down.contains(&button)
    }

    fn was_mouse_pressed(&self, button: u8) -> bool {
        self.mouse_pressed.contains(&button)
    }

    fn take_mouse_motion(&mut self) -> (f32, f32) {
        std::mem::take(&mut self.motion)
    }

    /// Held keys stay held.
    fn end_frame(&mut self) {
        self.keys_pressed.clear();
        self.mouse_pressed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_is_an_edge_and_down_is_a_level() {
        let mut input = InputState::new();
        input.key_down(Key::F);
        assert!(input.is_key_down(Key::F));
        assert!(input.was_key_pressed(Key::F));
        input.end_frame();
        assert!(input.is_key_down(Key::F));
        assert!(!input.was_key_pressed(Key::F));
        // repeat while held
        input.key_down(Key::F);
        assert!(!input.was_key_pressed(Key::F));
        input.key_up(Key::F);
        input.key_down(Key::F);
        assert!(input.was_key_pressed(Key::F));
    }

    #[test]
    fn mouse_buttons_track_independently() {
        let mut input = InputState::new();
        input.mouse_down(MOUSE_MINE);
        input.mouse_down(MOUSE_PLACE);
        input.mouse_up(MOUSE_MINE);
        assert!(!input.is_mouse_down(MOUSE_MINE));
        assert!(input.was_mouse_pressed(MOUSE_MINE));
        assert!(input.is_mouse_down(MOUSE_PLACE));
        input.end_frame();
        assert!(!input.was_mouse_pressed(MOUSE_PLACE));
    }

    #[test]
    fn motion_accumulates_until_taken() {
        let mut input = InputState::new();
        input.mouse_motion(3.0, -1.0);
        input.mouse_motion(2.0, 4.0);
        assert_eq!(input.take_mouse_motion(), (5.0, 3.0));
        assert_eq!(input.take_mouse_motion(), (0.0, 0.0));
    }
}
