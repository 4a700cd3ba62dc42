use std::collections::VecDeque;
use raylib::prelude::*;

const SEQUENCE: [KeyboardKey; 10] = [
    KeyboardKey::KEY_UP,
    KeyboardKey::KEY_UP,
    KeyboardKey::KEY_DOWN,
    KeyboardKey::KEY_DOWN,
    KeyboardKey::KEY_LEFT,
    KeyboardKey::KEY_RIGHT,
    KeyboardKey::KEY_LEFT,
    KeyboardKey::KEY_RIGHT,
    KeyboardKey::KEY_B,
    KeyboardKey::KEY_A,
];

/// Watches key presses for the Konami code.
pub struct KonamiCode {
    recent: VecDeque<KeyboardKey>,
}

impl Default for KonamiCode {
    fn default() -> Self {
        Self { recent: VecDeque::with_capacity(SEQUENCE.len()) }
    }
}

impl KonamiCode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a key press, true when it completes the sequence.
    pub fn push(&mut self, key: KeyboardKey) -> bool {
        if self.recent.len() == SEQUENCE.len() {
            self.recent.pop_front();
        }
        self.recent.push_back(key);

        if self.recent.iter().eq(SEQUENCE.iter()) {
            self.recent.clear();
            return true;
        }
        false
    }
}
