//! Keyboard input collection for one rendered frame.

use macroquad::prelude::{KeyCode, is_key_down, is_key_pressed};

const WATCHED_KEYS: [KeyCode; 9] = [
    KeyCode::W,
    KeyCode::A,
    KeyCode::S,
    KeyCode::D,
    KeyCode::Q,
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Enter,
    KeyCode::KpEnter,
];

#[derive(Default)]
pub struct FrameInput {
    pub keys_pressed: Vec<KeyCode>,
    /// Watched keys held this frame, including ones pressed earlier.
    pub keys_down: Vec<KeyCode>,
}

pub fn capture_frame_input() -> FrameInput {
    let keys_pressed = WATCHED_KEYS.into_iter().filter(|key| is_key_pressed(*key)).collect();
    let keys_down = WATCHED_KEYS.into_iter().filter(|key| is_key_down(*key)).collect();
    FrameInput { keys_pressed, keys_down }
}
