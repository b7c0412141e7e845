use game_core::{Game, Key};
use macroquad::prelude::KeyCode;

#[derive(Debug, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Running,
    Stopped,
}

/// Seconds a key must be held before it starts repeating.
pub const KEY_REPEAT_DELAY: f32 = 0.5;
/// Seconds between repeats once a held key is repeating.
pub const KEY_REPEAT_INTERVAL: f32 = 0.03;

/// Turns a held key into repeated presses, like a desktop keyboard: the
/// most recent press repeats after `KEY_REPEAT_DELAY`, then every
/// `KEY_REPEAT_INTERVAL`, until it is released.
#[derive(Debug, Default)]
pub struct KeyRepeat {
    held: Option<KeyCode>,
    held_for: f32,
    next_repeat_at: f32,
}

impl KeyRepeat {
    pub fn held(&self) -> Option<KeyCode> {
        self.held
    }

    /// Advances the hold timer by `dt` and returns how many repeats of the
    /// held key fall inside this frame.
    pub fn advance(&mut self, keys_pressed: &[KeyCode], keys_down: &[KeyCode], dt: f32) -> usize {
        if let Some(&key) = keys_pressed.iter().rev().find(|key| map_key(**key).is_some()) {
            self.held = Some(key);
            self.held_for = 0.0;
            self.next_repeat_at = KEY_REPEAT_DELAY;
            return 0;
        }
        let Some(key) = self.held else {
            return 0;
        };
        if !keys_down.contains(&key) {
            self.held = None;
            return 0;
        }

        self.held_for += dt;
        let mut repeats = 0;
        while self.held_for >= self.next_repeat_at {
            repeats += 1;
            self.next_repeat_at += KEY_REPEAT_INTERVAL;
        }
        repeats
    }
}

#[derive(Default)]
pub struct AppState {
    pub mode: AppMode,
    pub key_repeat: KeyRepeat,
}

/// Translate a backend key code into the game's key set.
pub fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Enter | KeyCode::KpEnter => Some(Key::Enter),
        KeyCode::Q => Some(Key::Q),
        KeyCode::W => Some(Key::W),
        KeyCode::A => Some(Key::A),
        KeyCode::S => Some(Key::S),
        KeyCode::D => Some(Key::D),
        _ => None,
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch this frame's key presses in order, followed by any repeats of
    /// a held key, then advance the active screen by `dt` seconds.
    pub fn tick(
        &mut self,
        game: &mut Game,
        keys_pressed: &[KeyCode],
        keys_down: &[KeyCode],
        dt: f32,
    ) {
        if self.mode == AppMode::Stopped {
            return;
        }

        let repeats = self.key_repeat.advance(keys_pressed, keys_down, dt);
        let repeated = self.key_repeat.held().into_iter().cycle().take(repeats);
        let keys = keys_pressed.iter().copied().chain(repeated);

        for key in keys.filter_map(map_key) {
            game.handle_key(key);
            if !game.is_running() {
                break;
            }
        }

        if game.is_running() {
            game.update(dt);
        }

        if !game.is_running() {
            log::debug!("Game stopped, leaving the frame loop");
            self.mode = AppMode::Stopped;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyRepeat, map_key};
    use game_core::Key;
    use macroquad::prelude::KeyCode;

    #[test]
    fn maps_game_keys() {
        assert_eq!(map_key(KeyCode::W), Some(Key::W));
        assert_eq!(map_key(KeyCode::KpEnter), Some(Key::Enter));
        assert_eq!(map_key(KeyCode::Down), Some(Key::Down));
    }

    #[test]
    fn ignores_unbound_keys() {
        assert_eq!(map_key(KeyCode::Space), None);
        assert_eq!(map_key(KeyCode::Right), None);
    }

    #[test]
    fn held_key_waits_for_the_delay_then_repeats_at_the_interval() {
        let mut repeat = KeyRepeat::default();
        assert_eq!(repeat.advance(&[KeyCode::D], &[KeyCode::D], 0.016), 0);
        assert_eq!(repeat.advance(&[], &[KeyCode::D], 0.25), 0);
        assert_eq!(repeat.advance(&[], &[KeyCode::D], 0.25), 1);
        // 0.5625s held: repeats due at 0.53 and 0.56.
        assert_eq!(repeat.advance(&[], &[KeyCode::D], 0.0625), 2);
    }

    #[test]
    fn releasing_or_pressing_another_key_resets_the_hold() {
        let mut repeat = KeyRepeat::default();
        repeat.advance(&[KeyCode::D], &[KeyCode::D], 0.016);
        assert_eq!(repeat.advance(&[], &[], 1.0), 0);
        assert_eq!(repeat.held(), None);
        assert_eq!(repeat.advance(&[], &[KeyCode::D], 1.0), 0);

        repeat.advance(&[KeyCode::D], &[KeyCode::D], 0.016);
        repeat.advance(&[KeyCode::W], &[KeyCode::D, KeyCode::W], 0.016);
        assert_eq!(repeat.held(), Some(KeyCode::W));
        assert_eq!(repeat.advance(&[], &[KeyCode::W], 0.25), 0);
    }

    #[test]
    fn unbound_keys_never_start_a_hold() {
        let mut repeat = KeyRepeat::default();
        assert_eq!(repeat.advance(&[KeyCode::Space], &[KeyCode::Space], 0.016), 0);
        assert_eq!(repeat.held(), None);
    }
}
