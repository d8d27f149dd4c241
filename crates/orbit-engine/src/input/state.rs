use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState};

/// Current input state for a single window.
///
/// Holds "is down" information; per-frame transitions are recorded into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match ev {
            InputEvent::Focused(f) => {
                self.focused = f;
                if !f {
                    // Avoids stuck keys when focus changes mid-press.
                    self.keys_down.clear();
                }
            }

            InputEvent::Key { key, state, .. } => match state {
                KeyState::Pressed => {
                    if self.keys_down.insert(key) {
                        frame.keys_pressed.insert(key);
                    }
                }
                KeyState::Released => {
                    if self.keys_down.remove(&key) {
                        frame.keys_released.insert(key);
                    }
                }
            },
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    /// Held now, or pressed at any point since the last frame.
    pub fn key_hit(&self, frame: &InputFrame, key: Key) -> bool {
        self.key_down(key) || frame.was_pressed(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: KeyState) -> InputEvent {
        InputEvent::Key { key, state, repeat: false }
    }

    #[test]
    fn press_marks_key_down_and_pressed() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();
        st.apply_event(&mut fr, key(Key::Escape, KeyState::Pressed));
        assert!(st.key_down(Key::Escape));
        assert!(fr.was_pressed(Key::Escape));
    }

    #[test]
    fn tap_between_frames_is_not_lost() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();
        st.apply_event(&mut fr, key(Key::Escape, KeyState::Pressed));
        st.apply_event(&mut fr, key(Key::Escape, KeyState::Released));
        assert!(!st.key_down(Key::Escape));
        assert!(st.key_hit(&fr, Key::Escape));
        assert!(fr.keys_released.contains(&Key::Escape));
    }

    #[test]
    fn repeat_press_is_reported_once() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();
        st.apply_event(&mut fr, key(Key::Escape, KeyState::Pressed));
        fr.clear();
        st.apply_event(&mut fr, key(Key::Escape, KeyState::Pressed));
        assert!(!fr.was_pressed(Key::Escape));
        assert!(st.key_hit(&fr, Key::Escape));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();
        st.apply_event(&mut fr, key(Key::Unknown(16), KeyState::Released));
        assert!(fr.keys_released.is_empty());
    }

    #[test]
    fn focus_loss_clears_held_keys() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();
        st.apply_event(&mut fr, InputEvent::Focused(true));
        st.apply_event(&mut fr, key(Key::Escape, KeyState::Pressed));
        st.apply_event(&mut fr, InputEvent::Focused(false));
        assert!(!st.focused);
        assert!(!st.key_down(Key::Escape));
    }

    #[test]
    fn clear_drops_frame_deltas_only() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();
        st.apply_event(&mut fr, key(Key::Escape, KeyState::Pressed));
        fr.clear();
        assert!(fr.keys_pressed.is_empty());
        assert!(!fr.was_pressed(Key::Escape));
        assert!(st.key_down(Key::Escape));
    }
}
