//! Input handling.
//!
//! The runtime reacts to exactly one key: escape requests window close. The
//! close button is handled by GLFW itself through the window's should-close
//! flag, so only the key path needs translating here.

use glfw::{Action, Key, WindowEvent};

/// True when `event` is a key press that should close the window.
pub fn requests_close(event: &WindowEvent) -> bool {
    matches!(event, WindowEvent::Key(Key::Escape, _, Action::Press, _))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glfw::Modifiers;

    fn key(key: Key, action: Action) -> WindowEvent {
        WindowEvent::Key(key, 0, action, Modifiers::empty())
    }

    #[test]
    fn escape_press_requests_close() {
        assert!(requests_close(&key(Key::Escape, Action::Press)));
    }

    #[test]
    fn escape_release_does_not() {
        assert!(!requests_close(&key(Key::Escape, Action::Release)));
    }

    #[test]
    fn other_keys_do_not() {
        assert!(!requests_close(&key(Key::A, Action::Press)));
        assert!(!requests_close(&key(Key::Q, Action::Press)));
    }

    #[test]
    fn non_key_events_do_not() {
        assert!(!requests_close(&WindowEvent::Focus(true)));
        assert!(!requests_close(&WindowEvent::Close));
    }
}
