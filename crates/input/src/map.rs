//! Key mapping from terminal events to keypad presses.

use crate::types::Press;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to keypad presses.
///
/// Chorded keys (Ctrl/Alt) never produce a press.
pub fn handle_key_event(key: KeyEvent) -> Option<Press> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match key.code {
        KeyCode::Char(c @ '2'..='9') => Some(Press::Key(c)),

        KeyCode::Char(' ') => Some(Press::Pause),
        KeyCode::Char('*') | KeyCode::Backspace => Some(Press::Backspace),
        KeyCode::Char('#') | KeyCode::Enter => Some(Press::Send),

        _ => None,
    }
}

/// Check if key should close the keypad.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q')
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_digit_keys() {
        for c in '2'..='9' {
            assert_eq!(
                handle_key_event(KeyEvent::from(KeyCode::Char(c))),
                Some(Press::Key(c))
            );
        }
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('0'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('1'))), None);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(Press::Pause)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('*'))),
            Some(Press::Backspace)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Backspace)),
            Some(Press::Backspace)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('#'))),
            Some(Press::Send)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(Press::Send)
        );
    }

    #[test]
    fn test_chorded_keys_are_ignored() {
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('2'), KeyModifiers::CONTROL)),
            None
        );
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('#'), KeyModifiers::ALT)),
            None
        );
        // Shift is how most layouts reach '#' and '*'.
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('#'), KeyModifiers::SHIFT)),
            Some(Press::Send)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('2'))));
    }
}
