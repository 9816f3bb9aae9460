//! Key mapping from terminal events to scoreboard input events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the scoreboard to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Type a character into the shot field.
    Type(char),
    /// Delete the last character of the shot field.
    Erase,
    /// Submit the shot field to the engine.
    Submit,
    /// Start a new game.
    Reset,
}

/// Map keyboard input to input events.
///
/// Character keys are passed through untouched; the [`ShotField`](crate::ShotField)
/// decides which ones it accepts.
pub fn handle_key_event(key: KeyEvent) -> Option<InputEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') => Some(InputEvent::Reset),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Enter => Some(InputEvent::Submit),
        KeyCode::Backspace | KeyCode::Delete => Some(InputEvent::Erase),
        KeyCode::F(5) | KeyCode::Char('r') | KeyCode::Char('R') => Some(InputEvent::Reset),
        KeyCode::Char(ch) => Some(InputEvent::Type(ch)),
        _ => None,
    }
}

/// Check if key should quit the scoreboard.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
