//! Key mapping from terminal events to abstract actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use gridfall_types::Action;

/// Map a key code to an action.
///
/// Unrecognized keys map to `None` and are ignored by the caller:
/// no state change, no error.
pub fn key_to_action(code: KeyCode) -> Option<Action> {
    match code {
        // Movement
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Action::Up),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Action::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Action::Right),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Action::Down),

        // Commit / cancel
        KeyCode::Char(' ') | KeyCode::Enter => Some(Action::Drop),
        KeyCode::Esc | KeyCode::Backspace => Some(Action::Escape),

        _ => None,
    }
}

/// Map a full key event to an action.
///
/// Press and repeat events both latch; terminal auto-repeat re-latches
/// the same action every time it fires, independent of frame
/// boundaries. Release events map to `None`.
pub fn handle_key_event(key: KeyEvent) -> Option<Action> {
    match key.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => key_to_action(key.code),
        KeyEventKind::Release => None,
    }
}
