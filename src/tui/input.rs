//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal
//! key events into application messages.

use super::messages::AppMsg;

/// Maps a key event to an application message.
///
/// Returns `None` for unrecognised key events, allowing them to be
/// ignored.
#[must_use]
#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
pub fn map_key_to_message(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    use crossterm::event::KeyCode;

    match key.key {
        KeyCode::Char('q') | KeyCode::Esc => Some(AppMsg::Quit),
        KeyCode::Char('h') | KeyCode::Left => Some(AppMsg::CursorLeft),
        KeyCode::Char('l') | KeyCode::Right => Some(AppMsg::CursorRight),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char(' ' | 'x') | KeyCode::Enter => Some(AppMsg::ToggleCurrent),
        KeyCode::Char('n') | KeyCode::PageDown => Some(AppMsg::NextBatch),
        KeyCode::Char('p') | KeyCode::PageUp => Some(AppMsg::PreviousBatch),
        KeyCode::Char('s') => Some(AppMsg::SaveRequested),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use bubbletea_rs::event::KeyMsg;
    use crossterm::event::{KeyCode, KeyModifiers};
    use rstest::rstest;

    use super::*;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[rstest]
    #[case(KeyCode::Char('q'), Some(AppMsg::Quit))]
    #[case(KeyCode::Esc, Some(AppMsg::Quit))]
    #[case(KeyCode::Char(' '), Some(AppMsg::ToggleCurrent))]
    #[case(KeyCode::Enter, Some(AppMsg::ToggleCurrent))]
    #[case(KeyCode::Char('n'), Some(AppMsg::NextBatch))]
    #[case(KeyCode::Char('p'), Some(AppMsg::PreviousBatch))]
    #[case(KeyCode::Char('s'), Some(AppMsg::SaveRequested))]
    #[case(KeyCode::Left, Some(AppMsg::CursorLeft))]
    #[case(KeyCode::Char('j'), Some(AppMsg::CursorDown))]
    #[case(KeyCode::Char('z'), None)]
    fn maps_keys_to_messages(#[case] code: KeyCode, #[case] expected: Option<AppMsg>) {
        assert_eq!(map_key_to_message(&key(code)), expected);
    }
}
