//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages. Mapping is context-free: the same key
//! always produces the same message, and the application model decides what
//! that message means for the segment list or the open overlay.

use super::messages::AppMsg;

/// Maps a key event to an application message.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
pub fn map_key_to_message(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    use crossterm::event::{KeyCode, KeyModifiers};

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.key {
            KeyCode::Char('c') => Some(AppMsg::Quit),
            _ => None,
        };
    }

    match key.key {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::Char('a') => Some(AppMsg::AddSegment),
        KeyCode::Char('c') => Some(AppMsg::OpenCategoryPicker),
        KeyCode::Char('i') => Some(AppMsg::OpenItemPicker),
        KeyCode::Char('x') => Some(AppMsg::OpenCharacteristicToggles),
        KeyCode::Char('1') => Some(AppMsg::SetRating(1)),
        KeyCode::Char('2') => Some(AppMsg::SetRating(2)),
        KeyCode::Char('3') => Some(AppMsg::SetRating(3)),
        KeyCode::Char('4') => Some(AppMsg::SetRating(4)),
        KeyCode::Char('5') => Some(AppMsg::SetRating(5)),
        KeyCode::Char('g') => Some(AppMsg::GenerateRequested),
        KeyCode::Char('y') => Some(AppMsg::CopyRequested),
        KeyCode::Char(' ') => Some(AppMsg::ToggleSelected),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        KeyCode::Enter => Some(AppMsg::ConfirmSelection),
        KeyCode::Esc => Some(AppMsg::EscapePressed),
        _ => None,
    }
}
