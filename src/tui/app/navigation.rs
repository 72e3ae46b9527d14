//! Navigation handlers for the segment cursor.
//!
//! The segment list derives its visible window from the cursor position,
//! so movement only needs to keep the cursor within the session bounds.

use bubbletea_rs::Cmd;

use super::ComposerApp;

impl ComposerApp {
    /// Handles cursor up navigation.
    pub(super) const fn handle_cursor_up(&mut self) -> Option<Cmd> {
        self.composer_state.cursor_up();
        None
    }

    /// Handles cursor down navigation.
    pub(super) const fn handle_cursor_down(&mut self) -> Option<Cmd> {
        let max_index = self.session.len().saturating_sub(1);
        self.composer_state.cursor_down(max_index);
        None
    }
}
