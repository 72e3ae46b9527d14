//! Handlers for segment creation, rating, and notice dismissal.
//!
//! Rating validation lives in the session; these handlers surface any
//! rejection as an inline notice instead of mutating state themselves.

use bubbletea_rs::Cmd;

use super::{ADD_SEGMENT_HINT, ComposerApp};

impl ComposerApp {
    /// Appends a new empty segment and moves the cursor onto it.
    pub(super) fn handle_add_segment(&mut self) -> Option<Cmd> {
        let index = self.session.add_segment();
        self.composer_state.segment_cursor = index;
        self.notice = None;
        None
    }

    /// Applies a star rating to the selected segment.
    pub(super) fn handle_set_rating(&mut self, value: u8) -> Option<Cmd> {
        if self.session.is_empty() {
            self.notice = Some(ADD_SEGMENT_HINT.to_owned());
            return None;
        }

        let index = self.composer_state.segment_cursor;
        match self.session.set_rating(index, value) {
            Ok(()) => self.notice = None,
            Err(error) => self.notice = Some(error.to_string()),
        }
        None
    }

    /// Dismisses the current inline notice.
    pub(super) fn handle_escape(&mut self) -> Option<Cmd> {
        self.notice = None;
        None
    }
}
