//! Terminal dimension bookkeeping.
//!
//! Layout: header (1) + blank (1) + segment list + blank (1) + review
//! panel + status bar (1). The review panel gets a fixed share and the
//! segment list takes the rest.

use bubbletea_rs::Cmd;

use super::ComposerApp;

/// Rows taken by the header, separators, and status bar.
const CHROME_ROWS: u16 = 4;

/// Rows reserved for the review panel below the segment list.
const REVIEW_PANEL_ROWS: u16 = 8;

impl ComposerApp {
    /// Handles a terminal resize event.
    pub(super) const fn handle_resize(&mut self, width: u16, height: u16) -> Option<Cmd> {
        self.apply_dimensions(width, height);
        None
    }

    /// Stores the dimensions and resizes the segment list window.
    pub(super) const fn apply_dimensions(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;

        let list_height = height.saturating_sub(CHROME_ROWS + REVIEW_PANEL_ROWS) as usize;
        self.segment_list.set_visible_height(list_height);
    }
}
