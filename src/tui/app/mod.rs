//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the core application state and update logic for the
//! review composer TUI. It owns the segment session, coordinates the
//! components, and dispatches messages to the handler modules.
//!
//! # Module Structure
//!
//! - `routing`: Overlay routing and message dispatch
//! - `navigation`: Segment cursor movement
//! - `segment_handlers`: Segment creation, rating, and notice dismissal
//! - `overlay_handlers`: Picker and toggle overlay interactions
//! - `output_handlers`: Generation and clipboard handling
//! - `layout`: Terminal dimension bookkeeping
//! - `rendering`: View rendering methods for terminal output

use crate::catalog;
use crate::review::{GeneratedReview, ReviewSession, Segment};

use super::components::{PickerComponent, ReviewPanelComponent, SegmentListComponent};
use super::state::{ComposerState, CopyFeedback, OverlayKind};

mod layout;
mod model_impl;
mod navigation;
mod output_handlers;
mod overlay_handlers;
mod rendering;
mod routing;
mod segment_handlers;

/// Notice shown when an action needs a segment and none exists.
const ADD_SEGMENT_HINT: &str = "Add a segment first by pressing 'a'.";

/// Main application model for the review composer TUI.
#[derive(Debug)]
pub struct ComposerApp {
    /// The segment session being composed.
    session: ReviewSession,
    /// Segment cursor and overlay state.
    composer_state: ComposerState,
    /// Most recent generation output, cleared on rejection.
    generated: Option<GeneratedReview>,
    /// Current inline notice, if any.
    notice: Option<String>,
    /// Transient clipboard feedback.
    copy_feedback: CopyFeedback,
    /// Identifies the feedback window the expiry timer belongs to.
    feedback_epoch: u64,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether help overlay is visible.
    show_help: bool,
    /// Segment list component.
    segment_list: SegmentListComponent,
    /// Overlay picker component.
    picker: PickerComponent,
    /// Review output panel component.
    review_panel: ReviewPanelComponent,
}

impl ComposerApp {
    /// Creates a new application with an empty session.
    ///
    /// Terminal dimensions are taken from module-level storage so the
    /// first frame renders at the actual terminal size.
    #[must_use]
    pub fn new() -> Self {
        let (width, height) = crate::tui::get_initial_terminal_size();
        let mut app = Self {
            session: ReviewSession::new(),
            composer_state: ComposerState::new(),
            generated: None,
            notice: None,
            copy_feedback: CopyFeedback::Idle,
            feedback_epoch: 0,
            width,
            height,
            show_help: false,
            segment_list: SegmentListComponent::new(),
            picker: PickerComponent::new(),
            review_panel: ReviewPanelComponent::new(),
        };
        app.apply_dimensions(width, height);
        app
    }

    /// Creates an application seeded with an existing session.
    #[must_use]
    pub fn with_session(session: ReviewSession) -> Self {
        let mut app = Self::new();
        app.composer_state.clamp_cursor(session.len());
        app.session = session;
        app
    }

    /// Returns the session being composed.
    #[must_use]
    pub const fn session(&self) -> &ReviewSession {
        &self.session
    }

    /// Returns the current segment cursor position.
    #[must_use]
    pub const fn cursor_position(&self) -> usize {
        self.composer_state.segment_cursor
    }

    /// Returns the overlay currently capturing input.
    #[must_use]
    pub const fn overlay(&self) -> OverlayKind {
        self.composer_state.overlay
    }

    /// Returns the cursor position within the open overlay.
    #[must_use]
    pub const fn overlay_cursor(&self) -> usize {
        self.composer_state.overlay_cursor
    }

    /// Returns the most recent generation output, if any.
    #[must_use]
    pub const fn generated_review(&self) -> Option<&GeneratedReview> {
        self.generated.as_ref()
    }

    /// Returns the current inline notice, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Returns the current clipboard feedback state.
    #[must_use]
    pub const fn copy_feedback(&self) -> &CopyFeedback {
        &self.copy_feedback
    }

    /// Returns whether the help overlay is visible.
    #[must_use]
    pub const fn is_help_shown(&self) -> bool {
        self.show_help
    }

    /// Returns the segment under the cursor, if any.
    fn selected_segment(&self) -> Option<&Segment> {
        self.session
            .segments()
            .get(self.composer_state.segment_cursor)
    }

    /// Returns the catalog items offered for the selected segment's
    /// category, or an empty slice when no category is chosen.
    fn item_options(&self) -> &'static [&'static str] {
        self.selected_segment()
            .and_then(Segment::category)
            .and_then(catalog::items_for)
            .unwrap_or(&[])
    }

    /// Returns the characteristic labels offered for the selected
    /// segment's item, or an empty slice when no item is chosen.
    fn characteristic_options(&self) -> &'static [&'static str] {
        self.selected_segment()
            .and_then(Segment::item)
            .and_then(catalog::characteristics_for)
            .unwrap_or(&[])
    }
}

impl Default for ComposerApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
