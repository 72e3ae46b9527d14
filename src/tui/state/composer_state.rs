//! Cursor, overlay, and copy feedback state for the composer.
//!
//! This module provides types for tracking the user's position within the
//! segment list and within whichever overlay is capturing input. The design
//! keeps cursor positions valid when the underlying lists change (clamped
//! to range).

/// Overlay panels that can capture input in the composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayKind {
    /// No overlay; keys act on the segment list.
    #[default]
    None,
    /// Category picker for the selected segment.
    CategoryPicker,
    /// Item picker for the selected segment.
    ItemPicker,
    /// Characteristic toggle list for the selected segment.
    CharacteristicToggles,
}

/// Transient feedback shown after a clipboard copy attempt.
///
/// Feedback is displayed for a fixed window and then reset to `Idle` by a
/// timer message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CopyFeedback {
    /// No copy attempt is pending display.
    #[default]
    Idle,
    /// The last copy attempt succeeded.
    Copied,
    /// The last copy attempt failed with the given reason.
    Failed(String),
}

impl CopyFeedback {
    /// Returns the status line for this feedback, or `None` when idle.
    #[must_use]
    pub fn notice(&self) -> Option<String> {
        match self {
            Self::Idle => None,
            Self::Copied => Some("Copied!".to_owned()),
            Self::Failed(reason) => Some(format!("Copy failed: {reason}")),
        }
    }
}

/// State managing the segment cursor and the active overlay.
#[derive(Debug, Clone, Default)]
pub struct ComposerState {
    /// Current segment cursor position (0-indexed).
    pub segment_cursor: usize,
    /// Currently open overlay, if any.
    pub overlay: OverlayKind,
    /// Cursor position within the open overlay (0-indexed).
    pub overlay_cursor: usize,
}

impl ComposerState {
    /// Creates a new composer state with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when an overlay is capturing input.
    #[must_use]
    pub const fn overlay_open(&self) -> bool {
        !matches!(self.overlay, OverlayKind::None)
    }

    /// Opens `overlay` with its cursor on the given option.
    pub const fn open_overlay(&mut self, overlay: OverlayKind, cursor: usize) {
        self.overlay = overlay;
        self.overlay_cursor = cursor;
    }

    /// Closes any open overlay and resets its cursor.
    pub const fn close_overlay(&mut self) {
        self.overlay = OverlayKind::None;
        self.overlay_cursor = 0;
    }

    /// Moves the segment cursor up by one position if possible.
    pub const fn cursor_up(&mut self) {
        self.segment_cursor = self.segment_cursor.saturating_sub(1);
    }

    /// Moves the segment cursor down by one position if within bounds.
    pub const fn cursor_down(&mut self, max_index: usize) {
        if self.segment_cursor < max_index {
            self.segment_cursor = self.segment_cursor.saturating_add(1);
        }
    }

    /// Clamps the segment cursor to be within the valid range.
    ///
    /// If the list is empty, the cursor is set to 0. If the cursor exceeds
    /// the list length, it is set to the last valid index.
    pub const fn clamp_cursor(&mut self, count: usize) {
        if count == 0 {
            self.segment_cursor = 0;
        } else if self.segment_cursor >= count {
            self.segment_cursor = count.saturating_sub(1);
        }
    }

    /// Moves the overlay cursor up by one position if possible.
    pub const fn overlay_cursor_up(&mut self) {
        self.overlay_cursor = self.overlay_cursor.saturating_sub(1);
    }

    /// Moves the overlay cursor down by one position if within bounds.
    pub const fn overlay_cursor_down(&mut self, max_index: usize) {
        if self.overlay_cursor < max_index {
            self.overlay_cursor = self.overlay_cursor.saturating_add(1);
        }
    }
}
