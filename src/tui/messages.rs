//! Message types for the composer TUI update loop.
//!
//! This module defines all message types that can be sent to the
//! application's update function. Messages represent user actions, async
//! command results, and system events.

use crate::clipboard::ClipboardError;

/// Messages for the review composer TUI application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    // Navigation
    /// Move cursor up one entry.
    CursorUp,
    /// Move cursor down one entry.
    CursorDown,

    // Segment editing
    /// Append a new empty segment and select it.
    AddSegment,
    /// Open the category picker for the selected segment.
    OpenCategoryPicker,
    /// Open the item picker for the selected segment.
    OpenItemPicker,
    /// Open the characteristic toggle list for the selected segment.
    OpenCharacteristicToggles,
    /// Confirm the highlighted overlay option.
    ConfirmSelection,
    /// Toggle the highlighted characteristic.
    ToggleSelected,
    /// Set the selected segment's star rating.
    SetRating(u8),
    /// Close the open overlay or dismiss the current notice.
    EscapePressed,

    // Review output
    /// Generate the review text from the current segments.
    GenerateRequested,
    /// Copy the generated review to the clipboard.
    CopyRequested,
    /// Clipboard write completed successfully.
    CopyComplete {
        /// Number of characters handed to the clipboard.
        characters: usize,
    },
    /// Clipboard write failed with an error message.
    CopyFailed(String),
    /// The transient copy feedback window elapsed.
    CopyFeedbackExpired(u64),

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Creates a copy-failure message from a `ClipboardError`.
    #[must_use]
    pub fn copy_failure(error: &ClipboardError) -> Self {
        Self::CopyFailed(error.to_string())
    }

    /// True for cursor movement messages.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(self, Self::CursorUp | Self::CursorDown)
    }

    /// True for messages that edit the selected segment.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(
            self,
            Self::AddSegment
                | Self::OpenCategoryPicker
                | Self::OpenItemPicker
                | Self::OpenCharacteristicToggles
                | Self::ConfirmSelection
                | Self::ToggleSelected
                | Self::SetRating(_)
                | Self::EscapePressed
        )
    }

    /// True for generation and clipboard messages.
    #[must_use]
    pub const fn is_output(&self) -> bool {
        matches!(
            self,
            Self::GenerateRequested
                | Self::CopyRequested
                | Self::CopyComplete { .. }
                | Self::CopyFailed(_)
                | Self::CopyFeedbackExpired(_)
        )
    }
}
