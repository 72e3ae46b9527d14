//! State management for the composer TUI.
//!
//! This module provides the core state types for tracking the segment
//! cursor, the active overlay, and transient copy feedback.

mod composer_state;

pub use composer_state::{ComposerState, CopyFeedback, OverlayKind};
