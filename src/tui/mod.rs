//! Terminal User Interface for composing restaurant reviews.
//!
//! This module provides an interactive TUI for building a segment
//! session, generating the review paragraph, and copying it to the
//! clipboard, using the bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::ComposerApp`]
//! - **View**: Rendering logic in each component's `view()` method
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`state`]: Cursor, overlay, and copy feedback state
//! - `components`: Reusable UI components
//! - [`input`]: Key-to-message mapping for input handling
//!
//! # Startup Context
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, startup context flows through module-level storage. Call
//! [`set_initial_terminal_size`], [`set_clipboard_gateway`], and
//! [`set_telemetry_sink`] before starting the program, and
//! `ComposerApp::init()` will retrieve them.

pub mod app;
mod components;
pub mod input;
pub mod messages;
pub mod state;
mod storage;

pub use app::ComposerApp;
pub use storage::{set_clipboard_gateway, set_initial_terminal_size, set_telemetry_sink};

pub(crate) use storage::{copy_review_text, get_initial_terminal_size, record_telemetry};
