//! Clipboard export for generated reviews.
//!
//! The gateway trait keeps clipboard plumbing behind a mockable seam.
//! The production implementation emits an OSC 52 escape sequence on
//! stdout, which asks the terminal emulator to place the payload on
//! the system clipboard; this works anywhere the terminal does,
//! including over SSH, without a windowing dependency. Failures are
//! reported to the caller rather than swallowed.

use std::io::{self, Write};

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use thiserror::Error;

/// Errors surfaced by clipboard writes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClipboardError {
    /// The clipboard write could not be completed.
    #[error("clipboard write failed: {message}")]
    WriteFailed {
        /// Detail from the underlying write.
        message: String,
    },

    /// Clipboard integration was switched off by configuration.
    #[error("clipboard integration is disabled")]
    Disabled,
}

/// Gateway that can place text on the system clipboard.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClipboardGateway: Send + Sync {
    /// Writes `text` to the clipboard.
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard gateway backed by the OSC 52 terminal escape sequence.
///
/// The sequence is written to stdout where the terminal emulator
/// intercepts it; it never reaches the visible screen.
#[derive(Debug, Default, Clone, Copy)]
pub struct Osc52Clipboard;

#[async_trait]
impl ClipboardGateway for Osc52Clipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        tracing::debug!("writing {} characters to clipboard via OSC 52", text.chars().count());

        let sequence = encode_osc52(text);
        write_stdout(sequence.as_bytes()).map_err(|error| {
            tracing::debug!("OSC 52 write failed: {error}");
            ClipboardError::WriteFailed {
                message: error.to_string(),
            }
        })
    }
}

/// Gateway installed when the user opts out of clipboard writes;
/// every write fails with [`ClipboardError::Disabled`].
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledClipboard;

#[async_trait]
impl ClipboardGateway for DisabledClipboard {
    async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Disabled)
    }
}

/// Frames `text` as an OSC 52 set-clipboard sequence for the `c`
/// (system clipboard) selection.
fn encode_osc52(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

fn write_stdout(bytes: &[u8]) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(bytes)?;
    stdout.flush()
}

#[cfg(feature = "test-support")]
pub mod test_support {
    //! Recording clipboard gateway for asserting copy flows in tests.

    use std::sync::{Mutex, PoisonError};

    use async_trait::async_trait;

    use super::{ClipboardError, ClipboardGateway};

    /// Clipboard gateway that records every write and returns a
    /// scripted outcome.
    #[derive(Debug, Default)]
    pub struct RecordingClipboard {
        writes: Mutex<Vec<String>>,
        failure: Option<ClipboardError>,
    }

    impl RecordingClipboard {
        /// Creates a gateway whose writes all succeed.
        #[must_use]
        pub fn succeeding() -> Self {
            Self::default()
        }

        /// Creates a gateway whose writes all fail with `error`.
        #[must_use]
        pub const fn failing(error: ClipboardError) -> Self {
            Self {
                writes: Mutex::new(Vec::new()),
                failure: Some(error),
            }
        }

        /// Returns a copy of the payloads written so far.
        #[must_use]
        pub fn writes(&self) -> Vec<String> {
            self.writes
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }
    }

    #[async_trait]
    impl ClipboardGateway for RecordingClipboard {
        async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            self.writes
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(text.to_owned());
            self.failure.clone().map_or(Ok(()), Err)
        }
    }
}
