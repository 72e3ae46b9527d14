//! Interactive composer mode.
//!
//! This module provides the entry point for the interactive terminal
//! user interface. It seeds the module-level startup context from the
//! configuration and the current terminal, then runs the bubbletea-rs
//! program.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;
use crossterm::terminal;

use morsel::telemetry::StderrJsonlTelemetrySink;
use morsel::tui::{
    ComposerApp, set_clipboard_gateway, set_initial_terminal_size, set_telemetry_sink,
};
use morsel::{DisabledClipboard, MorselConfig};

use super::CliError;

/// Runs the interactive review composer.
///
/// # Errors
///
/// Returns [`CliError::Terminal`] when the TUI fails to initialise or
/// run.
pub async fn run(config: &MorselConfig) -> Result<(), CliError> {
    seed_startup_context(config);

    run_tui().await.map_err(|error| CliError::Terminal {
        message: error.to_string(),
    })
}

/// Stores startup context for `ComposerApp::init()` to retrieve.
///
/// If a value is already set (e.g. re-running the composer in the same
/// process), the existing value remains.
fn seed_startup_context(config: &MorselConfig) {
    if let Ok((width, height)) = terminal::size() {
        let _ = set_initial_terminal_size(width, height);
    }

    if config.no_clipboard {
        let _ = set_clipboard_gateway(Arc::new(DisabledClipboard));
    }

    if config.telemetry {
        let _ = set_telemetry_sink(Arc::new(StderrJsonlTelemetrySink));
    }
}

/// Runs the bubbletea-rs program with the `ComposerApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // Build and run the program using the builder pattern.
    // ComposerApp::init() will retrieve context from module-level storage.
    let program = Program::<ComposerApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    // Ensure stdout is flushed
    io::stdout().flush().ok();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composer_app_can_be_created_empty() {
        let app = ComposerApp::new();
        assert!(app.session().is_empty());
    }
}
