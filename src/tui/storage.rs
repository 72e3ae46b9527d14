//! Startup context storage for the composer TUI.
//!
//! This module owns the global `OnceLock` values used during TUI
//! bootstrapping and provides the setter/getter functions consumed by CLI
//! wiring and app handlers.

use std::sync::{Arc, OnceLock};

use crossterm::terminal;

use crate::clipboard::{ClipboardError, ClipboardGateway, Osc52Clipboard};
use crate::telemetry::{NoopTelemetrySink, TelemetryEvent, TelemetrySink};

/// Global storage for initial terminal dimensions.
///
/// This is set before the TUI program starts and read by
/// `ComposerApp::new()` so the first frame uses the actual terminal size.
static INITIAL_TERMINAL_SIZE: OnceLock<(u16, u16)> = OnceLock::new();

/// Global storage for the clipboard gateway.
///
/// This is set before the TUI program starts to control where copied
/// review text goes. Without this, an OSC 52 gateway writing to stdout
/// is used.
static CLIPBOARD_GATEWAY: OnceLock<Arc<dyn ClipboardGateway>> = OnceLock::new();

/// Static fallback clipboard gateway to avoid allocations on each call.
///
/// This is used by `get_clipboard_gateway` when no gateway has been
/// configured, avoiding repeated `Arc::new` allocations.
static DEFAULT_CLIPBOARD_GATEWAY: OnceLock<Arc<dyn ClipboardGateway>> = OnceLock::new();

/// Global storage for telemetry sink.
///
/// This is set before the TUI program starts to enable generation and
/// clipboard event recording.
static TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Static fallback telemetry sink to avoid allocations on each call.
///
/// This is used by `get_telemetry_sink` when no sink has been configured,
/// avoiding repeated `Arc::new` allocations.
static DEFAULT_TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Sets the initial terminal dimensions for the TUI application.
///
/// This should be called before starting the bubbletea-rs program so the
/// initial render can use the actual terminal size instead of fallbacks.
///
/// # Arguments
///
/// * `width` - Terminal width in columns.
/// * `height` - Terminal height in rows.
///
/// # Returns
///
/// `true` if the dimensions were set, `false` if they were already set.
pub fn set_initial_terminal_size(width: u16, height: u16) -> bool {
    INITIAL_TERMINAL_SIZE.set((width, height)).is_ok()
}

/// Sets the clipboard gateway used for copy requests.
///
/// This must be called before starting the bubbletea-rs program to
/// replace the default OSC 52 gateway, for example with a disabled
/// gateway when the user opted out of clipboard writes.
///
/// # Arguments
///
/// * `gateway` - The clipboard gateway to use for copy requests.
///
/// # Returns
///
/// `true` if the gateway was set, `false` if it was already set.
pub fn set_clipboard_gateway(gateway: Arc<dyn ClipboardGateway>) -> bool {
    CLIPBOARD_GATEWAY.set(gateway).is_ok()
}

/// Sets the telemetry sink for the TUI application.
///
/// This must be called before starting the bubbletea-rs program to enable
/// generation and clipboard event recording. Without this, a no-op sink
/// is used.
///
/// # Arguments
///
/// * `sink` - The telemetry sink to use for recording events.
///
/// # Returns
///
/// `true` if the sink was set, `false` if it was already set.
pub fn set_telemetry_sink(sink: Arc<dyn TelemetrySink>) -> bool {
    TELEMETRY_SINK.set(sink).is_ok()
}

/// Gets the clipboard gateway, returning the OSC 52 gateway if not
/// configured.
///
/// Uses a static fallback gateway to avoid allocating a new `Arc` on each
/// call when no gateway has been configured.
fn get_clipboard_gateway() -> Arc<dyn ClipboardGateway> {
    CLIPBOARD_GATEWAY.get().cloned().unwrap_or_else(|| {
        Arc::clone(DEFAULT_CLIPBOARD_GATEWAY.get_or_init(|| Arc::new(Osc52Clipboard)))
    })
}

/// Gets the telemetry sink, returning a no-op sink if not configured.
///
/// Uses a static fallback sink to avoid allocating a new `Arc` on each
/// call when no sink has been configured.
fn get_telemetry_sink() -> Arc<dyn TelemetrySink> {
    TELEMETRY_SINK.get().cloned().unwrap_or_else(|| {
        Arc::clone(DEFAULT_TELEMETRY_SINK.get_or_init(|| Arc::new(NoopTelemetrySink)))
    })
}

/// Records a telemetry event through the configured sink.
///
/// Called internally by the app after generation and clipboard outcomes.
pub(crate) fn record_telemetry(event: TelemetryEvent) {
    get_telemetry_sink().record(event);
}

/// Writes review text to the configured clipboard gateway.
///
/// Returns the number of characters written on success. Called internally
/// by the copy command spawned from the app.
pub(crate) async fn copy_review_text(text: String) -> Result<usize, ClipboardError> {
    let characters = text.chars().count();
    get_clipboard_gateway().write_text(&text).await?;
    Ok(characters)
}

/// Gets the initial terminal dimensions from storage.
///
/// Called internally by `ComposerApp::new()`. Returns the stored
/// dimensions or fallback dimensions if none were set.
pub(crate) fn get_initial_terminal_size() -> (u16, u16) {
    const DEFAULT_WIDTH: u16 = 80;
    const DEFAULT_HEIGHT: u16 = 24;

    INITIAL_TERMINAL_SIZE
        .get()
        .copied()
        .filter(|(width, height)| *width > 0 && *height > 0)
        .or_else(|| {
            terminal::size()
                .ok()
                .filter(|(width, height)| *width > 0 && *height > 0)
        })
        .unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT))
}
