//! Application telemetry events and sinks.
//!
//! Morsel is a local-first tool, but it still benefits from
//! lightweight telemetry to support debugging: generation outcomes
//! and clipboard results can be streamed as JSON lines without
//! touching the interface.

use std::io;

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by Morsel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// A review was generated successfully.
    ReviewGenerated {
        /// Number of segments in the session at generation time.
        segment_count: usize,
        /// Number of segment sentences in the paragraph.
        sentence_count: usize,
        /// Aggregate sentiment label (e.g. `excellent`).
        sentiment: String,
    },

    /// Generation was rejected by validation.
    GenerationRejected {
        /// Human-readable rejection reason.
        reason: String,
    },

    /// A generated review reached the clipboard.
    ClipboardCopied {
        /// Number of characters handed to the clipboard.
        characters: usize,
    },

    /// A clipboard write failed.
    ClipboardFailed {
        /// Human-readable failure reason.
        reason: String,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
///
/// Each line pairs the event with a `recorded_at` RFC 3339 timestamp.
/// This is intended for local debugging and is not transmitted
/// anywhere.
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

/// JSONL envelope pairing an event with its timestamp.
#[derive(Debug, Serialize)]
struct RecordedEvent<'a> {
    /// RFC 3339 timestamp taken when the event was recorded.
    recorded_at: String,
    /// The event itself, flattened into the envelope object.
    #[serde(flatten)]
    event: &'a TelemetryEvent,
}

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let envelope = RecordedEvent {
            recorded_at: Utc::now().to_rfc3339(),
            event: &event,
        };
        let Ok(serialised) = serde_json::to_string(&envelope) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

#[cfg(feature = "test-support")]
pub mod test_support {
    //! Recording sink for asserting telemetry in tests.

    use std::sync::{Mutex, PoisonError};

    use super::{TelemetryEvent, TelemetrySink};

    /// Telemetry sink that stores every event for later assertions.
    #[derive(Debug, Default)]
    pub struct RecordingTelemetrySink {
        events: Mutex<Vec<TelemetryEvent>>,
    }

    impl RecordingTelemetrySink {
        /// Returns a copy of the events recorded so far.
        #[must_use]
        pub fn events(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }
    }

    impl TelemetrySink for RecordingTelemetrySink {
        fn record(&self, event: TelemetryEvent) {
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::test_support::RecordingTelemetrySink;
    use super::{RecordedEvent, TelemetryEvent, TelemetrySink};

    #[test]
    fn recording_sink_captures_events() {
        let sink = RecordingTelemetrySink::default();
        sink.record(TelemetryEvent::ClipboardCopied { characters: 120 });

        assert_eq!(
            sink.events(),
            vec![TelemetryEvent::ClipboardCopied { characters: 120 }]
        );
    }

    #[test]
    fn events_serialise_with_snake_case_tags() {
        let event = TelemetryEvent::ReviewGenerated {
            segment_count: 2,
            sentence_count: 1,
            sentiment: "average".to_owned(),
        };

        let json = serde_json::to_value(&event).expect("event should serialise");

        assert_eq!(
            json.get("type").and_then(Value::as_str),
            Some("review_generated")
        );
        assert_eq!(
            json.get("sentence_count").and_then(Value::as_u64),
            Some(1)
        );
    }

    #[test]
    fn envelope_flattens_the_event_beside_the_timestamp() {
        let event = TelemetryEvent::GenerationRejected {
            reason: "no rating provided".to_owned(),
        };
        let envelope = RecordedEvent {
            recorded_at: "2025-01-01T00:00:00+00:00".to_owned(),
            event: &event,
        };

        let json = serde_json::to_value(&envelope).expect("envelope should serialise");

        assert_eq!(
            json.get("recorded_at").and_then(Value::as_str),
            Some("2025-01-01T00:00:00+00:00")
        );
        assert_eq!(
            json.get("type").and_then(Value::as_str),
            Some("generation_rejected")
        );
        assert_eq!(
            json.get("reason").and_then(Value::as_str),
            Some("no rating provided")
        );
    }
}
