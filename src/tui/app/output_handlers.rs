//! Handlers for review generation and clipboard export.
//!
//! Generation runs synchronously inside the update loop; only the
//! clipboard write is asynchronous. Copy outcomes surface as transient
//! feedback that a timer clears after a fixed window. Each outcome
//! advances an epoch counter carried by its expiry message, so a timer
//! armed for an earlier outcome cannot clear a later one.

use std::any::Any;
use std::time::Duration;

use bubbletea_rs::Cmd;

use super::ComposerApp;
use crate::review::{ReviewError, generate};
use crate::telemetry::TelemetryEvent;
use crate::tui::messages::AppMsg;
use crate::tui::state::CopyFeedback;

/// How long copy feedback stays visible before reverting to the hints.
const COPY_FEEDBACK_WINDOW: Duration = Duration::from_secs(2);

/// Notice shown when copying is requested before any generation.
const GENERATE_HINT: &str = "Generate a review first by pressing 'g'.";

/// Notice shown when generation is rejected for want of a rating.
const NO_RATING_NOTICE: &str = "Please select at least one star rating for any segment.";

impl ComposerApp {
    /// Regenerates the review text from the current session.
    ///
    /// On rejection the previous output is cleared rather than left on
    /// screen, so the panel never shows a paragraph the current session
    /// cannot produce.
    pub(super) fn handle_generate_requested(&mut self) -> Option<Cmd> {
        match generate(&self.session) {
            Ok(review) => {
                crate::tui::record_telemetry(TelemetryEvent::ReviewGenerated {
                    segment_count: self.session.len(),
                    sentence_count: review.sentence_count(),
                    sentiment: review.sentiment().label().to_owned(),
                });
                self.generated = Some(review);
                self.notice = None;
            }
            Err(error) => {
                crate::tui::record_telemetry(TelemetryEvent::GenerationRejected {
                    reason: error.to_string(),
                });
                self.generated = None;
                self.notice = Some(generation_notice(&error));
            }
        }
        None
    }

    /// Starts an async clipboard write of the generated review.
    pub(super) fn handle_copy_requested(&mut self) -> Option<Cmd> {
        let Some(review) = &self.generated else {
            self.notice = Some(GENERATE_HINT.to_owned());
            return None;
        };

        let text = review.text().to_owned();
        Some(Box::pin(async move {
            match crate::tui::copy_review_text(text).await {
                Ok(characters) => {
                    Some(Box::new(AppMsg::CopyComplete { characters }) as Box<dyn Any + Send>)
                }
                Err(error) => {
                    Some(Box::new(AppMsg::copy_failure(&error)) as Box<dyn Any + Send>)
                }
            }
        }))
    }

    /// Records a successful copy and arms the feedback timer.
    pub(super) fn handle_copy_complete(&mut self, characters: usize) -> Option<Cmd> {
        crate::tui::record_telemetry(TelemetryEvent::ClipboardCopied { characters });
        self.copy_feedback = CopyFeedback::Copied;
        Some(self.arm_feedback_timer())
    }

    /// Records a failed copy and arms the feedback timer.
    pub(super) fn handle_copy_failed(&mut self, reason: &str) -> Option<Cmd> {
        crate::tui::record_telemetry(TelemetryEvent::ClipboardFailed {
            reason: reason.to_owned(),
        });
        self.copy_feedback = CopyFeedback::Failed(reason.to_owned());
        Some(self.arm_feedback_timer())
    }

    /// Clears copy feedback when its expiry timer fires.
    ///
    /// Timers from an earlier feedback window carry a stale epoch and
    /// are ignored.
    pub(super) fn handle_copy_feedback_expired(&mut self, epoch: u64) -> Option<Cmd> {
        if epoch == self.feedback_epoch {
            self.copy_feedback = CopyFeedback::Idle;
        }
        None
    }

    /// Creates a command that expires the current feedback window.
    fn arm_feedback_timer(&mut self) -> Cmd {
        self.feedback_epoch = self.feedback_epoch.wrapping_add(1);
        let epoch = self.feedback_epoch;
        Box::pin(async move {
            tokio::time::sleep(COPY_FEEDBACK_WINDOW).await;
            Some(Box::new(AppMsg::CopyFeedbackExpired(epoch)) as Box<dyn Any + Send>)
        })
    }
}

/// Maps a generation error to its inline notice text.
fn generation_notice(error: &ReviewError) -> String {
    match error {
        ReviewError::NoRatingProvided => NO_RATING_NOTICE.to_owned(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "output_handlers_tests.rs"]
mod tests;
