use quiz_core::Clock;
use quiz_core::model::{AnswerSet, Messages, Notice, SubmissionOutcome};

use crate::error::SubmitError;
use super::payload::SubmissionPayload;

/// Result of a submit intent before any request is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Some items are unanswered; the incomplete notice is shown.
    Rejected,
    /// A submission is already in flight; the intent is dropped.
    AlreadySubmitting,
    /// Validation passed; send this payload and report back with `complete`.
    Ready(SubmissionPayload),
}

/// How a submit intent ended, for callers that drive the whole cycle at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    Rejected,
    Ignored,
    Sent,
    Failed,
}

/// Completeness gate and request lifecycle for one quiz.
///
/// The workflow never sends anything itself: `begin` hands out the payload and
/// flips the in-flight flag, `complete` records how the request ended.
#[derive(Debug, Clone, Default)]
pub struct SubmissionWorkflow {
    clock: Clock,
    messages: Messages,
    outcome: SubmissionOutcome,
    notice: Option<Notice>,
}

impl SubmissionWorkflow {
    #[must_use]
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Handle a submit intent against the current answers.
    pub fn begin(&mut self, answers: &AnswerSet) -> SubmitAttempt {
        if self.is_submitting() {
            tracing::debug!("submit ignored: a submission is already in flight");
            return SubmitAttempt::AlreadySubmitting;
        }

        self.notice = None;

        if !answers.is_complete() {
            let progress = answers.progress();
            tracing::info!(
                answered = progress.answered,
                total = progress.total,
                "submit rejected: answers incomplete"
            );
            self.notice = Some(Notice::Incomplete);
            return SubmitAttempt::Rejected;
        }

        self.outcome = SubmissionOutcome::InFlight {
            started_at: self.clock.now(),
        };
        tracing::info!(items = answers.len(), "submission started");
        SubmitAttempt::Ready(SubmissionPayload::new(answers.clone()))
    }

    /// Record the result of the request started by `begin`.
    ///
    /// A result arriving while nothing is in flight is ignored.
    pub fn complete(&mut self, result: Result<(), SubmitError>) -> SubmitStatus {
        if !self.is_submitting() {
            tracing::warn!("submission result arrived with nothing in flight");
            return SubmitStatus::Ignored;
        }

        let at = self.clock.now();
        match result {
            Ok(()) => {
                tracing::info!("submission succeeded");
                self.outcome = SubmissionOutcome::Succeeded { at };
                self.notice = Some(Notice::Sent);
                SubmitStatus::Sent
            }
            Err(err) => {
                tracing::warn!(error = %err, "submission failed");
                self.outcome = SubmissionOutcome::Failed {
                    at,
                    reason: err.to_string(),
                };
                self.notice = Some(Notice::Failed);
                SubmitStatus::Failed
            }
        }
    }

    /// Drop the feedback message. Does not touch the in-flight flag.
    pub fn clear_message(&mut self) {
        self.notice = None;
    }

    #[must_use]
    pub fn current_message(&self) -> Option<&str> {
        self.notice.map(|notice| self.messages.text(notice))
    }

    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.outcome.is_in_flight()
    }

    #[must_use]
    pub fn outcome(&self) -> &SubmissionOutcome {
        &self.outcome
    }
}
