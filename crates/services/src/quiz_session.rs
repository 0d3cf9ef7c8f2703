use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::model::{
    AnswerError, AnswerProgress, AnswerSet, ItemCatalog, Judgment, Messages, SubmissionOutcome,
    Verdict,
};

use crate::config::SubmissionConfig;
use crate::error::SubmitError;
use crate::submission::{
    HttpTransport, SubmissionPayload, SubmissionTransport, SubmissionWorkflow, SubmitAttempt,
    SubmitStatus,
};

/// A request that passed validation and still has to be sent.
///
/// Send it (possibly on another task) and hand the result back to
/// [`QuizSession::complete_submit`].
pub struct PendingSubmission {
    payload: SubmissionPayload,
    transport: Arc<dyn SubmissionTransport>,
}

impl PendingSubmission {
    #[must_use]
    pub fn payload(&self) -> &SubmissionPayload {
        &self.payload
    }

    /// Perform the single outbound call for this attempt.
    ///
    /// # Errors
    ///
    /// Returns the transport's `SubmitError` unchanged.
    pub async fn send(self) -> Result<(), SubmitError> {
        self.transport.send(&self.payload).await
    }
}

/// Outcome of a submit intent in its split form.
pub enum BeginSubmit {
    Rejected,
    AlreadySubmitting,
    Pending(PendingSubmission),
}

/// Answers for one quiz plus the submission workflow that reports them.
///
/// This is the whole surface a display needs: read the answers and feedback,
/// emit `select_judgment` and `submit` intents.
pub struct QuizSession {
    answers: AnswerSet,
    workflow: SubmissionWorkflow,
    transport: Arc<dyn SubmissionTransport>,
}

impl QuizSession {
    #[must_use]
    pub fn new(catalog: &ItemCatalog, transport: Arc<dyn SubmissionTransport>) -> Self {
        Self {
            answers: AnswerSet::new(catalog),
            workflow: SubmissionWorkflow::default(),
            transport,
        }
    }

    /// Session posting to the configured endpoint over HTTP.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::Http` if the HTTP client cannot be built.
    pub fn from_config(config: &SubmissionConfig) -> Result<Self, SubmitError> {
        let transport = HttpTransport::from_config(config)?;
        Ok(Self::new(&config.catalog, Arc::new(transport)).with_messages(config.messages.clone()))
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.workflow = self.workflow.with_clock(clock);
        self
    }

    #[must_use]
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.workflow = self.workflow.with_messages(messages);
        self
    }

    /// Select a verdict for `item` and clear any feedback from a prior submit.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError::UnknownItem` if `item` is not in the catalog;
    /// nothing changes in that case.
    pub fn select_judgment(&mut self, item: &str, verdict: Verdict) -> Result<(), AnswerError> {
        self.answers.set_judgment(item, verdict)?;
        self.workflow.clear_message();
        Ok(())
    }

    #[must_use]
    pub fn judgment(&self, item: &str) -> Option<Judgment> {
        self.answers.judgment(item)
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.answered_count()
    }

    #[must_use]
    pub fn progress_fraction(&self) -> f64 {
        self.answers.progress_fraction()
    }

    #[must_use]
    pub fn progress(&self) -> AnswerProgress {
        self.answers.progress()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.answers.is_complete()
    }

    #[must_use]
    pub fn current_message(&self) -> Option<&str> {
        self.workflow.current_message()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.workflow.is_submitting()
    }

    #[must_use]
    pub fn outcome(&self) -> &SubmissionOutcome {
        self.workflow.outcome()
    }

    /// Validate and, when complete, mark the session as submitting.
    ///
    /// The returned `PendingSubmission` carries the request; selections made
    /// before it resolves do not change what is sent.
    pub fn begin_submit(&mut self) -> BeginSubmit {
        match self.workflow.begin(&self.answers) {
            SubmitAttempt::Rejected => BeginSubmit::Rejected,
            SubmitAttempt::AlreadySubmitting => BeginSubmit::AlreadySubmitting,
            SubmitAttempt::Ready(payload) => BeginSubmit::Pending(PendingSubmission {
                payload,
                transport: Arc::clone(&self.transport),
            }),
        }
    }

    /// Record the result of a `PendingSubmission`.
    pub fn complete_submit(&mut self, result: Result<(), SubmitError>) -> SubmitStatus {
        self.workflow.complete(result)
    }

    /// Run a full submit cycle: validate, send, record the result.
    ///
    /// Never fails; every failure ends up as the feedback message.
    pub async fn submit(&mut self) -> SubmitStatus {
        match self.begin_submit() {
            BeginSubmit::Rejected => SubmitStatus::Rejected,
            BeginSubmit::AlreadySubmitting => SubmitStatus::Ignored,
            BeginSubmit::Pending(pending) => {
                let result = pending.send().await;
                self.complete_submit(result)
            }
        }
    }
}
