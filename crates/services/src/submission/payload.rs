use quiz_core::model::AnswerSet;
use serde::Serialize;

/// JSON body sent to the endpoint: `{"answers": {"<item>": "<judgment>", ...}}`.
///
/// Holds a snapshot of the answers taken when the submission started, so later
/// selections do not leak into a request that is already in flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    answers: AnswerSet,
}

impl SubmissionPayload {
    #[must_use]
    pub fn new(answers: AnswerSet) -> Self {
        Self { answers }
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }
}
