#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod quiz_session;
pub mod submission;

pub use quiz_core::Clock;

pub use config::SubmissionConfig;
pub use error::{ConfigError, SubmitError};
pub use quiz_session::{BeginSubmit, PendingSubmission, QuizSession};
pub use submission::{
    HttpTransport, SubmissionPayload, SubmissionTransport, SubmissionWorkflow, SubmitAttempt,
    SubmitStatus,
};
