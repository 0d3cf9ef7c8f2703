mod payload;
mod transport;
mod workflow;

// Public API of the submission subsystem.
pub use crate::error::SubmitError;
pub use payload::SubmissionPayload;
pub use transport::{HttpTransport, SubmissionTransport};
pub use workflow::{SubmissionWorkflow, SubmitAttempt, SubmitStatus};
