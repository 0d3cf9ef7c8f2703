//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::CatalogError;

/// Errors emitted while sending answers to the remote endpoint.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubmitError {
    #[error("submission rejected with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    /// Raised by `SubmissionTransport` implementations that do not go
    /// through reqwest.
    #[error("transport failure: {0}")]
    Transport(String),
}

/// Errors emitted while loading `SubmissionConfig`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid endpoint `{raw}`: {reason}")]
    InvalidEndpoint { raw: String, reason: String },
    #[error("invalid timeout `{raw}`: expected a positive number of seconds")]
    InvalidTimeout { raw: String },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
