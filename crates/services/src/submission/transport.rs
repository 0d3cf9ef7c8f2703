use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::config::SubmissionConfig;
use crate::error::SubmitError;
use super::payload::SubmissionPayload;

/// Outbound channel for a finished answer set.
///
/// One call per submission attempt. Implementations must not retry.
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    /// Deliver the payload.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError` when the endpoint cannot be reached or answers
    /// with a non-success status.
    async fn send(&self, payload: &SubmissionPayload) -> Result<(), SubmitError>;
}

/// POSTs the payload as JSON and treats any 2xx status as success.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
    endpoint: Url,
}

impl HttpTransport {
    /// Build a transport honouring the configured client timeout.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::Http` if the HTTP client cannot be built.
    pub fn from_config(config: &SubmissionConfig) -> Result<Self, SubmitError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl SubmissionTransport for HttpTransport {
    async fn send(&self, payload: &SubmissionPayload) -> Result<(), SubmitError> {
        tracing::debug!(endpoint = %self.endpoint, "posting answers");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::HttpStatus(status));
        }

        tracing::debug!(endpoint = %self.endpoint, %status, "endpoint accepted answers");
        Ok(())
    }
}
