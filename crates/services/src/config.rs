use std::env;
use std::time::Duration;

use quiz_core::model::{ItemCatalog, Messages};
use url::Url;

use crate::error::ConfigError;

pub const ENDPOINT_VAR: &str = "QUIZ_ENDPOINT";
pub const ITEMS_VAR: &str = "QUIZ_ITEMS";
pub const TIMEOUT_VAR: &str = "QUIZ_TIMEOUT_SECS";
pub const MESSAGE_INCOMPLETE_VAR: &str = "QUIZ_MESSAGE_INCOMPLETE";
pub const MESSAGE_SENT_VAR: &str = "QUIZ_MESSAGE_SENT";
pub const MESSAGE_FAILED_VAR: &str = "QUIZ_MESSAGE_FAILED";

pub const DEFAULT_ENDPOINT: &str = "https://www.example.com";
pub const DEFAULT_ITEMS: [&str; 12] = [
    "ア", "イ", "ウ", "エ", "オ", "カ", "キ", "ク", "ケ", "コ", "サ", "シ",
];

/// Where answers are sent and which items are asked.
#[derive(Clone, Debug)]
pub struct SubmissionConfig {
    pub endpoint: Url,
    pub catalog: ItemCatalog,
    pub timeout: Option<Duration>,
    pub messages: Messages,
}

impl SubmissionConfig {
    /// Build a config with default messages and no client timeout.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEndpoint` if `endpoint` is not an http(s) URL.
    pub fn new(endpoint: &str, catalog: ItemCatalog) -> Result<Self, ConfigError> {
        Ok(Self {
            endpoint: parse_endpoint(endpoint)?,
            catalog,
            timeout: None,
            messages: Messages::default(),
        })
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    /// Load from `QUIZ_*` environment variables, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from an arbitrary key lookup (environment, CLI flags, test maps).
    ///
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a value is present but invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let endpoint = get(ENDPOINT_VAR).unwrap_or_else(|| DEFAULT_ENDPOINT.into());
        let catalog = match get(ITEMS_VAR) {
            Some(raw) => ItemCatalog::parse_list(&raw)?,
            None => ItemCatalog::new(DEFAULT_ITEMS)?,
        };

        let mut config = Self::new(&endpoint, catalog)?;

        if let Some(raw) = get(TIMEOUT_VAR) {
            config.timeout = Some(parse_timeout(&raw)?);
        }

        let defaults = Messages::default();
        config.messages = Messages {
            incomplete: get(MESSAGE_INCOMPLETE_VAR).unwrap_or(defaults.incomplete),
            sent: get(MESSAGE_SENT_VAR).unwrap_or(defaults.sent),
            failed: get(MESSAGE_FAILED_VAR).unwrap_or(defaults.failed),
        };

        Ok(config)
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEndpoint {
        raw: raw.to_string(),
        reason,
    };
    let url = Url::parse(raw.trim()).map_err(|err| invalid(err.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme `{other}`"))),
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|secs| secs.is_finite() && *secs > 0.0)
        .map(Duration::from_secs_f64)
        .ok_or_else(|| ConfigError::InvalidTimeout {
            raw: raw.to_string(),
        })
}
