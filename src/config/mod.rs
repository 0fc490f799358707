//! Configuration management module
//!
//! Resolves and validates the reminder service endpoint

use reqwest::Url;

use crate::error::ReminderError;

/// Endpoint used when neither `--backend` nor the environment names one
pub const DEFAULT_BACKEND_URI: &str = "http://localhost:5000";

/// Environment variable overriding the default backend endpoint
pub const BACKEND_ENV_VAR: &str = "REMINDER_BACKEND";

/// Client configuration for a single invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URI of the reminder service
    pub backend_uri: String,
}

impl Default for Config {
    #[inline]
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URI)
    }
}

impl Config {
    /// Create a configuration pointing at `backend_uri`
    #[must_use]
    #[inline]
    pub fn new<S: Into<String>>(backend_uri: S) -> Self {
        Self {
            backend_uri: backend_uri.into(),
        }
    }

    /// Validate the backend endpoint
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The backend URI is not an absolute URL
    /// - The backend URI uses a scheme other than `http` or `https`
    #[inline]
    pub fn validate(&self) -> Result<(), ReminderError> {
        validate_backend_uri(&self.backend_uri)
    }
}

/// Validate a backend URI
fn validate_backend_uri(uri: &str) -> Result<(), ReminderError> {
    if uri.trim().is_empty() {
        return Err(ReminderError::configuration("Backend URI cannot be empty"));
    }

    let url = Url::parse(uri).map_err(|e| {
        ReminderError::configuration(format!("Invalid backend URI '{uri}': {e}"))
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ReminderError::configuration(format!(
            "Unsupported backend URI scheme '{}' in '{uri}'. Use http or https",
            url.scheme()
        )));
    }

    Ok(())
}
