//! Console settings loaded via OrthoConfig.
//!
//! Values layer from CLI flags and `DONOR_CONSOLE_*` environment variables.

use std::time::Duration;

use ortho_config::OrthoConfig;
use reqwest::Url;
use serde::Deserialize;

use crate::error::ConsoleError;

/// Service base URL used when none is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the donor console.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DONOR_CONSOLE")]
pub struct ConsoleSettings {
    /// Base URL of the donor service API, including the `/api` prefix.
    pub api_url: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

impl ConsoleSettings {
    /// Parsed service base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::InvalidUrl`] when the value does not parse or
    /// cannot carry path segments.
    pub fn api_url(&self) -> Result<Url, ConsoleError> {
        let raw = self
            .api_url
            .as_deref()
            .map_or(DEFAULT_API_URL, str::trim);
        let invalid = |message: String| ConsoleError::InvalidUrl {
            url: raw.to_owned(),
            message,
        };
        let url = Url::parse(raw).map_err(|err| invalid(err.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(invalid("URL cannot carry a path".to_owned()));
        }
        Ok(url)
    }

    /// Request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}
