//! Console-level failures.

use thiserror::Error;

/// Errors that stop the console before the session starts.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// The configured service URL is unusable.
    #[error("invalid service URL `{url}`: {message}")]
    InvalidUrl {
        /// URL as configured.
        url: String,
        /// Parser explanation.
        message: String,
    },
}
