//! Error types for captcha solving.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while solving a captcha.
#[derive(Debug, Error)]
pub enum CaptchaError {
    /// No API key was provided.
    #[error("captcha api key not configured")]
    MissingApiKey,

    /// The service rejected the request with one of its error codes
    /// (e.g. `ERROR_ZERO_BALANCE`, `ERROR_WRONG_USER_KEY`).
    #[error("captcha service error: {code}")]
    Api {
        /// Service error code.
        code: String,
    },

    /// The answer did not arrive within the configured deadline.
    #[error("captcha not solved after {waited_secs}s")]
    Timeout {
        /// Seconds spent polling.
        waited_secs: u64,
    },

    /// A captcha image file could not be read.
    #[error("failed to read captcha image {path}: {source}")]
    Image {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Service response did not have the expected shape.
    #[error("malformed captcha service response: {0}")]
    MalformedResponse(String),

    /// Transport-level HTTP failure.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type for captcha operations.
pub type CaptchaResult<T> = std::result::Result<T, CaptchaError>;
