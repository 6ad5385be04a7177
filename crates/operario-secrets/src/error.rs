//! Error types for secret resolution.

use thiserror::Error;

/// Errors that can occur while resolving a secret.
#[derive(Debug, Error)]
pub enum SecretError {
    /// Secret not found in any configured source.
    ///
    /// Carries the secret name only; values never appear in errors.
    #[error("secret not found: {0}")]
    NotFound(String),

    /// No vault URL configured but a vault lookup was requested.
    #[error("no vault configured")]
    NoVaultConfigured,

    /// Vault returned a non-success status.
    #[error("vault returned status {status} for secret '{name}'")]
    Status {
        /// Requested secret name.
        name: String,
        /// HTTP status code.
        status: u16,
    },

    /// Vault response did not have the expected shape.
    #[error("malformed vault response: {0}")]
    MalformedResponse(String),

    /// Transport-level HTTP failure.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type for secret operations.
pub type SecretResult<T> = std::result::Result<T, SecretError>;
