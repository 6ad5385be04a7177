//! Core error types for the Operario toolkit.
//!
//! This module defines the central error type used across all subsystems.
//! Each subsystem error is represented as a variant for clear error propagation.

use thiserror::Error;

/// Central error type for all Operario operations.
///
/// Each variant represents an error from a specific subsystem, allowing
/// for clear error propagation and handling across crate boundaries.
#[derive(Error, Debug)]
pub enum OperarioError {
    /// Configuration errors (file loading, parsing, validation)
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Document/data validation errors (invalid input, constraints)
    #[error("validation error: {0}")]
    Validation(String),

    /// Mail errors (message building, SMTP transport)
    #[error("mail error: {0}")]
    Mail(String),

    /// Secret resolution errors (vault requests, missing credentials)
    #[error("secrets error: {0}")]
    Secrets(String),

    /// Captcha-solving service errors
    #[error("captcha error: {0}")]
    Captcha(String),

    /// File helper errors (downloads, moves, waits)
    #[error("file error: {0}")]
    Files(String),

    /// Spreadsheet errors (workbook creation, styling, reading)
    #[error("spreadsheet error: {0}")]
    Sheets(String),

    /// Metrics store errors (connection, queries, migrations)
    #[error("database error: {0}")]
    Database(String),

    /// Execution reporting errors (webhook delivery)
    #[error("report error: {0}")]
    Report(String),

    /// Browser automation errors (launch, navigation, selectors)
    #[error("browser error: {0}")]
    Browser(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to determine config directory path
    #[error("could not determine config directory (XDG base directories not available)")]
    NoConfigDir,

    /// Config file not found (may be first run)
    #[error("config file not found at {path}")]
    NotFound {
        /// Path where config was expected
        path: String,
    },

    /// Failed to parse TOML
    #[error("failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to serialize config
    #[error("failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// I/O error reading/writing config
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value
    #[error("invalid config value for {field}: {reason}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Reason for invalidity
        reason: String,
    },

    /// A credential required by a collaborator was not resolved at startup
    #[error("missing credential: {0}")]
    MissingCredential(String),
}

/// Result type alias using `OperarioError`.
pub type Result<T> = std::result::Result<T, OperarioError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
