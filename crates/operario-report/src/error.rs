//! Error types for execution reporting.

use thiserror::Error;

/// Errors from building a reporter or recording a run.
///
/// Webhook delivery problems are deliberately not errors; they are logged
/// as warnings by the reporter.
#[derive(Debug, Error)]
pub enum ReportError {
    /// HTTP client could not be built.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Warehouse recording failed.
    #[error("warehouse error: {0}")]
    Database(#[from] operario_db::DatabaseError),
}

/// Result type for reporting operations.
pub type ReportResult<T> = std::result::Result<T, ReportError>;
