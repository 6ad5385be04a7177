//! Error types for the metrics warehouse.

use thiserror::Error;

/// Errors that can occur during warehouse operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The database file could not be opened.
    #[error("failed to open database: {0}")]
    Open(String),

    /// A migration failed to apply.
    #[error("migration failed: {0}")]
    Migration(String),

    /// A table or column name is not a plain SQL identifier.
    #[error("invalid identifier: '{0}'")]
    InvalidIdentifier(String),

    /// A batch row does not match the declared column list.
    #[error("row {row} has {cells} values but {columns} columns were declared")]
    RowShape {
        /// Zero-based row index within the batch.
        row: usize,
        /// Values in the offending row.
        cells: usize,
        /// Declared column count.
        columns: usize,
    },

    /// A stored timestamp failed to parse back.
    #[error("invalid stored timestamp: '{0}'")]
    InvalidTimestamp(String),

    /// Underlying `SQLx` failure.
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Result type for warehouse operations.
pub type Result<T> = std::result::Result<T, DatabaseError>;
