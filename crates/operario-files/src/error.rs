//! Error types for file operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from download and file-management helpers.
#[derive(Debug, Error)]
pub enum FileError {
    /// An I/O operation failed, with the path it failed on.
    #[error("io error on {path}: {source}")]
    Io {
        /// Path the operation failed on.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Download transport failure.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// A file name could not be derived from the download URL.
    #[error("cannot derive a file name from url: {0}")]
    NoFileName(String),

    /// A wait helper ran out of time.
    #[error("timed out after {waited_secs}s waiting on {dir}")]
    Timeout {
        /// Directory being watched.
        dir: PathBuf,
        /// Seconds waited.
        waited_secs: u64,
    },
}

impl FileError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}

/// Result type for file operations.
pub type FileResult<T> = std::result::Result<T, FileError>;
