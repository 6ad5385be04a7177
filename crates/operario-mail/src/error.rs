//! Error types for mail delivery.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from building or delivering an email.
#[derive(Debug, Error)]
pub enum MailError {
    /// Address does not parse as a mailbox.
    #[error("invalid email address '{address}': {source}")]
    Address {
        /// The offending address.
        address: String,
        /// Underlying parse error.
        #[source]
        source: lettre::address::AddressError,
    },

    /// Message could not be assembled.
    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    /// Attachment content type is malformed.
    #[error("invalid content type: {0}")]
    ContentType(#[from] lettre::message::header::ContentTypeErr),

    /// SMTP relay rejected the connection or the message.
    #[error("smtp transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// An attachment could not be read from disk.
    #[error("failed to read attachment {path}: {source}")]
    Attachment {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Config has no sender address.
    #[error("no sender address configured")]
    MissingSender,

    /// Config has no SMTP password resolved.
    #[error("no smtp password configured")]
    MissingPassword,

    /// Message has an empty recipient list.
    #[error("message has no recipients")]
    NoRecipients,
}

/// Convenience alias for mail operations.
pub type MailResult<T> = std::result::Result<T, MailError>;
