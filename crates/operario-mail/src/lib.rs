//! Operario Mail - SMTP delivery for robot notifications.
//!
//! Wraps lettre's async SMTP transport with the conventions the robots
//! share: implicit-TLS relay on port 465, plain-text bodies with optional
//! file attachments, and the standard failure notification
//! (`IP:ROBOT (Apresentou Erro)`) with the day's log attached.
//!
//! Bodies are never logged; delivery logs carry a SHA-256 of the body
//! instead.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod error;
pub mod failure;
pub mod sender;

pub use error::{MailError, MailResult};
pub use failure::FailureNotifier;
pub use sender::{body_hash, EmailMessage, Mailer};
