//! SMTP delivery over implicit TLS.

use crate::error::{MailError, MailResult};
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use operario_core::EmailConfig;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// An outbound email: recipients, subject, plain-text body and optional
/// file attachments.
#[derive(Debug, Clone)]
pub struct EmailMessage {
    /// Recipient addresses.
    pub to: Vec<String>,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
    /// Files to attach, read at send time.
    pub attachments: Vec<PathBuf>,
}

impl EmailMessage {
    /// Create a message with no attachments.
    #[must_use]
    pub fn new(to: Vec<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to,
            subject: subject.into(),
            body: body.into(),
            attachments: Vec::new(),
        }
    }

    /// Attach a file, builder-style.
    #[must_use]
    pub fn with_attachment(mut self, path: impl Into<PathBuf>) -> Self {
        self.attachments.push(path.into());
        self
    }
}

/// SMTP sender bound to one relay and one sender address.
#[derive(Debug)]
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl Mailer {
    /// Build a mailer from resolved email config.
    ///
    /// The config must carry a sender address and a resolved password;
    /// port 465 style implicit TLS is used, matching the relay default.
    pub fn new(config: &EmailConfig) -> MailResult<Self> {
        let sender_addr = config.sender.as_deref().ok_or(MailError::MissingSender)?;
        let sender = parse_mailbox(sender_addr)?;
        let password = config
            .password
            .clone()
            .ok_or(MailError::MissingPassword)?;

        let credentials = Credentials::new(sender.email.to_string(), password);
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_server)?
            .port(config.smtp_port)
            .credentials(credentials)
            .build();

        Ok(Self { transport, sender })
    }

    /// Deliver a message.
    ///
    /// Logs the recipient count and a SHA-256 of the body; the body itself
    /// never reaches the log.
    pub async fn send(&self, message: &EmailMessage) -> MailResult<()> {
        if message.to.is_empty() {
            return Err(MailError::NoRecipients);
        }

        let mut builder = Message::builder().from(self.sender.clone());
        for recipient in &message.to {
            builder = builder.to(parse_mailbox(recipient)?);
        }
        let builder = builder.subject(message.subject.clone());

        let email = if message.attachments.is_empty() {
            builder
                .header(ContentType::TEXT_PLAIN)
                .body(message.body.clone())?
        } else {
            let mut parts = MultiPart::mixed().singlepart(SinglePart::plain(message.body.clone()));
            for path in &message.attachments {
                parts = parts.singlepart(load_attachment(path)?);
            }
            builder.multipart(parts)?
        };

        self.transport.send(email).await?;
        tracing::info!(
            recipients = message.to.len(),
            subject = %message.subject,
            body_sha256 = %body_hash(&message.body),
            "email sent"
        );
        Ok(())
    }
}

fn parse_mailbox(address: &str) -> MailResult<Mailbox> {
    address.parse().map_err(|source| MailError::Address {
        address: address.to_string(),
        source,
    })
}

fn load_attachment(path: &Path) -> MailResult<SinglePart> {
    let bytes = std::fs::read(path).map_err(|source| MailError::Attachment {
        path: path.to_path_buf(),
        source,
    })?;
    let filename = path
        .file_name()
        .map_or_else(|| "attachment".to_string(), |n| n.to_string_lossy().into_owned());
    let content_type = ContentType::parse("application/octet-stream")?;
    Ok(Attachment::new(filename).body(bytes, content_type))
}

/// SHA-256 hex of an email body, for logging.
#[must_use]
pub fn body_hash(body: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(body.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_hash_is_deterministic() {
        let h1 = body_hash("relatório enviado");
        let h2 = body_hash("relatório enviado");
        assert_eq!(h1, h2);
        assert_ne!(h1, body_hash("outro corpo"));
        assert_eq!(h1.len(), 64);
    }

    #[test]
    fn test_message_builder_collects_attachments() {
        let msg = EmailMessage::new(
            vec!["ops@example.com".to_string()],
            "Relatório",
            "corpo",
        )
        .with_attachment("/tmp/a.log")
        .with_attachment("/tmp/b.xlsx");
        assert_eq!(msg.attachments.len(), 2);
    }

    #[test]
    fn test_mailer_requires_sender_and_password() {
        let mut config = EmailConfig::default();
        assert!(matches!(
            Mailer::new(&config).expect_err("no sender"),
            MailError::MissingSender
        ));

        config.sender = Some("robot@example.com".to_string());
        assert!(matches!(
            Mailer::new(&config).expect_err("no password"),
            MailError::MissingPassword
        ));
    }

    #[test]
    fn test_parse_mailbox_rejects_garbage() {
        assert!(matches!(
            parse_mailbox("not an address").expect_err("invalid"),
            MailError::Address { .. }
        ));
    }

    #[test]
    fn test_missing_attachment_fails() {
        let err = load_attachment(Path::new("/nonexistent/file.log")).expect_err("missing file");
        assert!(matches!(err, MailError::Attachment { .. }));
    }
}
