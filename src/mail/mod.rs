//! Outgoing mail.
//!
//! [`MailTransport`] is the seam between the notifier and the SMTP relay;
//! [`SmtpMailTransport`] is the production implementation.

mod smtp;

pub use smtp::SmtpMailTransport;

use crate::error::MailResult;
use async_trait::async_trait;

/// A plain-text message ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
}

/// Delivers one message and reports the relay's acknowledgment.
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Returns the relay's response line on success.
    async fn send(&self, mail: &OutgoingMail) -> MailResult<String>;
}
