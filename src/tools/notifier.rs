//! Contact notifier.
//!
//! Sends a message to a contact over the channel its address implies.
//! Only email is wired up; other channels are accepted and ignored.

use crate::domain::{ContactChannel, EmailAddress};
use crate::mail::{MailTransport, OutgoingMail};
use std::sync::Arc;

/// Sends messages on behalf of the configured mail account.
#[derive(Clone)]
pub struct ContactNotifier {
    transport: Arc<dyn MailTransport>,
    sender: EmailAddress,
}

impl ContactNotifier {
    pub fn new(transport: Arc<dyn MailTransport>, sender: EmailAddress) -> Self {
        Self { transport, sender }
    }

    pub fn sender(&self) -> &EmailAddress {
        &self.sender
    }

    /// Deliver `body` to `destination`.
    ///
    /// Returns `true` only when the mail relay acknowledged the message.
    /// Transport errors are logged and reported as `false`, never raised.
    pub async fn notify(&self, destination: &str, subject: &str, body: &str) -> bool {
        match ContactChannel::parse(destination) {
            ContactChannel::Email(address) => self.send_email(address, subject, body).await,
            ContactChannel::Phone(phone) => {
                tracing::warn!(
                    "No transport for mobile delivery, not notifying {}",
                    phone.digits()
                );
                false
            }
            ContactChannel::Unknown(raw) => {
                tracing::warn!("Unrecognised contact {:?}, not notifying", raw);
                false
            }
        }
    }

    async fn send_email(&self, to: String, subject: &str, body: &str) -> bool {
        let mail = OutgoingMail {
            from: self.sender.to_string(),
            to,
            subject: subject.to_string(),
            text: body.to_string(),
        };

        match self.transport.send(&mail).await {
            Ok(response) => {
                tracing::info!("Email sent to {}: {}", mail.to, response);
                true
            }
            Err(e) => {
                tracing::error!("Error sending email to {}: {}", mail.to, e);
                false
            }
        }
    }
}
