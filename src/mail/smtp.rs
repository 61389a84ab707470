//! SMTP relay transport built on `lettre`.

use super::{MailTransport, OutgoingMail};
use crate::config::Config;
use crate::error::{MailError, MailResult};
use crate::metrics::Metrics;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

/// Authenticated SMTP relay (implicit TLS on port 465).
///
/// No connection is opened until the first message is sent.
#[derive(Clone)]
pub struct SmtpMailTransport {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    metrics: Metrics,
}

impl SmtpMailTransport {
    /// Create a transport for `config.smtp_host` using the mail account
    /// credentials.
    pub fn new(config: &Config) -> MailResult<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|e| MailError::Transport(e.to_string()))?
            .credentials(Credentials::new(
                config.email_user.clone(),
                config.email_password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            metrics: Metrics::new(),
        })
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Turn an [`OutgoingMail`] into a `lettre` message.
    pub fn build_message(mail: &OutgoingMail) -> MailResult<Message> {
        Message::builder()
            .from(parse_mailbox(&mail.from)?)
            .to(parse_mailbox(&mail.to)?)
            .subject(mail.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(mail.text.clone())
            .map_err(|e| MailError::Build(e.to_string()))
    }
}

fn parse_mailbox(address: &str) -> MailResult<Mailbox> {
    address
        .trim()
        .parse::<Mailbox>()
        .map_err(|e| MailError::InvalidAddress {
            address: address.to_string(),
            reason: e.to_string(),
        })
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
    async fn send(&self, mail: &OutgoingMail) -> MailResult<String> {
        // A message lettre refuses to build is a failed delivery too
        let message = match Self::build_message(mail) {
            Ok(message) => message,
            Err(e) => {
                self.metrics.record_email(false);
                return Err(e);
            }
        };

        let result = self
            .transport
            .send(message)
            .await
            .map(|response| {
                let detail = response.message().collect::<Vec<_>>().join(" ");
                format!("{} {}", response.code(), detail)
            })
            .map_err(|e| MailError::Transport(e.to_string()));

        self.metrics.record_email(result.is_ok());
        result
    }
}
