use async_trait::async_trait;
use jarvis_mcp_server::error::{MailError, MailResult};
use jarvis_mcp_server::mail::{MailTransport, OutgoingMail};
use std::sync::{Arc, Mutex};

/// Mock mail transport that records every message it is asked to send.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockMailTransport {
    sent: Arc<Mutex<Vec<OutgoingMail>>>,
    fail: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockMailTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport whose relay rejects everything.
    pub fn failing() -> Self {
        let transport = Self::new();
        *transport.fail.lock().unwrap() = true;
        transport
    }

    /// Every message handed to `send`, including rejected ones.
    pub fn sent(&self) -> Vec<OutgoingMail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn send_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl MailTransport for MockMailTransport {
    async fn send(&self, mail: &OutgoingMail) -> MailResult<String> {
        self.sent.lock().unwrap().push(mail.clone());

        if *self.fail.lock().unwrap() {
            return Err(MailError::Transport(
                "535 5.7.8 Username and Password not accepted".to_string(),
            ));
        }

        Ok("250 2.0.0 OK queued".to_string())
    }
}
