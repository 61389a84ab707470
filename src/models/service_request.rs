//! Service request drafted by the scheduling tool.

use crate::domain::ContactChannel;

/// A request for a service, as described by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceRequest {
    /// Type of service needed, e.g. cleaning, maintenance, delivery
    pub service_type: String,
    pub details: Option<String>,
    pub preferred_date: Option<String>,
    pub preferred_time: Option<String>,
    /// Email address or phone number of the provider
    pub contact_info: Option<String>,
}

impl ServiceRequest {
    pub fn new(service_type: impl Into<String>) -> Self {
        Self {
            service_type: service_type.into(),
            ..Default::default()
        }
    }

    /// Subject line for the outgoing message.
    pub fn subject(&self) -> String {
        format!("Service request: {}", self.service_type.trim())
    }

    /// Compose the message body.
    ///
    /// Opening sentence, then the details, date and time clauses when the
    /// field is present and not blank, then the closing sentence.
    pub fn compose_message(&self) -> String {
        let mut message = format!(
            "Hello, I would like to request a {} service.",
            self.service_type.trim()
        );

        if let Some(details) = present(&self.details) {
            message.push_str(&format!(" Details: {}.", details.trim_end_matches('.')));
        }
        if let Some(date) = present(&self.preferred_date) {
            message.push_str(&format!(" My preferred date is {}.", date));
        }
        if let Some(time) = present(&self.preferred_time) {
            message.push_str(&format!(" My preferred time is {}.", time));
        }

        message.push_str(
            " Please let me know your availability and an estimated cost. Thank you!",
        );
        message
    }

    /// Where the request should be delivered.
    pub fn channel(&self) -> ContactChannel {
        ContactChannel::from_optional(self.contact_info.as_deref())
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
