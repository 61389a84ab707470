//! Scheduling service layer.
//!
//! Drafts a service request and sends it to the provider.

use crate::domain::ContactChannel;
use crate::error::{ToolError, ToolResult};
use crate::models::{ResponseEnvelope, ServiceRequest};
use crate::tools::ContactNotifier;
use async_trait::async_trait;

/// Scheduling service trait for business operations.
#[async_trait]
pub trait SchedulingService: Send + Sync {
    /// Compose and deliver a service request. Always a single-segment reply.
    async fn schedule(&self, request: ServiceRequest) -> ToolResult<ResponseEnvelope>;
}

/// Default implementation of SchedulingService.
pub struct SchedulingServiceImpl {
    notifier: ContactNotifier,
}

/// Validation helper functions.
impl SchedulingServiceImpl {
    fn validate_service_type(service_type: &str) -> Result<(), String> {
        if service_type.trim().is_empty() {
            return Err("serviceType cannot be empty".to_string());
        }
        Ok(())
    }
}

impl SchedulingServiceImpl {
    pub fn new(notifier: ContactNotifier) -> Self {
        Self { notifier }
    }
}

#[async_trait]
impl SchedulingService for SchedulingServiceImpl {
    async fn schedule(&self, request: ServiceRequest) -> ToolResult<ResponseEnvelope> {
        Self::validate_service_type(&request.service_type).map_err(ToolError::InvalidInput)?;

        let service_type = request.service_type.trim();
        let channel = request.channel();

        let reply = match &channel {
            ContactChannel::Email(address) => {
                let subject = request.subject();
                let body = request.compose_message();

                if self.notifier.notify(address, &subject, &body).await {
                    format!(
                        "Your {} request has been sent to {}. You will be contacted via {} shortly.",
                        service_type,
                        address,
                        channel.name()
                    )
                } else {
                    format!(
                        "I couldn't send your {} request to {}. \
                         Please check the address or try again later.",
                        service_type, address
                    )
                }
            }
            ContactChannel::Phone(phone) => format!(
                "I can't reach {} yet: sending requests via {} is not supported. \
                 Please share the provider's email address so I can send your {} request.",
                phone,
                channel.name(),
                service_type
            ),
            ContactChannel::Unknown(_) => format!(
                "I need the provider's email address to send your {} request. \
                 Could you share it?",
                service_type
            ),
        };

        Ok(ResponseEnvelope::new(reply))
    }
}
