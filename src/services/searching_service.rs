//! Searching service layer.
//!
//! Finds local service providers and renders them as a digest.

use crate::error::{ToolError, ToolResult};
use crate::models::ResponseEnvelope;
use crate::tools::{format_provider_list, ProviderSearchPipeline};
use async_trait::async_trait;

/// Follow-up offered after a successful search.
pub const DRAFT_OFFER: &str =
    "Would you like me to help you draft a message to any of these providers?";

/// Searching service trait for business operations.
#[async_trait]
pub trait SearchingService: Send + Sync {
    /// Search for providers of `service_type` in `location`.
    async fn search(&self, service_type: &str, location: &str) -> ToolResult<ResponseEnvelope>;
}

/// Default implementation of SearchingService.
pub struct SearchingServiceImpl {
    pipeline: ProviderSearchPipeline,
}

/// Validation helper functions.
impl SearchingServiceImpl {
    fn validate_field(name: &str, value: &str) -> Result<(), String> {
        if value.trim().is_empty() {
            return Err(format!("{} cannot be empty", name));
        }
        Ok(())
    }
}

impl SearchingServiceImpl {
    pub fn new(pipeline: ProviderSearchPipeline) -> Self {
        Self { pipeline }
    }
}

#[async_trait]
impl SearchingService for SearchingServiceImpl {
    async fn search(&self, service_type: &str, location: &str) -> ToolResult<ResponseEnvelope> {
        Self::validate_field("serviceType", service_type).map_err(ToolError::InvalidInput)?;
        Self::validate_field("location", location).map_err(ToolError::InvalidInput)?;

        let service_type = service_type.trim();
        let location = location.trim();

        let outcome = self.pipeline.find(service_type, location).await?;

        if outcome.results.is_empty() {
            return Ok(ResponseEnvelope::new(format!(
                "I couldn't find any service providers for {} in {} at the moment. \
                 Could you please provide more details or specify a different service?",
                service_type, location
            )));
        }

        if outcome.contacts.is_empty() {
            return Ok(ResponseEnvelope::new(format!(
                "I found some service providers for {} in {}, but couldn't extract their \
                 contact information. Please try again later.",
                service_type, location
            )));
        }

        let digest = format!(
            "I found the following service providers for {} in {}:\n{}",
            service_type,
            location,
            format_provider_list(&outcome.contacts)
        );

        Ok(ResponseEnvelope::new(digest).with_segment(DRAFT_OFFER))
    }
}
