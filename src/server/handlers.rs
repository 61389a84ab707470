//! MCP tool handlers for the Jarvis server.
//!
//! This module implements the `scheduling` and `searching` tools using the rmcp SDK's
//! tool_router pattern.

use crate::error::ToolError;
use crate::models::{ResponseEnvelope, ServiceRequest};
use crate::services::{SchedulingService, SearchingService};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;

/// The Jarvis MCP server exposing the scheduling and searching tools.
#[derive(Clone)]
pub struct JarvisMcpServer {
    scheduling_service: Arc<dyn SchedulingService>,
    searching_service: Arc<dyn SearchingService>,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for JarvisMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "jarvis".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: Some("Jarvis".into()),
                website_url: None,
            },
            instructions: Some("Personal assistant for the tasks users put off: search for local service providers, present their contact details, and send service requests. Confirm what the user needs, search, present options, and draft a message for the user to review before sending.".into()),
        }
    }
}

/// Arguments of the `scheduling` tool.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
struct SchedulingToolParams {
    /// Type of service needed, e.g. cleaning, maintenance, delivery
    service_type: String,
    /// Any specific details or requirements for the service
    #[serde(default)]
    details: Option<String>,
    /// Preferred date for the service
    #[serde(default)]
    preferred_date: Option<String>,
    /// Preferred time for the service
    #[serde(default)]
    preferred_time: Option<String>,
    /// Provider's email address or phone number
    #[serde(default)]
    contact_info: Option<String>,
}

impl From<SchedulingToolParams> for ServiceRequest {
    fn from(params: SchedulingToolParams) -> Self {
        ServiceRequest {
            service_type: params.service_type,
            details: params.details,
            preferred_date: params.preferred_date,
            preferred_time: params.preferred_time,
            contact_info: params.contact_info,
        }
    }
}

/// Arguments of the `searching` tool.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
struct SearchingToolParams {
    /// Type of service needed, e.g. cleaning, maintenance, delivery
    service_type: String,
    /// Location to search for the service providers
    location: String,
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: ToolError) -> McpError {
    let code = match e {
        ToolError::InvalidInput(_) => ErrorCode::INVALID_PARAMS,
        ToolError::Provider(_) => ErrorCode::INTERNAL_ERROR,
    };

    McpError {
        code,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

/// One text content per envelope segment, in order.
fn to_call_tool_result(envelope: ResponseEnvelope) -> CallToolResult {
    CallToolResult::success(
        envelope
            .into_segments()
            .into_iter()
            .map(Content::text)
            .collect(),
    )
}

// Tool router implementation
#[tool_router]
impl JarvisMcpServer {
    /// Create a new Jarvis MCP server.
    pub fn new(
        scheduling_service: Arc<dyn SchedulingService>,
        searching_service: Arc<dyn SearchingService>,
    ) -> Self {
        Self {
            scheduling_service,
            searching_service,
            tool_router: Self::tool_router(),
        }
    }

    /// Send a service request to a provider.
    #[tool(
        description = "Draft a professional service request (cleaning, maintenance, delivery, etc.) and send it to a service provider on the user's behalf. The request is emailed when contactInfo is an email address; other channels are not supported yet. Confirm the details with the user before sending."
    )]
    async fn scheduling(
        &self,
        params: Parameters<SchedulingToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!("MCP Handler: scheduling called");
        tracing::debug!(
            "Parameters: service_type={}, has_details={}, preferred_date={:?}, preferred_time={:?}, has_contact_info={}",
            params.service_type,
            params.details.is_some(),
            params.preferred_date,
            params.preferred_time,
            params.contact_info.is_some()
        );

        let envelope = self
            .scheduling_service
            .schedule(params.into())
            .await
            .map_err(|e| {
                tracing::error!("Scheduling failed: {:?}", e);
                to_mcp_error(e)
            })?;

        Ok(to_call_tool_result(envelope))
    }

    /// Search for local service providers and their contact details.
    #[tool(
        description = "Find local service providers (cleaning, maintenance, delivery, etc.) in the user's area and list their websites with any contact information found: email, phone, WhatsApp, Telegram, Facebook and Instagram."
    )]
    async fn searching(
        &self,
        params: Parameters<SearchingToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!("MCP Handler: searching called");
        tracing::debug!(
            "Parameters: service_type={}, location={}",
            params.service_type,
            params.location
        );

        let envelope = self
            .searching_service
            .search(&params.service_type, &params.location)
            .await
            .map_err(|e| {
                tracing::error!("Search failed: {:?}", e);
                to_mcp_error(e)
            })?;

        tracing::info!("Search replied with {} segments", envelope.len());
        Ok(to_call_tool_result(envelope))
    }
}
