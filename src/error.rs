//! Error types for the Jarvis MCP Server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when talking to the search and enrichment provider API.
#[derive(Error, Debug)]
pub enum ProviderApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout, or the actor run outlived the synchronous window
    #[error("Request timeout")]
    Timeout,

    /// Authentication failed
    #[error("Authentication failed")]
    Unauthorized,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// The provider rejected the actor input
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The provider answered with a shape we do not understand
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while delivering mail.
#[derive(Error, Debug)]
pub enum MailError {
    /// Sender or recipient could not be parsed as a mailbox
    #[error("Invalid mail address {address}: {reason}")]
    InvalidAddress { address: String, reason: String },

    /// The message could not be assembled
    #[error("Failed to build message: {0}")]
    Build(String),

    /// The relay refused the message or could not be reached
    #[error("Mail transport error: {0}")]
    Transport(String),
}

/// Errors surfaced by a tool invocation.
#[derive(Error, Debug)]
pub enum ToolError {
    /// Tool arguments failed validation; nothing external was called
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An external provider failed
    #[error(transparent)]
    Provider(#[from] ProviderApiError),
}

/// Convenience type alias for Results with ProviderApiError
pub type ProviderApiResult<T> = Result<T, ProviderApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with MailError
pub type MailResult<T> = Result<T, MailError>;

/// Convenience type alias for Results with ToolError
pub type ToolResult<T> = Result<T, ToolError>;
