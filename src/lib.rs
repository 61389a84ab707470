//! Jarvis MCP Server - a personal-assistant tool server for the Model Context Protocol.
//!
//! Exposes two tools to an AI orchestrator: `searching` finds local service
//! providers through a search actor and scrapes their contact details;
//! `scheduling` drafts a service request and emails it to a provider.
//!
//! # Architecture
//!
//! - **models**: Requests, search results, contact records, reply envelopes
//! - **domain**: Validated email/phone values and contact channel dispatch
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **client**: HTTP client for the Apify actor API
//! - **providers**: Search and enrichment provider traits and Apify implementations
//! - **mail**: Mail transport trait and SMTP implementation
//! - **tools**: Search-and-enrich pipeline, digest rendering, contact notifier
//! - **services**: Input validation and reply composition per tool
//! - **server**: MCP protocol server

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod mail;
pub mod metrics;
pub mod models;
pub mod providers;
pub mod server;
pub mod services;
pub mod tools;

// Re-export commonly used types
pub use client::ApifyClient;
pub use config::Config;
pub use domain::{ContactChannel, EmailAddress};
pub use error::{ConfigError, MailError, ProviderApiError, ToolError};
pub use metrics::{Metrics, MetricsSummary};
pub use models::{ContactRecord, ResponseEnvelope, SearchQuery, SearchResult, ServiceRequest};
pub use server::JarvisMcpServer;
pub use tools::{ContactNotifier, ProviderSearchPipeline, SearchOutcome};
