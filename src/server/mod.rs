//! MCP server implementation for Jarvis.
//!
//! This module provides the MCP protocol server that exposes the scheduling
//! and searching tools to AI assistants through the Model Context Protocol.

pub mod handlers;

pub use handlers::JarvisMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the Jarvis MCP server with stdio transport.
///
/// This function starts the MCP server and runs it until the client
/// disconnects. It communicates via stdin/stdout using the MCP protocol.
pub async fn run_server(server: JarvisMcpServer) -> Result<()> {
    // Serve the server with stdio transport
    let service = server.serve(stdio()).await?;

    // Wait for completion
    service.waiting().await?;

    Ok(())
}
