//! Jarvis MCP Server - Main entry point
//!
//! Wires configuration, the Apify client, the SMTP transport and the tool
//! services together, then serves MCP over stdio.

use anyhow::Result;
use jarvis_mcp_server::client::{AsyncApifyClient, AsyncApifyClientImpl};
use jarvis_mcp_server::mail::{MailTransport, SmtpMailTransport};
use jarvis_mcp_server::providers::{
    ApifyEnrichmentProvider, ApifySearchProvider, EnrichmentProvider, SearchProvider,
};
use jarvis_mcp_server::services::{
    SchedulingService, SchedulingServiceImpl, SearchingService, SearchingServiceImpl,
};
use jarvis_mcp_server::{
    ApifyClient, Config, ContactNotifier, EmailAddress, JarvisMcpServer, ProviderSearchPipeline,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // .env is read again by Config::from_env; LOG_LEVEL is needed before that
    let _ = dotenvy::dotenv();

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication).
    // RUST_LOG takes precedence over LOG_LEVEL.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Config::log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting Jarvis MCP Server with API URL: {} (search actor: {}, scraper actor: {})",
        config.apify_api_url, config.search_actor_id, config.contact_scraper_actor_id
    );

    // Provider side: one Apify client shared by both actors
    let apify_client = ApifyClient::new(&config);
    let client_metrics = apify_client.metrics().clone();
    let client = Arc::new(AsyncApifyClientImpl::new(apify_client)) as Arc<dyn AsyncApifyClient>;

    let search_provider =
        Arc::new(ApifySearchProvider::from_config(client.clone(), &config)) as Arc<dyn SearchProvider>;
    let enrichment_provider = Arc::new(ApifyEnrichmentProvider::from_config(client, &config))
        as Arc<dyn EnrichmentProvider>;

    // Mail side
    let smtp = SmtpMailTransport::new(&config)?;
    let mail_metrics = smtp.metrics().clone();
    let transport = Arc::new(smtp) as Arc<dyn MailTransport>;
    let sender = EmailAddress::new(&config.email_user)?;

    let pipeline = ProviderSearchPipeline::new(search_provider, enrichment_provider);
    let notifier = ContactNotifier::new(transport, sender);

    let searching_service =
        Arc::new(SearchingServiceImpl::new(pipeline)) as Arc<dyn SearchingService>;
    let scheduling_service =
        Arc::new(SchedulingServiceImpl::new(notifier)) as Arc<dyn SchedulingService>;

    let server = JarvisMcpServer::new(scheduling_service, searching_service);

    info!("Jarvis MCP Server initialized (SMTP relay: {})", config.smtp_host);

    // Run the server (this will block until the server exits)
    info!("Starting MCP server with stdio transport");
    jarvis_mcp_server::server::run_server(server).await?;

    let http = client_metrics.summary();
    let mail = mail_metrics.summary();
    info!(
        "Shutdown metrics: {} HTTP requests ({} errors, avg {:.0} ms), {} search results, {} contact records, {} emails sent, {} failed",
        http.http_requests_total,
        http.http_errors_total,
        http.http_duration_avg_ms,
        http.search_results_total,
        http.contact_records_total,
        mail.emails_sent_total,
        mail.emails_failed_total
    );

    info!("Jarvis MCP Server shutdown complete");
    Ok(())
}
