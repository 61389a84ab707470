use crate::client::{AsyncApifyClient, ScrapeOptions};
use crate::config::Config;
use crate::error::ProviderApiResult;
use crate::models::ContactRecord;
use crate::providers::traits::EnrichmentProvider;
use async_trait::async_trait;
use std::sync::Arc;

/// Enrichment provider backed by a contact details scraper actor.
///
/// The crawl budget (requests per start URL, link depth) is fixed at
/// construction; the pipeline only decides which URLs to crawl.
pub struct ApifyEnrichmentProvider {
    client: Arc<dyn AsyncApifyClient>,
    actor_id: String,
    options: ScrapeOptions,
}

impl ApifyEnrichmentProvider {
    pub fn new(client: Arc<dyn AsyncApifyClient>, actor_id: String, options: ScrapeOptions) -> Self {
        Self {
            client,
            actor_id,
            options,
        }
    }

    pub fn from_config(client: Arc<dyn AsyncApifyClient>, config: &Config) -> Self {
        Self::new(
            client,
            config.contact_scraper_actor_id.clone(),
            ScrapeOptions::from_config(config),
        )
    }
}

#[async_trait]
impl EnrichmentProvider for ApifyEnrichmentProvider {
    async fn enrich(&self, urls: &[String]) -> ProviderApiResult<Vec<ContactRecord>> {
        self.client
            .scrape_contacts(&self.actor_id, urls, self.options)
            .await
    }
}
