//! Search-and-enrich pipeline.
//!
//! Runs the search provider, then crawls every result URL for contact
//! details. Two sequential external calls, no retries: any provider error
//! ends the pipeline.

use crate::error::ProviderApiResult;
use crate::models::{ContactRecord, SearchQuery, SearchResult};
use crate::providers::{EnrichmentProvider, SearchProvider};
use std::collections::HashMap;
use std::sync::Arc;

/// What the two stages produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Search stage output, provider ranking order
    pub results: Vec<SearchResult>,

    /// Enrichment stage output, one record per site
    pub contacts: Vec<ContactRecord>,
}

/// Pipeline over injected search and enrichment providers.
#[derive(Clone)]
pub struct ProviderSearchPipeline {
    search_provider: Arc<dyn SearchProvider>,
    enrichment_provider: Arc<dyn EnrichmentProvider>,
}

impl ProviderSearchPipeline {
    pub fn new(
        search_provider: Arc<dyn SearchProvider>,
        enrichment_provider: Arc<dyn EnrichmentProvider>,
    ) -> Self {
        Self {
            search_provider,
            enrichment_provider,
        }
    }

    /// Find providers of `service_type` near `location` and their contacts.
    ///
    /// Empty search results short-circuit: the enrichment provider is not
    /// called and the outcome has no results and no contacts.
    pub async fn find(&self, service_type: &str, location: &str) -> ProviderApiResult<SearchOutcome> {
        let query = SearchQuery::new(service_type, location);

        tracing::debug!("Searching: {}", query);
        let results = self.search_provider.search(&query).await?;
        tracing::info!("Search returned {} results", results.len());

        if results.is_empty() {
            return Ok(SearchOutcome::default());
        }

        let urls: Vec<String> = results.iter().map(|r| r.url.clone()).collect();
        let records = self.enrichment_provider.enrich(&urls).await?;
        let contacts = merge_by_url(records);

        tracing::info!(
            "Enrichment returned contact records for {} sites",
            contacts.len()
        );

        Ok(SearchOutcome { results, contacts })
    }
}

/// Collapse records that share a URL into one, keeping first-seen order.
///
/// The crawler emits one item per visited page, all tagged with the start
/// URL they came from.
pub fn merge_by_url(records: Vec<ContactRecord>) -> Vec<ContactRecord> {
    let mut merged: Vec<ContactRecord> = Vec::with_capacity(records.len());
    let mut index_by_url: HashMap<String, usize> = HashMap::new();

    for record in records {
        match index_by_url.get(&record.url) {
            Some(&i) => merged[i].absorb(record),
            None => {
                index_by_url.insert(record.url.clone(), merged.len());
                merged.push(record);
            }
        }
    }

    merged
}
