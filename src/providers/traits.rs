use crate::error::ProviderApiResult;
use crate::models::{ContactRecord, SearchQuery, SearchResult};
use async_trait::async_trait;

/// Source of ranked web results for a service query.
///
/// Abstracts the external search service so the pipeline can run against
/// the live actor or an in-memory fake.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Organic results of the first results page, in ranking order.
    async fn search(&self, query: &SearchQuery) -> ProviderApiResult<Vec<SearchResult>>;
}

/// Crawls websites for contact channels.
#[async_trait]
pub trait EnrichmentProvider: Send + Sync {
    /// One record per item the crawler produced; order is the crawler's,
    /// not the order of `urls`.
    async fn enrich(&self, urls: &[String]) -> ProviderApiResult<Vec<ContactRecord>>;
}
