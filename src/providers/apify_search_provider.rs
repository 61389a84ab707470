use crate::client::{AsyncApifyClient, SearchOptions};
use crate::config::Config;
use crate::error::ProviderApiResult;
use crate::models::{SearchQuery, SearchResult};
use crate::providers::traits::SearchProvider;
use async_trait::async_trait;
use std::sync::Arc;

/// Search provider backed by a Google search results actor.
pub struct ApifySearchProvider {
    client: Arc<dyn AsyncApifyClient>,
    actor_id: String,
    options: SearchOptions,
}

impl ApifySearchProvider {
    pub fn new(client: Arc<dyn AsyncApifyClient>, actor_id: String, options: SearchOptions) -> Self {
        Self {
            client,
            actor_id,
            options,
        }
    }

    /// Use the actor and page size from configuration.
    pub fn from_config(client: Arc<dyn AsyncApifyClient>, config: &Config) -> Self {
        Self::new(
            client,
            config.search_actor_id.clone(),
            SearchOptions::from_config(config),
        )
    }
}

#[async_trait]
impl SearchProvider for ApifySearchProvider {
    async fn search(&self, query: &SearchQuery) -> ProviderApiResult<Vec<SearchResult>> {
        self.client
            .search_organic_results(&self.actor_id, &query.phrase(), self.options)
            .await
    }
}
