//! Async wrapper around the synchronous ApifyClient.
//!
//! Actor runs block for as long as the actor takes, so every call is moved
//! onto tokio's blocking thread pool with `spawn_blocking`.

use crate::client::{ApifyClient, ScrapeOptions, SearchOptions};
use crate::error::{ProviderApiError, ProviderApiResult};
use crate::models::{ContactRecord, SearchResult};
use async_trait::async_trait;
use std::sync::Arc;

/// Async interface to the actor API.
#[async_trait]
pub trait AsyncApifyClient: Send + Sync {
    async fn search_organic_results(
        &self,
        actor_id: &str,
        query: &str,
        options: SearchOptions,
    ) -> ProviderApiResult<Vec<SearchResult>>;

    async fn scrape_contacts(
        &self,
        actor_id: &str,
        urls: &[String],
        options: ScrapeOptions,
    ) -> ProviderApiResult<Vec<ContactRecord>>;
}

/// Async wrapper around synchronous ApifyClient.
#[derive(Clone)]
pub struct AsyncApifyClientImpl {
    client: Arc<ApifyClient>,
}

impl AsyncApifyClientImpl {
    pub fn new(client: ApifyClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

fn join_error(e: tokio::task::JoinError) -> ProviderApiError {
    ProviderApiError::HttpError(format!("Task join error: {}", e))
}

#[async_trait]
impl AsyncApifyClient for AsyncApifyClientImpl {
    async fn search_organic_results(
        &self,
        actor_id: &str,
        query: &str,
        options: SearchOptions,
    ) -> ProviderApiResult<Vec<SearchResult>> {
        let client = self.client.clone();
        let actor_id = actor_id.to_string();
        let query = query.to_string();

        tokio::task::spawn_blocking(move || {
            client.search_organic_results(&actor_id, &query, &options)
        })
        .await
        .map_err(join_error)?
    }

    async fn scrape_contacts(
        &self,
        actor_id: &str,
        urls: &[String],
        options: ScrapeOptions,
    ) -> ProviderApiResult<Vec<ContactRecord>> {
        let client = self.client.clone();
        let actor_id = actor_id.to_string();
        let urls = urls.to_vec();

        tokio::task::spawn_blocking(move || client.scrape_contacts(&actor_id, &urls, &options))
            .await
            .map_err(join_error)?
    }
}
