use async_trait::async_trait;
use jarvis_mcp_server::error::{ProviderApiError, ProviderApiResult};
use jarvis_mcp_server::models::{SearchQuery, SearchResult};
use jarvis_mcp_server::providers::SearchProvider;
use std::sync::{Arc, Mutex};

/// Mock search provider for testing.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockSearchProvider {
    results: Arc<Mutex<Vec<SearchResult>>>,
    failure: Arc<Mutex<Option<String>>>,
    queries: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockSearchProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider that returns one result per URL.
    pub fn with_urls(urls: &[&str]) -> Self {
        let provider = Self::new();
        provider.set_results(
            urls.iter()
                .enumerate()
                .map(|(i, url)| SearchResult {
                    title: format!("Result {}", i + 1),
                    url: url.to_string(),
                })
                .collect(),
        );
        provider
    }

    pub fn set_results(&self, results: Vec<SearchResult>) {
        *self.results.lock().unwrap() = results;
    }

    /// Make every call fail with an API error carrying `message`.
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    pub fn call_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    /// Query phrases received, in call order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchProvider for MockSearchProvider {
    async fn search(&self, query: &SearchQuery) -> ProviderApiResult<Vec<SearchResult>> {
        self.queries.lock().unwrap().push(query.phrase());

        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(ProviderApiError::ApiError {
                status: 500,
                message,
            });
        }

        Ok(self.results.lock().unwrap().clone())
    }
}
