use async_trait::async_trait;
use jarvis_mcp_server::error::{ProviderApiError, ProviderApiResult};
use jarvis_mcp_server::models::ContactRecord;
use jarvis_mcp_server::providers::EnrichmentProvider;
use std::sync::{Arc, Mutex};

/// Mock enrichment provider for testing.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockEnrichmentProvider {
    records: Arc<Mutex<Vec<ContactRecord>>>,
    fail: Arc<Mutex<bool>>,
    calls: Arc<Mutex<Vec<Vec<String>>>>,
}

#[allow(dead_code)]
impl MockEnrichmentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<ContactRecord>) -> Self {
        let provider = Self::new();
        *provider.records.lock().unwrap() = records;
        provider
    }

    /// Make every call fail with a timeout.
    pub fn fail(&self) {
        *self.fail.lock().unwrap() = true;
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// URLs passed on the most recent call.
    pub fn last_urls(&self) -> Option<Vec<String>> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl EnrichmentProvider for MockEnrichmentProvider {
    async fn enrich(&self, urls: &[String]) -> ProviderApiResult<Vec<ContactRecord>> {
        self.calls.lock().unwrap().push(urls.to_vec());

        if *self.fail.lock().unwrap() {
            return Err(ProviderApiError::Timeout);
        }

        Ok(self.records.lock().unwrap().clone())
    }
}
