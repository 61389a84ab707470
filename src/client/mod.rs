//! HTTP client for the Apify actor API.
//!
//! Both external providers (the Google search actor and the contact details
//! scraper) are Apify actors, run synchronously through the
//! `run-sync-get-dataset-items` endpoint. This module provides a synchronous
//! client that can be used from async contexts via
//! `tokio::task::spawn_blocking`; see [`AsyncApifyClient`].

mod async_wrapper;
pub use async_wrapper::{AsyncApifyClient, AsyncApifyClientImpl};

use crate::config::Config;
use crate::error::{ProviderApiError, ProviderApiResult};
use crate::metrics::Metrics;
use crate::models::{ContactRecord, SearchResult};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Search actor settings that are configuration rather than pipeline logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub results_per_page: u32,
    /// Always one page; only the first page is consumed.
    pub max_pages_per_query: u32,
}

impl SearchOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            results_per_page: config.search_results_per_page,
            ..Self::default()
        }
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            results_per_page: 20,
            max_pages_per_query: 1,
        }
    }
}

/// Crawl budget for the contact scraper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub max_requests_per_start_url: u32,
    pub max_depth: u32,
}

impl ScrapeOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_requests_per_start_url: config.scraper_max_requests_per_url,
            max_depth: config.scraper_max_depth,
        }
    }
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            max_requests_per_start_url: 10,
            max_depth: 2,
        }
    }
}

/// One dataset item of the search actor: a results page.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultsPage {
    #[serde(default)]
    pub organic_results: Vec<SearchResult>,
}

/// One dataset item of the contact scraper: contacts found on one crawled page.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactScraperItem {
    /// The start URL this page was reached from
    pub original_start_url: Option<String>,

    /// The page actually crawled
    pub url: Option<String>,

    pub emails: Vec<String>,
    pub phones: Vec<String>,
    pub whatsapps: Vec<String>,
    pub telegrams: Vec<String>,
    pub facebooks: Vec<String>,
    pub instagrams: Vec<String>,
}

impl From<ContactScraperItem> for ContactRecord {
    fn from(item: ContactScraperItem) -> Self {
        ContactRecord {
            url: item.original_start_url.or(item.url).unwrap_or_default(),
            emails: item.emails,
            phones: item.phones,
            whatsapps: item.whatsapps,
            telegrams: item.telegrams,
            facebooks: item.facebooks,
            instagrams: item.instagrams,
        }
    }
}

/// Error body returned by the Apify API.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: String,
}

/// HTTP client for the Apify API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct ApifyClient {
    /// Base URL for the Apify API
    base_url: String,

    /// API token, sent as a bearer token
    api_token: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl ApifyClient {
    /// Create a new ApifyClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.apify_api_url.clone(),
            api_token: config.search_api_key.clone(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create an ApifyClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_token: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            api_token,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Path of the synchronous run endpoint for an actor.
    ///
    /// Actor names of the form `user/actor` are addressed as `user~actor`.
    fn run_sync_path(actor_id: &str) -> String {
        let actor = actor_id.trim().replace('/', "~");
        format!(
            "/acts/{}/run-sync-get-dataset-items",
            urlencoding::encode(&actor)
        )
    }

    /// Execute a POST request with authentication and JSON body.
    fn post(&self, path: &str, body: &Value) -> Result<ureq::Response, ProviderApiError> {
        let start = Instant::now();
        let url = self.build_url(path);

        tracing::debug!("POST {}", url);

        let result = self
            .agent
            .post(&url)
            .set("Authorization", &format!("Bearer {}", self.api_token))
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| self.map_error(e));

        let duration = start.elapsed();
        match &result {
            Ok(response) => {
                tracing::debug!(
                    "POST {} - Success (status: {}, {} ms)",
                    url,
                    response.status(),
                    duration.as_millis()
                );
                self.metrics.record_http_request(duration);
            }
            Err(e) => {
                tracing::error!("POST {} - Error: {:?}", url, e);
                self.metrics.record_http_error();
                self.metrics.record_http_request(duration);
            }
        }

        result
    }

    /// Map a ureq error to a ProviderApiError.
    fn map_error(&self, error: ureq::Error) -> ProviderApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let body = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());
                let message = serde_json::from_str::<ApiErrorBody>(&body)
                    .map(|b| b.error.message)
                    .unwrap_or(body);

                match code {
                    400 => ProviderApiError::InvalidRequest(message),
                    401 | 403 => ProviderApiError::Unauthorized,
                    // run-sync gives up on long actor runs with 408
                    408 => ProviderApiError::Timeout,
                    429 => ProviderApiError::RateLimitExceeded,
                    _ => ProviderApiError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    ProviderApiError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    ProviderApiError::Timeout
                } else {
                    ProviderApiError::HttpError(transport.to_string())
                }
            }
        }
    }

    /// Run an actor to completion and return its default dataset items.
    pub fn run_actor(&self, actor_id: &str, input: &Value) -> ProviderApiResult<Vec<Value>> {
        let response = self.post(&Self::run_sync_path(actor_id), input)?;
        let body = response
            .into_string()
            .map_err(|e| ProviderApiError::HttpError(e.to_string()))?;

        let value: Value = serde_json::from_str(&body).map_err(ProviderApiError::JsonError)?;
        match value {
            Value::Array(items) => Ok(items),
            other => Err(ProviderApiError::MalformedResponse(format!(
                "expected an array of dataset items, got: {}",
                other
            ))),
        }
    }

    // ========================= Search =========================

    /// Actor input for a search: one query, fixed defaults everywhere else.
    pub fn search_input(query: &str, options: &SearchOptions) -> Value {
        json!({
            "queries": query,
            "resultsPerPage": options.results_per_page,
            "maxPagesPerQuery": options.max_pages_per_query,
            "aiMode": "aiModeOff",
            "perplexitySearch": {
                "enablePerplexity": false,
                "returnImages": false,
                "returnRelatedQuestions": false
            },
            "maximumLeadsEnrichmentRecords": 0,
            "focusOnPaidAds": false,
            "searchLanguage": "",
            "languageCode": "",
            "forceExactMatch": false,
            "wordsInTitle": [],
            "wordsInText": [],
            "wordsInUrl": [],
            "mobileResults": false,
            "includeUnfilteredResults": false,
            "saveHtml": false,
            "saveHtmlToKeyValueStore": true,
            "includeIcons": false
        })
    }

    /// Search and return the organic results of the first results page.
    ///
    /// An empty dataset, or a page without `organicResults`, yields an empty list.
    /// Results without a URL are dropped since there is nothing to enrich.
    pub fn search_organic_results(
        &self,
        actor_id: &str,
        query: &str,
        options: &SearchOptions,
    ) -> ProviderApiResult<Vec<SearchResult>> {
        let items = self.run_actor(actor_id, &Self::search_input(query, options))?;

        let results = match items.into_iter().next() {
            Some(first) => {
                let page: SearchResultsPage =
                    serde_json::from_value(first).map_err(ProviderApiError::JsonError)?;
                page.organic_results
                    .into_iter()
                    .filter(|r| !r.url.trim().is_empty())
                    .collect()
            }
            None => Vec::new(),
        };

        self.metrics.record_search_results(results.len());
        Ok(results)
    }

    // ========================= Contact scraping =========================

    /// Actor input for a contact crawl over `urls`.
    pub fn scrape_input(urls: &[String], options: &ScrapeOptions) -> Value {
        json!({
            "startUrls": urls.iter().map(|url| json!({ "url": url })).collect::<Vec<_>>(),
            "maxRequestsPerStartUrl": options.max_requests_per_start_url,
            "maxDepth": options.max_depth
        })
    }

    /// Crawl `urls` and return one record per dataset item, in dataset order.
    pub fn scrape_contacts(
        &self,
        actor_id: &str,
        urls: &[String],
        options: &ScrapeOptions,
    ) -> ProviderApiResult<Vec<ContactRecord>> {
        let items = self.run_actor(actor_id, &Self::scrape_input(urls, options))?;

        let records = items
            .into_iter()
            .map(|item| {
                serde_json::from_value::<ContactScraperItem>(item)
                    .map(ContactRecord::from)
                    .map_err(ProviderApiError::JsonError)
            })
            .collect::<ProviderApiResult<Vec<_>>>()?;

        self.metrics.record_contact_records(records.len());
        Ok(records)
    }
}
