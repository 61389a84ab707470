//! Tests for the search-and-enrich pipeline and the searching service.

mod mocks;

use jarvis_mcp_server::error::{ProviderApiError, ToolError};
use jarvis_mcp_server::models::ContactRecord;
use jarvis_mcp_server::providers::{EnrichmentProvider, SearchProvider};
use jarvis_mcp_server::services::{SearchingService, SearchingServiceImpl};
use jarvis_mcp_server::ProviderSearchPipeline;
use mocks::{MockEnrichmentProvider, MockSearchProvider};
use std::sync::Arc;

fn pipeline(
    search: &MockSearchProvider,
    enrichment: &MockEnrichmentProvider,
) -> ProviderSearchPipeline {
    ProviderSearchPipeline::new(
        Arc::new(search.clone()) as Arc<dyn SearchProvider>,
        Arc::new(enrichment.clone()) as Arc<dyn EnrichmentProvider>,
    )
}

fn service(search: &MockSearchProvider, enrichment: &MockEnrichmentProvider) -> SearchingServiceImpl {
    SearchingServiceImpl::new(pipeline(search, enrichment))
}

fn email_record(url: &str, email: &str) -> ContactRecord {
    ContactRecord {
        url: url.to_string(),
        emails: vec![email.to_string()],
        ..Default::default()
    }
}

#[tokio::test]
async fn test_pipeline_builds_query_phrase() {
    let search = MockSearchProvider::new();
    let enrichment = MockEnrichmentProvider::new();

    pipeline(&search, &enrichment)
        .find("plumbing", "Austin, TX")
        .await
        .unwrap();

    assert_eq!(
        search.queries(),
        vec!["plumbing service providers in Austin, TX"]
    );
}

#[tokio::test]
async fn test_pipeline_short_circuits_on_empty_search() {
    let search = MockSearchProvider::new();
    let enrichment = MockEnrichmentProvider::with_records(vec![email_record("http://a.com", "x@a.com")]);

    let outcome = pipeline(&search, &enrichment)
        .find("plumbing", "Austin")
        .await
        .unwrap();

    assert!(outcome.results.is_empty());
    assert!(outcome.contacts.is_empty());
    assert_eq!(enrichment.call_count(), 0, "enrichment must not run");
}

#[tokio::test]
async fn test_pipeline_enriches_every_result_url() {
    let search = MockSearchProvider::with_urls(&["http://a.com", "http://b.com"]);
    let enrichment = MockEnrichmentProvider::with_records(vec![
        email_record("http://b.com", "hello@b.com"),
        email_record("http://a.com", "x@a.com"),
        email_record("http://b.com", "sales@b.com"),
    ]);

    let outcome = pipeline(&search, &enrichment)
        .find("cleaning", "Leeds")
        .await
        .unwrap();

    assert_eq!(
        enrichment.last_urls(),
        Some(vec!["http://a.com".to_string(), "http://b.com".to_string()])
    );
    assert_eq!(outcome.results.len(), 2);
    // Scraper order, merged per site
    assert_eq!(outcome.contacts.len(), 2);
    assert_eq!(outcome.contacts[0].url, "http://b.com");
    assert_eq!(outcome.contacts[0].emails, vec!["hello@b.com", "sales@b.com"]);
    assert_eq!(outcome.contacts[1].url, "http://a.com");
}

#[tokio::test]
async fn test_pipeline_propagates_search_failure() {
    let search = MockSearchProvider::new();
    search.fail_with("actor crashed");
    let enrichment = MockEnrichmentProvider::new();

    let err = pipeline(&search, &enrichment)
        .find("cleaning", "Leeds")
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderApiError::ApiError { status: 500, .. }));
    assert_eq!(enrichment.call_count(), 0);
}

#[tokio::test]
async fn test_pipeline_propagates_enrichment_failure() {
    let search = MockSearchProvider::with_urls(&["http://a.com"]);
    let enrichment = MockEnrichmentProvider::new();
    enrichment.fail();

    let result = pipeline(&search, &enrichment).find("cleaning", "Leeds").await;
    assert!(matches!(result, Err(ProviderApiError::Timeout)));
}

#[tokio::test]
async fn test_no_results_reply() {
    let search = MockSearchProvider::new();
    let enrichment = MockEnrichmentProvider::new();

    let envelope = service(&search, &enrichment)
        .search("dog grooming", "Reykjavik")
        .await
        .unwrap();

    assert_eq!(envelope.len(), 1);
    let text = &envelope.segments()[0];
    assert!(text.contains("dog grooming"));
    assert!(text.contains("Reykjavik"));
    assert!(!text.contains("Website:"));
    assert!(text.starts_with("I couldn't find any service providers"));
}

#[tokio::test]
async fn test_results_without_contacts_reply() {
    let search = MockSearchProvider::with_urls(&["http://a.com"]);
    let enrichment = MockEnrichmentProvider::new();

    let envelope = service(&search, &enrichment)
        .search("dog grooming", "Reykjavik")
        .await
        .unwrap();

    assert_eq!(envelope.len(), 1);
    let text = &envelope.segments()[0];
    assert!(text.contains("couldn't extract their contact information"));
    assert!(!text.starts_with("I couldn't find any service providers"));
    assert!(!text.contains("Website:"));
}

#[tokio::test]
async fn test_digest_reply() {
    let search = MockSearchProvider::with_urls(&["http://a.com"]);
    let enrichment = MockEnrichmentProvider::with_records(vec![email_record("http://a.com", "x@a.com")]);

    let envelope = service(&search, &enrichment)
        .search("plumbing", "Austin")
        .await
        .unwrap();

    assert_eq!(envelope.len(), 2);
    assert_eq!(
        envelope.segments()[0],
        "I found the following service providers for plumbing in Austin:\n\
         1. Website: http://a.com - Contacts: Email: x@a.com"
    );
    assert_eq!(
        envelope.segments()[1],
        "Would you like me to help you draft a message to any of these providers?"
    );
}

#[tokio::test]
async fn test_digest_lists_sites_without_contacts() {
    let search = MockSearchProvider::with_urls(&["http://a.com", "http://b.com"]);
    let enrichment = MockEnrichmentProvider::with_records(vec![
        ContactRecord::new("http://a.com"),
        ContactRecord {
            url: "http://b.com".to_string(),
            phones: vec!["555-0100".to_string()],
            telegrams: vec!["https://t.me/bco".to_string()],
            ..Default::default()
        },
    ]);

    let envelope = service(&search, &enrichment)
        .search("plumbing", "Austin")
        .await
        .unwrap();

    let lines: Vec<&str> = envelope.segments()[0].lines().collect();
    assert_eq!(lines[1], "1. Website: http://a.com");
    assert_eq!(
        lines[2],
        "2. Website: http://b.com - Contacts: Phone: 555-0100, Telegram: https://t.me/bco"
    );
}

#[tokio::test]
async fn test_blank_input_rejected_before_search() {
    let search = MockSearchProvider::with_urls(&["http://a.com"]);
    let enrichment = MockEnrichmentProvider::new();
    let service = service(&search, &enrichment);

    let err = service.search("plumbing", "   ").await.unwrap_err();
    assert!(matches!(err, ToolError::InvalidInput(_)));

    let err = service.search("", "Austin").await.unwrap_err();
    assert!(matches!(err, ToolError::InvalidInput(_)));

    assert_eq!(search.call_count(), 0);
}

#[tokio::test]
async fn test_provider_failure_surfaces_as_tool_error() {
    let search = MockSearchProvider::new();
    search.fail_with("Monthly usage hard limit exceeded");
    let enrichment = MockEnrichmentProvider::new();

    let err = service(&search, &enrichment)
        .search("plumbing", "Austin")
        .await
        .unwrap_err();

    assert!(matches!(err, ToolError::Provider(_)));
    assert!(err.to_string().contains("Monthly usage hard limit exceeded"));
}
