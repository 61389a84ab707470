//! Tests for the contact notifier and the scheduling service.

mod mocks;

use jarvis_mcp_server::error::ToolError;
use jarvis_mcp_server::mail::MailTransport;
use jarvis_mcp_server::services::{SchedulingService, SchedulingServiceImpl};
use jarvis_mcp_server::{ContactNotifier, EmailAddress, ServiceRequest};
use mocks::MockMailTransport;
use std::sync::Arc;

fn notifier(transport: &MockMailTransport) -> ContactNotifier {
    ContactNotifier::new(
        Arc::new(transport.clone()) as Arc<dyn MailTransport>,
        EmailAddress::new("jarvis@example.com").unwrap(),
    )
}

fn service(transport: &MockMailTransport) -> SchedulingServiceImpl {
    SchedulingServiceImpl::new(notifier(transport))
}

fn request_to(contact: Option<&str>) -> ServiceRequest {
    ServiceRequest {
        service_type: "cleaning".to_string(),
        details: Some("Deep clean of a two bedroom flat".to_string()),
        preferred_date: Some("Saturday".to_string()),
        preferred_time: Some("9am".to_string()),
        contact_info: contact.map(str::to_string),
    }
}

#[tokio::test]
async fn test_notifier_sends_email_from_configured_sender() {
    let transport = MockMailTransport::new();

    let delivered = notifier(&transport)
        .notify("crew@sparkle.example", "Service request: cleaning", "Hello")
        .await;

    assert!(delivered);
    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].from, "jarvis@example.com");
    assert_eq!(sent[0].to, "crew@sparkle.example");
    assert_eq!(sent[0].subject, "Service request: cleaning");
    assert_eq!(sent[0].text, "Hello");
}

#[tokio::test]
async fn test_notifier_swallows_transport_error() {
    let transport = MockMailTransport::failing();

    let delivered = notifier(&transport)
        .notify("crew@sparkle.example", "subject", "body")
        .await;

    assert!(!delivered);
    assert_eq!(transport.send_count(), 1);
}

#[tokio::test]
async fn test_notifier_ignores_non_email_destinations() {
    let transport = MockMailTransport::new();
    let notifier = notifier(&transport);

    assert!(!notifier.notify("5551234", "subject", "body").await);
    assert!(!notifier.notify("somewhere", "subject", "body").await);
    assert_eq!(transport.send_count(), 0);
}

#[tokio::test]
async fn test_schedule_by_email() {
    let transport = MockMailTransport::new();

    let envelope = service(&transport)
        .schedule(request_to(Some("a@b.com")))
        .await
        .unwrap();

    assert_eq!(envelope.len(), 1);
    assert!(envelope.segments()[0].contains("via email"));

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "a@b.com");
    assert_eq!(sent[0].subject, "Service request: cleaning");

    let body = &sent[0].text;
    let details = body.find("Deep clean").unwrap();
    let date = body.find("Saturday").unwrap();
    let time = body.find("9am").unwrap();
    assert!(details < date && date < time, "clauses out of order: {}", body);
}

#[tokio::test]
async fn test_schedule_minimal_request_body() {
    let transport = MockMailTransport::new();
    let request = ServiceRequest {
        contact_info: Some("a@b.com".to_string()),
        ..ServiceRequest::new("cleaning")
    };

    service(&transport).schedule(request).await.unwrap();

    let body = transport.sent()[0].text.clone();
    assert_eq!(
        body,
        "Hello, I would like to request a cleaning service. \
         Please let me know your availability and an estimated cost. Thank you!"
    );
}

#[tokio::test]
async fn test_schedule_reports_failed_delivery() {
    let transport = MockMailTransport::failing();

    let envelope = service(&transport)
        .schedule(request_to(Some("a@b.com")))
        .await
        .unwrap();

    assert_eq!(envelope.len(), 1);
    assert!(envelope.segments()[0].starts_with("I couldn't send your cleaning request"));
}

#[tokio::test]
async fn test_schedule_mobile_not_supported() {
    let transport = MockMailTransport::new();

    let envelope = service(&transport)
        .schedule(request_to(Some("5551234")))
        .await
        .unwrap();

    assert_eq!(envelope.len(), 1);
    assert!(envelope.segments()[0].contains("not supported"));
    assert!(envelope.segments()[0].contains("mobile"));
    assert_eq!(transport.send_count(), 0);
}

#[tokio::test]
async fn test_schedule_without_contact_asks_for_email() {
    let transport = MockMailTransport::new();

    let envelope = service(&transport).schedule(request_to(None)).await.unwrap();

    assert_eq!(envelope.len(), 1);
    assert!(envelope.segments()[0].contains("email address"));
    assert_eq!(transport.send_count(), 0);
}

#[tokio::test]
async fn test_schedule_always_single_segment() {
    for (transport, contact) in [
        (MockMailTransport::new(), Some("a@b.com")),
        (MockMailTransport::failing(), Some("a@b.com")),
        (MockMailTransport::new(), Some("+1 555 123 4567")),
        (MockMailTransport::new(), Some("ask at reception")),
        (MockMailTransport::new(), None),
    ] {
        let envelope = service(&transport)
            .schedule(request_to(contact))
            .await
            .unwrap();
        assert_eq!(envelope.len(), 1, "contact {:?}", contact);
    }
}

#[tokio::test]
async fn test_schedule_rejects_blank_service_type() {
    let transport = MockMailTransport::new();

    let err = service(&transport)
        .schedule(ServiceRequest::new("  "))
        .await
        .unwrap_err();

    assert!(matches!(err, ToolError::InvalidInput(_)));
    assert_eq!(transport.send_count(), 0);
}

#[tokio::test]
async fn test_schedule_accepts_long_multibyte_service_type() {
    let transport = MockMailTransport::new();
    let service_type = "清洁".repeat(40);
    let request = ServiceRequest {
        contact_info: Some("a@b.com".to_string()),
        ..ServiceRequest::new(service_type.clone())
    };

    let envelope = service(&transport).schedule(request).await.unwrap();

    assert_eq!(envelope.len(), 1);
    assert!(envelope.segments()[0].contains(&service_type));
    assert_eq!(transport.send_count(), 1);
}
