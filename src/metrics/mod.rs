//! Basic metrics instrumentation for tracking performance.
//!
//! Provides counters and duration tracking for provider HTTP calls, the
//! records they return, and outgoing mail.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Metrics collector shared by the provider client and the mail transport.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of HTTP requests made
    http_requests_total: Arc<AtomicU64>,

    /// Total number of HTTP errors
    http_errors_total: Arc<AtomicU64>,

    /// Total duration of all HTTP requests in milliseconds
    http_duration_total_ms: Arc<AtomicU64>,

    /// Organic search results returned by the search actor
    search_results_total: Arc<AtomicU64>,

    /// Dataset items returned by the contact scraper
    contact_records_total: Arc<AtomicU64>,

    emails_sent_total: Arc<AtomicU64>,
    emails_failed_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            http_requests_total: Arc::new(AtomicU64::new(0)),
            http_errors_total: Arc::new(AtomicU64::new(0)),
            http_duration_total_ms: Arc::new(AtomicU64::new(0)),
            search_results_total: Arc::new(AtomicU64::new(0)),
            contact_records_total: Arc::new(AtomicU64::new(0)),
            emails_sent_total: Arc::new(AtomicU64::new(0)),
            emails_failed_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record an HTTP request with duration.
    pub fn record_http_request(&self, duration: Duration) {
        self.http_requests_total.fetch_add(1, Ordering::Relaxed);
        self.http_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record an HTTP error.
    pub fn record_http_error(&self) {
        self.http_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_search_results(&self, count: usize) {
        self.search_results_total
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn record_contact_records(&self, count: usize) {
        self.contact_records_total
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Record the outcome of one mail delivery attempt.
    pub fn record_email(&self, delivered: bool) {
        if delivered {
            self.emails_sent_total.fetch_add(1, Ordering::Relaxed);
        } else {
            self.emails_failed_total.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Get total HTTP requests.
    pub fn http_requests_total(&self) -> u64 {
        self.http_requests_total.load(Ordering::Relaxed)
    }

    /// Get total HTTP errors.
    pub fn http_errors_total(&self) -> u64 {
        self.http_errors_total.load(Ordering::Relaxed)
    }

    /// Get total HTTP duration in milliseconds.
    pub fn http_duration_total_ms(&self) -> u64 {
        self.http_duration_total_ms.load(Ordering::Relaxed)
    }

    /// Get average HTTP request duration in milliseconds.
    pub fn http_duration_avg_ms(&self) -> f64 {
        let total = self.http_duration_total_ms.load(Ordering::Relaxed);
        let count = self.http_requests_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    pub fn search_results_total(&self) -> u64 {
        self.search_results_total.load(Ordering::Relaxed)
    }

    pub fn contact_records_total(&self) -> u64 {
        self.contact_records_total.load(Ordering::Relaxed)
    }

    pub fn emails_sent_total(&self) -> u64 {
        self.emails_sent_total.load(Ordering::Relaxed)
    }

    pub fn emails_failed_total(&self) -> u64 {
        self.emails_failed_total.load(Ordering::Relaxed)
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            http_requests_total: self.http_requests_total(),
            http_errors_total: self.http_errors_total(),
            http_duration_total_ms: self.http_duration_total_ms(),
            http_duration_avg_ms: self.http_duration_avg_ms(),
            search_results_total: self.search_results_total(),
            contact_records_total: self.contact_records_total(),
            emails_sent_total: self.emails_sent_total(),
            emails_failed_total: self.emails_failed_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone)]
pub struct MetricsSummary {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub http_duration_total_ms: u64,
    pub http_duration_avg_ms: f64,
    pub search_results_total: u64,
    pub contact_records_total: u64,
    pub emails_sent_total: u64,
    pub emails_failed_total: u64,
}
