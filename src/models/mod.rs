//! Data models for the scheduling and searching tools.
//!
//! Everything here lives for a single tool invocation: requests come in
//! from the orchestrator, records come back from the providers, and an
//! envelope goes out.

pub mod contact_record;
pub mod envelope;
pub mod search;
pub mod service_request;

pub use contact_record::ContactRecord;
pub use envelope::ResponseEnvelope;
pub use search::{SearchQuery, SearchResult};
pub use service_request::ServiceRequest;
