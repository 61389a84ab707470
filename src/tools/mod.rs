//! Core tool logic behind the MCP handlers.
//!
//! - **Provider search**: search, then contact enrichment, merged per site
//! - **Digest**: renders contact records as the user-facing provider list
//! - **Notifier**: delivers a message to a contact over its channel

pub mod digest;
pub mod notifier;
pub mod provider_search;

pub use digest::{format_provider_line, format_provider_list};
pub use notifier::ContactNotifier;
pub use provider_search::{ProviderSearchPipeline, SearchOutcome};
