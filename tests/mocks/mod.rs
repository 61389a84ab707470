//! Hand-written fakes for the external collaborators.

pub mod mock_enrichment_provider;
pub mod mock_mail_transport;
pub mod mock_search_provider;

#[allow(unused_imports)]
pub use mock_enrichment_provider::MockEnrichmentProvider;
#[allow(unused_imports)]
pub use mock_mail_transport::MockMailTransport;
#[allow(unused_imports)]
pub use mock_search_provider::MockSearchProvider;
