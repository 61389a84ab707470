mod apify_enrichment_provider;
mod apify_search_provider;
mod traits;

pub use apify_enrichment_provider::ApifyEnrichmentProvider;
pub use apify_search_provider::ApifySearchProvider;
pub use traits::{EnrichmentProvider, SearchProvider};
