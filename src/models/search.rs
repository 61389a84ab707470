//! Search query and result models.

use serde::Deserialize;
use std::fmt;

/// What the user is looking for, and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub service_type: String,
    pub location: String,
}

impl SearchQuery {
    pub fn new(service_type: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            service_type: service_type.into(),
            location: location.into(),
        }
    }

    /// The natural-language phrase sent to the search provider.
    pub fn phrase(&self) -> String {
        format!(
            "{} service providers in {}",
            self.service_type, self.location
        )
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.phrase())
    }
}

/// One organic search result, in provider ranking order.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
pub struct SearchResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}
