// ── Runtime lookup configuration ──
//
// Describes *where* and *how* to reach the search API. Never touches disk:
// cocktail-config (or the TUI's flags) builds a `LookupConfig` and hands
// it in.

use std::time::Duration;

use url::Url;

use crate::catalog::Catalog;

/// Everything needed to construct a [`LookupClient`](crate::LookupClient)
/// and the selector catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    /// API root that `search.php` is resolved against.
    pub base_url: Url,
    /// Optional request deadline. `None` keeps the transport default.
    pub timeout: Option<Duration>,
    /// Extra names appended to the built-in catalog.
    pub extra_catalog: Vec<String>,
}

impl LookupConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: None,
            extra_catalog: Vec::new(),
        }
    }

    /// Built-in catalog followed by the configured extras.
    pub fn catalog(&self) -> Catalog {
        let mut catalog = Catalog::default();
        catalog.extend(self.extra_catalog.iter().map(String::as_str));
        catalog
    }
}
