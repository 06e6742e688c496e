//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::pokeapi::PokeApiClient;
use crate::infrastructure::ports::CatalogPort;
use crate::infrastructure::settings::CatalogSettings;
use crate::use_cases::{CategoryStatsPipeline, EntryProfileLookup, SearchEntries};

/// Main application state.
///
/// Holds the catalogue port and every use case built on it. The player
/// shares one instance across views through its context.
pub struct App {
    pub use_cases: UseCases,
    pub catalog: Arc<dyn CatalogPort>,
}

/// Container for all use cases.
#[derive(Clone)]
pub struct UseCases {
    pub stats: Arc<CategoryStatsPipeline>,
    pub search: Arc<SearchEntries>,
    pub entry: Arc<EntryProfileLookup>,
}

impl App {
    /// Create a new App with all use cases wired to `catalog`.
    pub fn new(catalog: Arc<dyn CatalogPort>) -> Self {
        let use_cases = UseCases {
            stats: Arc::new(CategoryStatsPipeline::new(catalog.clone())),
            search: Arc::new(SearchEntries::new(catalog.clone())),
            entry: Arc::new(EntryProfileLookup::new(catalog.clone())),
        };

        Self { use_cases, catalog }
    }

    /// Create an App backed by the PokeAPI client.
    pub fn from_settings(settings: &CatalogSettings) -> Self {
        tracing::info!(
            api_base_url = %settings.api_base_url,
            request_timeout_ms = settings.request_timeout_ms,
            "Creating PokeAPI catalogue client"
        );
        Self::new(Arc::new(PokeApiClient::new(settings)))
    }
}
