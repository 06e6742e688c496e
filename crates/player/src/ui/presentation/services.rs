//! Service providers for the presentation layer
//!
//! The composition root injects [`Services`] through the launch context.
//! Views reach the engine use cases through the hooks below and never build
//! adapters themselves.

use dioxus::prelude::*;
use std::sync::Arc;

use pokedex_engine::use_cases::{CategoryStatsPipeline, EntryProfileLookup, SearchEntries};
use pokedex_engine::App;

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services {
    pub app: Arc<App>,
}

impl Services {
    pub fn new(app: Arc<App>) -> Self {
        Self { app }
    }
}

/// Hook to access the statistics pipeline from context
pub fn use_stats_pipeline() -> Arc<CategoryStatsPipeline> {
    let services = use_context::<Services>();
    services.app.use_cases.stats.clone()
}

/// Hook to access the search use case from context
pub fn use_search_entries() -> Arc<SearchEntries> {
    let services = use_context::<Services>();
    services.app.use_cases.search.clone()
}

/// Hook to access the entry profile lookup from context
pub fn use_entry_lookup() -> Arc<EntryProfileLookup> {
    let services = use_context::<Services>();
    services.app.use_cases.entry.clone()
}
