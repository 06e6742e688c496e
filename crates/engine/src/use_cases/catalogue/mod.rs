//! Catalogue use cases: statistics dashboard, search and entry detail.

mod entry_profile;
mod search;
mod stats;

pub use entry_profile::{EntryLookupError, EntryProfile, EntryProfileLookup};
pub use search::{SearchEntries, SearchError};
pub use stats::{CategoryStatsPipeline, PipelineError, StatsReport};
