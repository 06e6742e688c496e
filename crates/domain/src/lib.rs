//! PokeExplorer domain layer.
//!
//! Pure catalogue types and the rules that operate on them. Nothing in this
//! crate performs I/O; fetching lives in `pokedex-engine` and the remote wire
//! shapes live in `pokedex-shared`.

pub mod entities;
pub mod error;
pub mod related;
pub mod search;
pub mod statistics;
pub mod value_objects;

// Re-export entities (explicit list in entities/mod.rs)
pub use entities::{
    Ability, Category, CategoryMembers, CategoryStatistic, EntryDetail, EntryReference,
    EntrySummary, Sprites,
};

pub use error::DomainError;

pub use related::{merge_related, RELATED_SAMPLE_SIZE};
pub use search::{filter_by_name, ENTRY_INDEX_LIMIT, SEARCH_RESULT_LIMIT};
pub use statistics::{aggregate_category, STATS_SAMPLE_SIZE};

pub use value_objects::{DashboardState, EntryIdentifier, LoadState};
