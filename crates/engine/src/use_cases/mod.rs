//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area. Use cases hold
//! their ports as `Arc<dyn ...>` and never touch reqwest directly.

pub mod catalogue;

pub use catalogue::{
    CategoryStatsPipeline, EntryLookupError, EntryProfile, EntryProfileLookup, PipelineError,
    SearchEntries, SearchError, StatsReport,
};
