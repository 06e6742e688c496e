//! Domain entities - Catalogue objects fetched from the remote API
//!
//! All entities are immutable once built and live only for the duration of a
//! single fetch run.

mod category;
mod entry;
mod statistic;

pub use category::{Category, CategoryMembers};
pub use entry::{Ability, EntryDetail, EntryReference, EntrySummary, Sprites};
pub use statistic::CategoryStatistic;
