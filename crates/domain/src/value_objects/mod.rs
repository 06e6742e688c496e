//! Value objects - validated values and view-state without identity

mod entry_identifier;
mod load_state;

pub use entry_identifier::EntryIdentifier;
pub use load_state::{DashboardState, LoadState};
