//! PokeExplorer Engine library.
//!
//! Fetches the remote catalogue, runs the use cases behind each view and
//! projects the type statistics onto a chart.
//!
//! ## Structure
//!
//! - `infrastructure/` - Port traits, the PokeAPI adapter and settings
//! - `use_cases/` - Statistics pipeline, search and entry profile lookups
//! - `report/` - Chart projection, SVG output and the statistics table
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod report;
pub mod use_cases;

/// Test fixtures shared by the use case tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
