//! UI components shared by the views.

pub mod common;

mod entry_card;
mod header;
mod stat_chart;
mod stats_table;

pub use entry_card::EntryCard;
pub use header::Header;
pub use stat_chart::StatChart;
pub use stats_table::StatsTableCard;
