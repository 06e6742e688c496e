//! Dashboard output: chart projection, SVG rendering and the statistics table.

mod chart;
mod table;

pub use chart::{
    render_svg, AxisTick, Bar, CategoryLabel, ChartLayout, ChartModel, Margins, Series,
};
pub use table::{StatsRow, StatsTable, TABLE_HEADERS};
