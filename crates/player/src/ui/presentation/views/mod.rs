//! Page views. Route handlers in `ui/routes` render exactly one of these.

mod dashboard;
mod entry_detail;
mod not_found;
mod search;

pub use dashboard::DashboardView;
pub use entry_detail::EntryDetailView;
pub use not_found::NotFoundView;
pub use search::SearchView;
