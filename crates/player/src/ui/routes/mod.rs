//! Route table. Every page renders inside [`AppLayout`], so the header is
//! present on the 404 page too.

use dioxus::prelude::*;

mod app_layout;
mod dashboard;
mod entry_detail;
mod not_found;
mod search;

use app_layout::AppLayout;
use dashboard::DashboardRoute;
use entry_detail::EntryDetailRoute;
use not_found::NotFoundRoute;
use search::SearchRoute;

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        SearchRoute {},
        #[route("/pokemon/:id")]
        EntryDetailRoute { id: String },
        #[route("/dashboard")]
        DashboardRoute {},
        #[route("/:..segments")]
        NotFoundRoute { segments: Vec<String> },
}

impl Route {
    /// Detail page of an entry. Names are lower-cased, the remote API only
    /// resolves lower-case names.
    pub fn entry(name: &str) -> Self {
        Route::EntryDetailRoute {
            id: name.to_lowercase(),
        }
    }
}
