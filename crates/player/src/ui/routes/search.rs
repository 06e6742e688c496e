//! Search route handler

use dioxus::prelude::*;

use crate::presentation::views::SearchView;

#[component]
pub fn SearchRoute() -> Element {
    rsx! {
        SearchView {}
    }
}
