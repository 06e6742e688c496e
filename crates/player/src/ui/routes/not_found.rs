//! Catch-all route handler

use dioxus::prelude::*;

use crate::presentation::views::NotFoundView;

#[component]
pub fn NotFoundRoute(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "No route matched");
    rsx! {
        NotFoundView {}
    }
}
