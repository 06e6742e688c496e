//! Entry detail route handler

use dioxus::prelude::*;

use crate::presentation::views::EntryDetailView;

/// Keyed by id so following a related link mounts a fresh view. The
/// previous lookup is dropped together with the old instance.
#[component]
pub fn EntryDetailRoute(id: String) -> Element {
    rsx! {
        EntryDetailView {
            key: "{id}",
            id: id.clone(),
        }
    }
}
