//! Shared page layout: header plus the routed page.

use dioxus::prelude::*;

use super::Route;
use crate::presentation::components::Header;

#[component]
pub fn AppLayout() -> Element {
    rsx! {
        Header {}
        main {
            class: "container mx-auto px-4 py-8",
            Outlet::<Route> {}
        }
    }
}
