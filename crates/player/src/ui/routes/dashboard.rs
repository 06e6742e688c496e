//! Dashboard route handler

use dioxus::prelude::*;

use crate::presentation::views::DashboardView;

#[component]
pub fn DashboardRoute() -> Element {
    rsx! {
        DashboardView {}
    }
}
