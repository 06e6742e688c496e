//! Site header with brand and navigation links.

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn Header() -> Element {
    rsx! {
        header {
            class: "bg-red-600 text-white p-4",
            nav {
                class: "container mx-auto flex justify-between items-center",
                Link { to: Route::SearchRoute {}, class: "text-2xl font-bold", "PokéExplorer" }
                ul {
                    class: "flex space-x-4",
                    li { Link { to: Route::SearchRoute {}, class: "hover:underline", "Search" } }
                    li { Link { to: Route::DashboardRoute {}, class: "hover:underline", "Dashboard" } }
                }
            }
        }
    }
}
