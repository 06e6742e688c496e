use dioxus::prelude::*;

/// Destructive alert with a fixed "Error" title.
#[component]
pub fn ErrorAlert(message: String) -> Element {
    rsx! {
        div {
            class: "alert alert-destructive mb-6",
            role: "alert",
            h5 { class: "alert-title", "Error" }
            div { class: "alert-description", "{message}" }
        }
    }
}
