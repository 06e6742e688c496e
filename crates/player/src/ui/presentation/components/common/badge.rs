use dioxus::prelude::*;

#[component]
pub fn Badge(label: String) -> Element {
    rsx! {
        span { class: "badge badge-secondary mr-1", "{label}" }
    }
}
