use dioxus::prelude::*;

#[component]
pub fn Card(title: Option<String>, #[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div {
            class: "card {class}",
            if let Some(title) = title {
                div {
                    class: "card-header",
                    h3 { class: "card-title", "{title}" }
                }
            }
            div { class: "card-content", {children} }
        }
    }
}
