//! Search result card.

use dioxus::prelude::*;
use pokedex_domain::EntryDetail;

use super::common::{Badge, Card};
use crate::presentation::format::ability_list;

/// `on_select` receives the entry name.
#[component]
pub fn EntryCard(detail: EntryDetail, on_select: EventHandler<String>) -> Element {
    let sprite = detail.sprites.front_default.clone();
    let abilities = ability_list(&detail);
    let name = detail.name.clone();

    rsx! {
        div {
            class: "cursor-pointer hover:shadow-lg transition-shadow",
            onclick: move |_| on_select.call(name.clone()),
            Card {
                title: detail.name.clone(),
                div {
                    class: "flex justify-center mb-4",
                    if let Some(src) = sprite {
                        img { src: "{src}", alt: "{detail.name}", width: "96", height: "96" }
                    }
                }
                div {
                    class: "space-y-2",
                    div {
                        span { class: "font-semibold", "Type(s): " }
                        for type_name in detail.types.iter() {
                            Badge { key: "{type_name}", label: type_name.clone() }
                        }
                    }
                    div {
                        span { class: "font-semibold", "Abilities: " }
                        "{abilities}"
                    }
                    div {
                        span { class: "font-semibold", "Base Experience: " }
                        "{detail.base_experience}"
                    }
                }
            }
        }
    }
}
