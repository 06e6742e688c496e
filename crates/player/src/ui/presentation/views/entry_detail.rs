//! Entry detail page: sprites, types, abilities, measures and related entries.

use dioxus::prelude::*;
use pokedex_domain::{EntryIdentifier, LoadState};
use pokedex_engine::use_cases::EntryProfile;

use super::NotFoundView;
use crate::presentation::components::common::{Badge, Card, Skeleton};
use crate::presentation::format::{height_label, weight_label};
use crate::presentation::services::use_entry_lookup;
use crate::routes::Route;

#[component]
pub fn EntryDetailView(id: String) -> Element {
    let lookup = use_entry_lookup();
    let mut profile: Signal<LoadState<EntryProfile>> = use_signal(LoadState::default);

    use_effect(move || {
        let lookup = lookup.clone();
        let id = id.clone();
        spawn(async move {
            profile.set(LoadState::Loading);

            let next = match EntryIdentifier::new(&id) {
                Err(e) => {
                    tracing::debug!(id = %id, error = %e, "Rejected entry identifier");
                    LoadState::Failure(e.to_string())
                }
                Ok(identifier) => match lookup.execute(&identifier).await {
                    Ok(found) => LoadState::Success(found),
                    Err(e) => LoadState::Failure(e.to_string()),
                },
            };
            profile.set(next);
        });
    });

    let current = profile.read().clone();
    match current {
        LoadState::Idle | LoadState::Loading => rsx! {
            div {
                class: "max-w-2xl mx-auto",
                Skeleton { height: 400 }
            }
        },
        LoadState::Failure(_) => rsx! {
            NotFoundView {}
        },
        LoadState::Success(EntryProfile { detail, related }) => {
            let height = height_label(&detail);
            let weight = weight_label(&detail);
            let front = detail.sprites.front_default.clone();
            let back = detail.sprites.back_default.clone();
            let back_alt = format!("{} back", detail.name);

            rsx! {
                div {
                    class: "max-w-2xl mx-auto",
                    Card {
                        title: detail.name.clone(),
                        div {
                            class: "flex justify-center mb-6",
                            if let Some(src) = front {
                                img { src: "{src}", alt: "{detail.name}", width: "200", height: "200" }
                            }
                            if let Some(src) = back {
                                img { src: "{src}", alt: "{back_alt}", width: "200", height: "200" }
                            }
                        }
                        div {
                            class: "grid grid-cols-2 gap-4",
                            div {
                                h3 { class: "text-lg font-semibold mb-2", "Types:" }
                                div {
                                    class: "flex flex-wrap gap-2",
                                    for name in detail.types.iter() {
                                        Badge { key: "{name}", label: name.clone() }
                                    }
                                }
                            }
                            div {
                                h3 { class: "text-lg font-semibold mb-2", "Abilities:" }
                                ul {
                                    class: "list-disc list-inside",
                                    for ability in detail.abilities.iter() {
                                        li { "{ability.name}" }
                                    }
                                }
                            }
                            div {
                                h3 { class: "text-lg font-semibold mb-2", "Base Experience:" }
                                p { "{detail.base_experience}" }
                            }
                            div {
                                h3 { class: "text-lg font-semibold mb-2", "Height and Weight:" }
                                p { "Height: {height}" }
                                p { "Weight: {weight}" }
                            }
                        }
                        div {
                            class: "mt-6",
                            h3 { class: "text-lg font-semibold mb-2", "Related Pokémon:" }
                            ul {
                                class: "list-disc list-inside",
                                for name in related {
                                    li {
                                        key: "{name}",
                                        Link {
                                            to: Route::entry(&name),
                                            class: "text-blue-500 hover:underline capitalize",
                                            "{name}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
