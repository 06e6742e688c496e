//! Search page: filter the entry index by name and show detail cards.

use std::collections::HashMap;

use dioxus::core::Task;
use dioxus::prelude::*;
use pokedex_domain::{EntryDetail, EntrySummary};
use pokedex_engine::use_cases::SearchEntries;

use crate::presentation::components::common::ErrorAlert;
use crate::presentation::components::EntryCard;
use crate::presentation::services::use_search_entries;
use crate::routes::Route;

#[component]
pub fn SearchView() -> Element {
    let search = use_search_entries();
    let navigator = use_navigator();

    let mut query = use_signal(String::new);
    let mut index: Signal<Vec<EntrySummary>> = use_signal(Vec::new);
    let mut details: Signal<HashMap<String, EntryDetail>> = use_signal(HashMap::new);
    let mut error: Signal<Option<String>> = use_signal(|| None);
    let mut loading = use_signal(|| false);
    let mut pending: Signal<Option<Task>> = use_signal(|| None);

    // Load the index on mount
    {
        let search = search.clone();
        use_effect(move || {
            let search = search.clone();
            spawn(async move {
                match search.load_index().await {
                    Ok(entries) => index.set(entries),
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        });
    }

    let visible = use_memo(move || SearchEntries::visible(&index.read(), &query.read()));

    // Fetch card details whenever the visible set changes
    use_effect(move || {
        let shown = visible();
        if let Some(task) = pending.write().take() {
            task.cancel();
        }
        if shown.is_empty() {
            loading.set(false);
            return;
        }

        let search = search.clone();
        let task = spawn(async move {
            loading.set(true);
            let known = details.peek().clone();
            let fetched = search.fetch_missing_details(&shown, &known).await;
            details.write().extend(fetched);
            loading.set(false);
        });
        pending.set(Some(task));
    });

    let cards: Vec<(String, EntryDetail)> = {
        let known = details.read();
        visible
            .read()
            .iter()
            .filter_map(|entry| known.get(&entry.name).map(|d| (entry.name.clone(), d.clone())))
            .collect()
    };

    rsx! {
        div {
            class: "max-w-4xl mx-auto",
            h1 { class: "text-3xl font-bold mb-6 text-center", "Search Pokémon" }
            input {
                r#type: "text",
                class: "input w-full mb-6",
                placeholder: "Enter Pokémon name",
                value: "{query}",
                oninput: move |evt| {
                    query.set(evt.value());
                    error.set(None);
                },
            }
            if let Some(message) = error() {
                ErrorAlert { message }
            }
            if loading() {
                p { class: "text-center", "Loading..." }
            }
            div {
                class: "grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4",
                for (name, detail) in cards {
                    EntryCard {
                        key: "{name}",
                        detail,
                        on_select: move |name: String| {
                            navigator.push(Route::entry(&name));
                        },
                    }
                }
            }
        }
    }
}
