use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFoundView() -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen",
            h1 { class: "text-4xl font-bold mb-4", "404 - Page Not Found" }
            p { class: "text-xl mb-8", "Oops! The Pokémon you're looking for has fled." }
            Link { to: Route::SearchRoute {}, class: "text-blue-500 hover:underline", "Return to the Pokédex" }
        }
    }
}
