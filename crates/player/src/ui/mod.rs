use dioxus::prelude::*;

pub mod presentation;
pub mod routes;

pub use routes::Route;

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    rsx! {
        document::Title { "PokéExplorer" }
        document::Meta {
            name: "description",
            content: "Explore the world of Pokémon with PokéExplorer",
        }
        document::Stylesheet {
            href: asset!("/assets/css/main.css"),
        }

        Router::<routes::Route> {}
    }
}
