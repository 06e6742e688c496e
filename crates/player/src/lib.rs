//! PokeExplorer Player crate.
//!
//! Dioxus UI over the engine use cases. Runs as a web app on wasm32 and as a
//! desktop app on native targets; the target is selected with `cfg`.

pub mod ui;

pub use ui::presentation;
pub use ui::routes;

// Re-export commonly used entrypoints
pub use ui::app;
pub use ui::Route;
