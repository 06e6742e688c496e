use dioxus::prelude::*;

/// Grey placeholder block of a fixed height in pixels.
#[component]
pub fn Skeleton(height: u32) -> Element {
    rsx! {
        div {
            class: "skeleton w-full",
            style: "height: {height}px;",
        }
    }
}
