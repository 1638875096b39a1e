//! Dioxus application entry point.
//!
//! The demo app hosts the theme switcher on a gallery of Bootstrap
//! components. Embedding pages only need [`components::BootSwatcher`].

use dioxus::prelude::*;

pub mod components;
pub mod pages;

use pages::Gallery;

/// Root app component
#[component]
pub fn App() -> Element {
    rsx! {
        Gallery {}
    }
}
