//! Layout component wrapping demo pages with Bootstrap and a navbar toolbar.

use dioxus::prelude::*;
use swatch_events::ModePreference;

use super::theme::boot_script;
use crate::config::{DEFAULT_LINK_ID, DEFAULT_THEMES_DIR};

/// CSS tweaks on top of whichever Bootstrap theme is active.
const CUSTOM_STYLES: &str = r#"
.swatch-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 1rem; }
.event-log { max-height: 12rem; overflow-y: auto; font-size: 0.85rem; }
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Page content
    pub children: Element,
    /// Navbar tools, typically a configured `BootSwatcher`
    pub toolbar: Element,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("CARGO_PKG_VERSION");
    let full_title = format!("{} - BootSwatcher", props.title);
    let base_href = format!("{}/bootstrap.min.css", DEFAULT_THEMES_DIR);

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Style { {CUSTOM_STYLES} }
        // Mode init runs immediately (no DOM needed) to prevent flash
        document::Script { {boot_script(ModePreference::Auto)} }

        // The theme switcher rewrites this link's href
        link { id: DEFAULT_LINK_ID, rel: "stylesheet", href: "{base_href}" }

        header { class: "navbar bg-body-tertiary mb-4",
            div { class: "container",
                span { class: "navbar-brand", "BootSwatcher" }
                {props.toolbar}
            }
        }
        main { class: "container",
            {props.children}
        }
        footer { class: "container mt-4",
            small { class: "text-body-secondary", "BootSwatcher v{version}" }
        }
    }
}
