//! Gallery page component.
//!
//! Renders a sample of Bootstrap components so theme and mode switches
//! are visible at a glance, plus a log of the switcher's notifications.

use dioxus::prelude::*;
use swatch_events::{ColorMode, ThemeName};

use crate::app::components::{BootSwatcher, Layout};

/// Keep the notification log short
const MAX_LOG_ENTRIES: usize = 20;

/// Gallery page component.
#[component]
pub fn Gallery() -> Element {
    let mut log = use_signal(Vec::<String>::new);

    let mut record = move |entry: String| {
        let mut entries = log.write();
        entries.insert(0, entry);
        entries.truncate(MAX_LOG_ENTRIES);
    };

    let toolbar = rsx! {
        BootSwatcher {
            show_label: true,
            show_mode_toggle: true,
            on_theme_change: move |theme: ThemeName| record(format!("themechange: {}", theme)),
            on_mode_change: move |mode: ColorMode| record(format!("modechange: {}", mode)),
        }
    };

    rsx! {
        Layout {
            title: "Gallery".to_string(),
            toolbar,

            h1 { class: "mb-4", "Theme gallery" }

            section { class: "swatch-grid mb-4",
                div { class: "card",
                    div { class: "card-body",
                        h5 { class: "card-title", "Buttons" }
                        div { class: "d-flex flex-wrap gap-2",
                            button { class: "btn btn-primary", "Primary" }
                            button { class: "btn btn-secondary", "Secondary" }
                            button { class: "btn btn-success", "Success" }
                            button { class: "btn btn-outline-danger", "Danger" }
                        }
                    }
                }
                div { class: "card",
                    div { class: "card-body",
                        h5 { class: "card-title", "Alerts" }
                        div { class: "alert alert-info mb-2", "Informational message" }
                        div { class: "alert alert-warning mb-0", "Warning message" }
                    }
                }
                div { class: "card",
                    div { class: "card-body",
                        h5 { class: "card-title", "Form" }
                        input { class: "form-control mb-2", placeholder: "Text input" }
                        div { class: "form-check",
                            input { class: "form-check-input", r#type: "checkbox", id: "gallery-check" }
                            label { class: "form-check-label", r#for: "gallery-check", "Check me" }
                        }
                    }
                }
            }

            section {
                h2 { class: "h5", "Notifications" }
                if log.read().is_empty() {
                    p { class: "text-body-secondary", "Change the theme or mode to see events." }
                } else {
                    ul { class: "list-group event-log",
                        for (i, entry) in log.read().iter().enumerate() {
                            li { key: "{i}", class: "list-group-item", "{entry}" }
                        }
                    }
                }
            }
        }
    }
}
