//! Theme switcher component: Bootswatch theme selector plus dark mode toggle.

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use swatch_events::{ColorMode, ModePreference, SwatcherEvent, ThemeName};

use crate::catalog::load_catalog;
use crate::config::SwitcherConfig;
use crate::page::MODE_ATTRIBUTE;
use crate::storage::MODE_KEY;
use crate::switcher::{ThemeSwitcher, SELECT_ID, TOGGLE_ID};

// Browser builds talk to the live page; SSR renders the shell only.
#[cfg(target_arch = "wasm32")]
type BrowserStore = crate::web::WebStorage;
#[cfg(target_arch = "wasm32")]
type BrowserPage = crate::web::WebPage;
#[cfg(target_arch = "wasm32")]
type BrowserCatalog = crate::web::HttpCatalogSource;

#[cfg(not(target_arch = "wasm32"))]
type BrowserStore = crate::storage::MemoryStore;
#[cfg(not(target_arch = "wasm32"))]
type BrowserPage = crate::page::MemoryPage;
#[cfg(not(target_arch = "wasm32"))]
type BrowserCatalog = crate::catalog::StaticCatalog;

#[derive(Props, Clone, PartialEq)]
pub struct BootSwatcherProps {
    /// URL of the JSON theme list
    pub themes_url: Option<String>,
    /// Directory holding the theme stylesheets
    pub themes_path: Option<String>,
    /// Id of the controlled `<link>` element
    pub link_id: Option<String>,
    pub default_theme: Option<String>,
    /// "light", "dark" or "auto"
    pub default_mode: Option<String>,
    #[props(default = false)]
    pub show_label: bool,
    #[props(default = false)]
    pub show_mode_toggle: bool,
    #[props(default = false)]
    pub compact: bool,
    /// Apply persisted theme/mode without rendering anything
    #[props(default = false)]
    pub invisible: bool,
    /// Create the `<link>` element when it is missing
    #[props(default = false)]
    pub insert_link: bool,
    pub on_theme_change: Option<EventHandler<ThemeName>>,
    pub on_mode_change: Option<EventHandler<ColorMode>>,
}

impl BootSwatcherProps {
    fn to_config(&self) -> SwitcherConfig {
        let mut attributes: Vec<(&str, &str)> = Vec::new();
        let strings = [
            ("themes-url", &self.themes_url),
            ("themes-path", &self.themes_path),
            ("link-id", &self.link_id),
            ("default-theme", &self.default_theme),
            ("default-mode", &self.default_mode),
        ];
        for (name, value) in strings {
            if let Some(value) = value {
                attributes.push((name, value.as_str()));
            }
        }
        let flags = [
            ("show-label", self.show_label),
            ("show-mode-toggle", self.show_mode_toggle),
            ("compact", self.compact),
            ("invisible", self.invisible),
            ("insert-link", self.insert_link),
        ];
        attributes.extend(flags.iter().filter(|(_, on)| *on).map(|(name, _)| (*name, "")));
        SwitcherConfig::from_attributes(attributes)
    }
}

fn forward(
    event: Option<SwatcherEvent>,
    on_theme_change: Option<EventHandler<ThemeName>>,
    on_mode_change: Option<EventHandler<ColorMode>>,
) {
    match event {
        Some(SwatcherEvent::ThemeChanged { theme }) => {
            if let Some(handler) = on_theme_change {
                handler.call(theme);
            }
        }
        Some(SwatcherEvent::ModeChanged { mode }) => {
            if let Some(handler) = on_mode_change {
                handler.call(mode);
            }
        }
        None => {}
    }
}

/// Theme selector with optional label and dark mode switch.
/// Persists to localStorage and drives a Bootstrap `<link>` plus the
/// `data-bs-theme` root attribute.
#[component]
pub fn BootSwatcher(props: BootSwatcherProps) -> Element {
    let config = props.to_config();
    let on_theme_change = props.on_theme_change;
    let on_mode_change = props.on_mode_change;

    let mut switcher = use_signal({
        let config = config.clone();
        move || ThemeSwitcher::new(config, BrowserStore::default(), BrowserPage::default())
    });

    // Attach on mount: render shell, fetch catalog, then apply saved state.
    // The fetch is not scope-bound: unmounting mid-load still applies.
    use_effect(move || {
        let url = switcher.write().begin_attach();
        let config = switcher.peek().config().clone();
        spawn_forever(async move {
            let catalog = load_catalog(&BrowserCatalog::default(), &url).await;
            match switcher.try_write() {
                Ok(mut live) => live.complete_attach(catalog),
                Err(_) => ThemeSwitcher::settle_detached(
                    config,
                    BrowserStore::default(),
                    BrowserPage::default(),
                    catalog,
                ),
            }
        });
    });

    // Attribute changes re-render without re-fetching or re-applying
    use_effect(use_reactive((&config,), move |(config,)| {
        if switcher.peek().config() != &config {
            switcher.write().reconfigure(config);
        }
    }));

    let Some(view) = switcher.read().view().cloned() else {
        return rsx! {};
    };
    let selected = view
        .selected
        .as_ref()
        .map(ThemeName::to_string)
        .unwrap_or_default();

    rsx! {
        div { class: view.wrapper_class,
            if let Some(label_class) = view.label_class {
                label { class: label_class, r#for: SELECT_ID, "Theme" }
            }
            select {
                id: SELECT_ID,
                class: view.select_class,
                style: view.select_style,
                value: "{selected}",
                onchange: move |evt| {
                    let event = switcher.write().on_theme_selected(&evt.value());
                    forward(event, on_theme_change, on_mode_change);
                },
                for opt in view.options.iter() {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value.as_str() == selected,
                        "{opt.label}"
                    }
                }
            }
            if let Some(toggle) = view.toggle {
                div { class: toggle.form_class,
                    input {
                        class: "form-check-input",
                        r#type: "checkbox",
                        id: TOGGLE_ID,
                        checked: toggle.checked,
                        onchange: move |evt| {
                            let event = switcher.write().on_mode_toggled(evt.checked());
                            forward(event, on_theme_change, on_mode_change);
                        },
                    }
                    label { class: toggle.label_class, r#for: TOGGLE_ID, "Dark mode" }
                }
            }
        }
    }
}

/// Client-side JavaScript applying the saved color mode before first paint.
/// Resolves like the widget: stored mode, then the configured default,
/// then `prefers-color-scheme`.
pub fn boot_script(default_mode: ModePreference) -> String {
    // serde_json output doubles as a JS string literal
    let key = serde_json::to_string(MODE_KEY).unwrap_or_default();
    let attribute = serde_json::to_string(MODE_ATTRIBUTE).unwrap_or_default();
    let fallback = match default_mode.fixed() {
        Some(mode) => format!("'{}'", mode.as_str()),
        None => "(window.matchMedia && window.matchMedia('(prefers-color-scheme: dark)').matches ? 'dark' : 'light')".to_string(),
    };
    format!(
        r#"
(function(){{
    var m = null;
    try {{ m = localStorage.getItem({key}); }} catch (e) {{}}
    if (m !== 'light' && m !== 'dark') m = {fallback};
    document.documentElement.setAttribute({attribute}, m);
}})();
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props() -> BootSwatcherProps {
        BootSwatcherProps {
            themes_url: None,
            themes_path: Some("/static/themes".to_string()),
            link_id: None,
            default_theme: Some("darkly".to_string()),
            default_mode: Some("dark".to_string()),
            show_label: false,
            show_mode_toggle: true,
            compact: true,
            invisible: false,
            insert_link: false,
            on_theme_change: None,
            on_mode_change: None,
        }
    }

    #[test]
    fn test_props_to_config() {
        let config = props().to_config();
        assert_eq!(config.themes_base_dir, "/static/themes");
        assert_eq!(config.catalog_url, "./themes/themes.json");
        assert_eq!(config.default_theme, ThemeName::from("darkly"));
        assert_eq!(config.default_mode, ModePreference::Dark);
        assert!(config.show_mode_toggle);
        assert!(config.compact);
        assert!(!config.show_label);
        assert!(!config.insert_link_if_missing);
    }

    #[test]
    fn test_boot_script_uses_versioned_key() {
        let script = boot_script(ModePreference::Auto);
        assert!(script.contains(r#"localStorage.getItem("bootswatcher:mode")"#));
        assert!(script.contains(r#"setAttribute("data-bs-theme", m)"#));
        assert!(script.contains("prefers-color-scheme: dark"));
    }

    #[test]
    fn test_boot_script_fixed_default() {
        let script = boot_script(ModePreference::Light);
        assert!(script.contains("m = 'light';"));
        assert!(!script.contains("matchMedia"));
    }
}
