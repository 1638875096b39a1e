//! Configuration management
//!
//! - [`SwitcherConfig`]: widget options, built once from element
//!   attributes (or deserialized) and never mutated afterwards.
//! - [`ServerConfig`]: demo host and asset tool settings (server only).

use serde::Deserialize;
use swatch_events::{ModePreference, ThemeName};

pub const DEFAULT_CATALOG_URL: &str = "./themes/themes.json";
pub const DEFAULT_THEMES_DIR: &str = "./themes";
pub const DEFAULT_LINK_ID: &str = "bootswatch-theme";

/// Widget options. Every field has a default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SwitcherConfig {
    /// Location of the JSON array of theme names
    pub catalog_url: String,
    /// Directory holding `bootstrap.min.css` and one sub-directory per alternate
    pub themes_base_dir: String,
    /// Id of the `<link>` element whose href selects the theme
    pub style_link_id: String,
    /// Theme applied when nothing is stored
    pub default_theme: ThemeName,
    /// Mode applied when nothing is stored
    pub default_mode: ModePreference,
    pub show_label: bool,
    pub show_mode_toggle: bool,
    pub compact: bool,
    /// Manage persisted state and page side effects without rendering UI
    pub invisible: bool,
    /// Create the link element in `<head>` when it is missing
    pub insert_link_if_missing: bool,
}

impl Default for SwitcherConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            themes_base_dir: DEFAULT_THEMES_DIR.to_string(),
            style_link_id: DEFAULT_LINK_ID.to_string(),
            default_theme: ThemeName::base(),
            default_mode: ModePreference::Auto,
            show_label: false,
            show_mode_toggle: false,
            compact: false,
            invisible: false,
            insert_link_if_missing: false,
        }
    }
}

impl SwitcherConfig {
    /// Build from element-style attributes (`themes-url`, `show-label`, ...).
    ///
    /// String attributes with empty values keep their default. Boolean
    /// attributes are presence flags: any value, including "", sets them.
    /// Unknown attributes are ignored.
    pub fn from_attributes<'a, I>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Self::default();
        for (name, value) in attributes {
            let non_empty = (!value.is_empty()).then(|| value.to_string());
            match name {
                "themes-url" => {
                    if let Some(v) = non_empty {
                        config.catalog_url = v;
                    }
                }
                "themes-path" => {
                    if let Some(v) = non_empty {
                        config.themes_base_dir = v;
                    }
                }
                "link-id" => {
                    if let Some(v) = non_empty {
                        config.style_link_id = v;
                    }
                }
                "default-theme" => {
                    if let Some(v) = non_empty {
                        config.default_theme = ThemeName::from(v);
                    }
                }
                "default-mode" => config.default_mode = ModePreference::parse(value),
                "show-label" => config.show_label = true,
                "show-mode-toggle" => config.show_mode_toggle = true,
                "compact" => config.compact = true,
                "invisible" => config.invisible = true,
                "insert-link" => config.insert_link_if_missing = true,
                _ => {}
            }
        }
        config
    }
}

#[cfg(feature = "server")]
pub use server::{load_config, ServerConfig};

#[cfg(feature = "server")]
mod server {
    use anyhow::Result;
    use serde::Deserialize;
    use std::path::PathBuf;

    /// Demo host and asset sync settings
    #[derive(Debug, Deserialize)]
    pub struct ServerConfig {
        #[serde(default = "default_port")]
        pub port: u16,

        /// Built WASM bundle served at `/`
        #[serde(default = "default_web_dir")]
        pub web_dir: PathBuf,

        /// Theme stylesheets served at `/themes`
        #[serde(default = "default_themes_dir")]
        pub themes_dir: PathBuf,

        /// Third-party scripts (bootstrap.bundle.min.js)
        #[serde(default = "default_vendor_dir")]
        pub vendor_dir: PathBuf,

        /// Where `bootstrap` and `bootswatch` packages are installed
        #[serde(default = "default_node_modules")]
        pub node_modules: PathBuf,

        /// Copy theme assets before serving
        #[serde(default)]
        pub sync_on_start: bool,
    }

    fn default_port() -> u16 {
        3000
    }

    fn default_web_dir() -> PathBuf {
        PathBuf::from("dist")
    }

    fn default_themes_dir() -> PathBuf {
        PathBuf::from("themes")
    }

    fn default_vendor_dir() -> PathBuf {
        PathBuf::from("vendor")
    }

    fn default_node_modules() -> PathBuf {
        PathBuf::from("node_modules")
    }

    pub fn load_config() -> Result<ServerConfig> {
        let config = ::config::Config::builder()
            // Start with defaults
            .set_default("port", 3000)?
            // Load from config file if it exists
            .add_source(::config::File::with_name("bootswatcher").required(false))
            // Override with environment variables (BOOTSWATCHER_PORT, BOOTSWATCHER_THEMES_DIR, etc.)
            .add_source(
                ::config::Environment::with_prefix("BOOTSWATCHER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use serial_test::serial;

        #[test]
        #[serial]
        fn test_defaults() {
            let config = load_config().unwrap();
            assert_eq!(config.port, 3000);
            assert_eq!(config.themes_dir, PathBuf::from("themes"));
            assert!(!config.sync_on_start);
        }

        #[test]
        #[serial]
        fn test_environment_override() {
            std::env::set_var("BOOTSWATCHER_PORT", "8123");
            let config = load_config();
            std::env::remove_var("BOOTSWATCHER_PORT");
            assert_eq!(config.unwrap().port, 8123);
        }

        #[test]
        #[serial]
        fn test_environment_override_path_field() {
            std::env::set_var("BOOTSWATCHER_THEMES_DIR", "public/themes");
            let config = load_config();
            std::env::remove_var("BOOTSWATCHER_THEMES_DIR");
            assert_eq!(config.unwrap().themes_dir, PathBuf::from("public/themes"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SwitcherConfig::default();
        assert_eq!(config.catalog_url, "./themes/themes.json");
        assert_eq!(config.themes_base_dir, "./themes");
        assert_eq!(config.style_link_id, "bootswatch-theme");
        assert_eq!(config.default_theme, ThemeName::base());
        assert_eq!(config.default_mode, ModePreference::Auto);
        assert!(!config.invisible);
    }

    #[test]
    fn test_from_attributes() {
        let config = SwitcherConfig::from_attributes([
            ("themes-path", "/assets/themes"),
            ("default-theme", "darkly"),
            ("default-mode", "DARK"),
            ("show-mode-toggle", ""),
            ("compact", "false"),
            ("data-unrelated", "x"),
        ]);
        assert_eq!(config.themes_base_dir, "/assets/themes");
        assert_eq!(config.default_theme, ThemeName::from("darkly"));
        assert_eq!(config.default_mode, ModePreference::Dark);
        assert!(config.show_mode_toggle);
        // presence flag: the value is irrelevant
        assert!(config.compact);
        assert!(!config.show_label);
    }

    #[test]
    fn test_empty_string_attributes_keep_defaults() {
        let config = SwitcherConfig::from_attributes([("link-id", ""), ("themes-url", "")]);
        assert_eq!(config.style_link_id, DEFAULT_LINK_ID);
        assert_eq!(config.catalog_url, DEFAULT_CATALOG_URL);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: SwitcherConfig =
            serde_json::from_str(r#"{"default_mode": "light", "invisible": true}"#).unwrap();
        assert_eq!(config.default_mode, ModePreference::Light);
        assert!(config.invisible);
        assert_eq!(config.style_link_id, DEFAULT_LINK_ID);
    }
}
