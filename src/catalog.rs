//! Theme catalog: the ordered list of theme names offered in the selector.
//!
//! The catalog is a JSON array of names fetched once per attachment. Any
//! failure (unreachable, non-success status, non-array, empty) falls back
//! to the built-in Bootswatch v5 list.

use async_trait::async_trait;
use serde_json::Value;
use swatch_events::ThemeName;
use tracing::{debug, warn};

use crate::error::CatalogError;

/// Built-in catalog used when the configured one cannot be loaded.
pub const FALLBACK_THEMES: [&str; 26] = [
    "bootstrap",
    "cerulean",
    "cosmo",
    "cyborg",
    "darkly",
    "flatly",
    "journal",
    "litera",
    "lumen",
    "lux",
    "materia",
    "minty",
    "morph",
    "pulse",
    "quartz",
    "sandstone",
    "simplex",
    "sketchy",
    "slate",
    "solar",
    "spacelab",
    "superhero",
    "united",
    "vapor",
    "yeti",
    "zephyr",
];

/// Ordered theme list with the base theme always first and never repeated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeCatalog {
    themes: Vec<ThemeName>,
}

impl ThemeCatalog {
    /// The built-in 26-theme list
    pub fn fallback() -> Self {
        Self {
            themes: FALLBACK_THEMES.iter().map(|t| ThemeName::from(*t)).collect(),
        }
    }

    /// Build a catalog from arbitrary names.
    ///
    /// The base theme is forced to the front; empty names and later
    /// duplicates are dropped.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ThemeName>,
    {
        let mut themes = vec![ThemeName::base()];
        for name in names {
            let name = name.into();
            if name.as_str().is_empty() || themes.contains(&name) {
                continue;
            }
            themes.push(name);
        }
        Self { themes }
    }

    /// Parse a catalog payload. Non-string and empty entries are skipped;
    /// a payload with none left is [`CatalogError::Empty`].
    pub fn from_json(body: &str) -> Result<Self, CatalogError> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| CatalogError::Malformed(e.to_string()))?;
        let entries = match value {
            Value::Array(entries) => entries,
            other => {
                return Err(CatalogError::Malformed(format!(
                    "expected array, got {}",
                    json_kind(&other)
                )))
            }
        };
        let names: Vec<&str> = entries
            .iter()
            .filter_map(Value::as_str)
            .filter(|name| !name.is_empty())
            .collect();
        if names.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self::from_names(names))
    }

    pub fn themes(&self) -> &[ThemeName] {
        &self.themes
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Always false for catalogs built here: the base theme is always present.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.themes.iter().any(|t| t.as_str() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ThemeName> {
        self.themes.iter()
    }
}

impl Default for ThemeCatalog {
    fn default() -> Self {
        Self::fallback()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Where catalog payloads come from (HTTP fetch in the browser, fixtures in tests).
///
/// `?Send` because browser futures are bound to the UI thread.
#[async_trait(?Send)]
pub trait CatalogSource {
    /// Fetch the raw catalog body from `url`
    async fn fetch(&self, url: &str) -> Result<String, CatalogError>;
}

/// Fetch and parse the catalog at `url`, falling back to the built-in list.
///
/// Never fails: every error is logged and absorbed.
pub async fn load_catalog<S: CatalogSource + ?Sized>(source: &S, url: &str) -> ThemeCatalog {
    let result = match source.fetch(url).await {
        Ok(body) => ThemeCatalog::from_json(&body),
        Err(e) => Err(e),
    };

    match result {
        Ok(catalog) => {
            debug!(url, themes = catalog.len(), "Theme catalog loaded");
            catalog
        }
        Err(e) => {
            warn!(url, error = %e, "Theme catalog unavailable, using built-in list");
            ThemeCatalog::fallback()
        }
    }
}

/// Fixed response source, for tests and for pages that embed their catalog.
#[derive(Debug, Clone)]
pub struct StaticCatalog(pub Result<String, CatalogError>);

impl StaticCatalog {
    pub fn body(body: impl Into<String>) -> Self {
        Self(Ok(body.into()))
    }

    pub fn failing(error: CatalogError) -> Self {
        Self(Err(error))
    }
}

/// No catalog at all: loading yields the built-in list.
impl Default for StaticCatalog {
    fn default() -> Self {
        Self::failing(CatalogError::Unreachable("no catalog source".to_string()))
    }
}

#[async_trait(?Send)]
impl CatalogSource for StaticCatalog {
    async fn fetch(&self, _url: &str) -> Result<String, CatalogError> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(catalog: &ThemeCatalog) -> Vec<&str> {
        catalog.iter().map(ThemeName::as_str).collect()
    }

    #[test]
    fn test_fallback_has_26_themes_base_first() {
        let catalog = ThemeCatalog::fallback();
        assert_eq!(catalog.len(), 26);
        assert_eq!(catalog.themes()[0].as_str(), "bootstrap");
        assert!(catalog.contains("zephyr"));
    }

    #[test]
    fn test_base_theme_forced_first_and_deduplicated() {
        let catalog =
            ThemeCatalog::from_json(r#"["darkly", "bootstrap", "flatly", "bootstrap"]"#).unwrap();
        assert_eq!(names(&catalog), vec!["bootstrap", "darkly", "flatly"]);
    }

    #[test]
    fn test_non_string_and_empty_entries_skipped() {
        let catalog = ThemeCatalog::from_json(r#"["lux", 42, null, "", "minty"]"#).unwrap();
        assert_eq!(names(&catalog), vec!["bootstrap", "lux", "minty"]);
    }

    #[test]
    fn test_rejects_non_array_and_empty() {
        assert!(matches!(
            ThemeCatalog::from_json(r#"{"themes": []}"#),
            Err(CatalogError::Malformed(_))
        ));
        assert!(matches!(
            ThemeCatalog::from_json("not json"),
            Err(CatalogError::Malformed(_))
        ));
        assert_eq!(ThemeCatalog::from_json("[]"), Err(CatalogError::Empty));
    }

    #[test]
    fn test_array_without_names_is_empty() {
        assert_eq!(
            ThemeCatalog::from_json(r#"[1, 2, null]"#),
            Err(CatalogError::Empty)
        );
        assert_eq!(ThemeCatalog::from_json(r#"["", {}]"#), Err(CatalogError::Empty));

        let source = StaticCatalog::body("[1, 2, null]");
        let catalog = tokio_test::block_on(load_catalog(&source, "./themes/themes.json"));
        assert_eq!(catalog.len(), 26);
    }

    #[test]
    fn test_load_catalog_success() {
        let source = StaticCatalog::body(r#"["cosmo", "cyborg"]"#);
        let catalog = tokio_test::block_on(load_catalog(&source, "./themes/themes.json"));
        assert_eq!(names(&catalog), vec!["bootstrap", "cosmo", "cyborg"]);
    }

    #[test]
    fn test_load_catalog_falls_back_on_every_failure() {
        let failures = [
            StaticCatalog::failing(CatalogError::Unreachable("offline".to_string())),
            StaticCatalog::failing(CatalogError::Status(404)),
            StaticCatalog::body("\"darkly\""),
            StaticCatalog::body("[]"),
        ];
        for source in failures {
            let catalog = tokio_test::block_on(load_catalog(&source, "./themes/themes.json"));
            assert_eq!(catalog, ThemeCatalog::fallback());
        }
    }
}
