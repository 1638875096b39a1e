//! Preference persistence.
//!
//! The widget persists two values under fixed, versioned keys in an
//! origin-scoped store (`localStorage` in the browser). Storage failures
//! are absorbed: the widget keeps working in memory for the session.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use swatch_events::{ColorMode, ThemeName};
use tracing::debug;

use crate::error::StorageError;

/// Key holding the last applied theme name
pub const THEME_KEY: &str = "bootswatcher:theme";

/// Key holding the last applied color mode
pub const MODE_KEY: &str = "bootswatcher:mode";

/// Origin-scoped key/value store.
pub trait PreferenceStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store. Clones share the same entries, like two widgets on
/// one page sharing `localStorage`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails, like storage disabled by the browser
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Pre-populate an entry
    pub fn with_item(self, key: &str, value: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Read an entry directly, bypassing availability
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Typed, failure-absorbing view over a [`PreferenceStore`].
#[derive(Debug, Clone)]
pub struct Preferences<S> {
    store: S,
}

impl<S: PreferenceStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored theme, if any. Empty strings count as absent.
    pub fn saved_theme(&self) -> Option<ThemeName> {
        self.read(THEME_KEY)
            .filter(|t| !t.is_empty())
            .map(ThemeName::from)
    }

    /// Stored mode, if it is exactly "light" or "dark"
    pub fn saved_mode(&self) -> Option<ColorMode> {
        self.read(MODE_KEY).as_deref().and_then(ColorMode::parse)
    }

    pub fn save_theme(&self, theme: &ThemeName) {
        self.write(THEME_KEY, theme.as_str());
    }

    pub fn save_mode(&self, mode: ColorMode) {
        self.write(MODE_KEY, mode.as_str());
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                debug!(key, error = %e, "Preference read failed, using default");
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(e) = self.store.set_item(key, value) {
            debug!(key, value, error = %e, "Preference write failed, keeping in-memory state");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_versioned_keys() {
        let store = MemoryStore::new();
        let prefs = Preferences::new(store.clone());

        prefs.save_theme(&ThemeName::from("darkly"));
        prefs.save_mode(ColorMode::Dark);

        assert_eq!(store.peek("bootswatcher:theme").as_deref(), Some("darkly"));
        assert_eq!(store.peek("bootswatcher:mode").as_deref(), Some("dark"));
        assert_eq!(prefs.saved_theme(), Some(ThemeName::from("darkly")));
        assert_eq!(prefs.saved_mode(), Some(ColorMode::Dark));
    }

    #[test]
    fn test_invalid_mode_ignored() {
        let prefs = Preferences::new(MemoryStore::new().with_item(MODE_KEY, "auto"));
        assert_eq!(prefs.saved_mode(), None);
    }

    #[test]
    fn test_empty_theme_ignored() {
        let prefs = Preferences::new(MemoryStore::new().with_item(THEME_KEY, ""));
        assert_eq!(prefs.saved_theme(), None);
    }

    #[test]
    fn test_unavailable_store_is_absorbed() {
        let prefs = Preferences::new(MemoryStore::unavailable());
        prefs.save_theme(&ThemeName::from("lux"));
        prefs.save_mode(ColorMode::Light);
        assert_eq!(prefs.saved_theme(), None);
        assert_eq!(prefs.saved_mode(), None);
    }

    #[test]
    fn test_clones_share_entries() {
        let a = MemoryStore::new();
        let b = a.clone();
        a.set_item(THEME_KEY, "cosmo").unwrap();
        b.set_item(THEME_KEY, "cyborg").unwrap();
        assert_eq!(a.get_item(THEME_KEY).unwrap().as_deref(), Some("cyborg"));
    }
}
