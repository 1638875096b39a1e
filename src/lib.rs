//! BootSwatcher - Rust Implementation
//!
//! An offline-ready theme switcher for Bootstrap 5 and the Bootswatch
//! themes, with a dark mode toggle.
//!
//! This library provides:
//! - A renderer-independent switcher controller (`switcher`)
//! - Theme catalog loading with a built-in fallback (`catalog`)
//! - Preference persistence over localStorage (`storage`)
//! - Page side effects: stylesheet link, `data-bs-theme`, change events (`page`)
//! - A Dioxus component wrapping it all (`app`)
//! - Asset sync for the `themes/` directory (server feature)

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

// Deny truly dangerous patterns (these will fail the build)
#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Dioxus UI app (shared between server SSR and WASM client)
pub mod app;

pub mod catalog;
pub mod config;
pub mod error;
pub mod page;
pub mod storage;
pub mod switcher;

// Browser bindings (WASM only)
#[cfg(target_arch = "wasm32")]
pub mod web;

// Server-only modules (excluded from WASM build)
#[cfg(feature = "server")]
pub mod assets;

pub use catalog::{load_catalog, CatalogSource, StaticCatalog, ThemeCatalog, FALLBACK_THEMES};
pub use config::SwitcherConfig;
pub use error::{CatalogError, StorageError};
pub use page::{theme_href, MemoryPage, Page};
pub use storage::{MemoryStore, PreferenceStore, Preferences};
pub use swatch_events::{ColorMode, ModePreference, SwatcherEvent, ThemeName};
pub use switcher::{Lifecycle, ThemeSwitcher, WidgetView};
