//! Shared types for the BootSwatcher theme widget.
//!
//! These are the values that cross the widget boundary:
//! - what gets persisted (theme name, color mode)
//! - what host pages observe (theme/mode change notifications)
//!
//! # Modules
//! - [`theme`] - Theme names and color modes
//! - [`events`] - Change notifications (SwatcherEvent)

pub mod events;
pub mod theme;

// Re-export commonly used types at crate root
pub use events::SwatcherEvent;
pub use theme::{ColorMode, ModePreference, ThemeName, BASE_THEME};
