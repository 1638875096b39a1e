//! Change notifications emitted by the widget.
//!
//! Host pages see these as DOM `CustomEvent`s (`themechange`,
//! `modechange`) whose `detail` is the event payload.

use crate::theme::{ColorMode, ThemeName};
use serde::{Deserialize, Serialize};

/// Notifications emitted when the active theme or mode changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "detail")]
pub enum SwatcherEvent {
    /// The active theme stylesheet was switched
    ThemeChanged {
        /// Newly active theme name
        theme: ThemeName,
    },

    /// The root color-mode marker was changed
    ModeChanged {
        /// Newly active mode
        mode: ColorMode,
    },
}

impl SwatcherEvent {
    /// DOM event type name host pages listen for
    pub fn dom_event_name(&self) -> &'static str {
        match self {
            Self::ThemeChanged { .. } => "themechange",
            Self::ModeChanged { .. } => "modechange",
        }
    }

    /// JSON payload for the DOM event's `detail` field
    pub fn detail(&self) -> serde_json::Value {
        match self {
            Self::ThemeChanged { theme } => serde_json::json!({ "theme": theme }),
            Self::ModeChanged { mode } => serde_json::json!({ "mode": mode }),
        }
    }
}
