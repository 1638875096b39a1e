//! Theme names and color modes.
//!
//! A theme is a named stylesheet variant (Bootstrap itself or a Bootswatch
//! alternate). A color mode is the light/dark scheme marker applied to the
//! document root.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the base Bootstrap theme. Every other name is an alternate.
pub const BASE_THEME: &str = "bootstrap";

/// Identifier of a stylesheet variant (e.g., "bootstrap", "darkly").
///
/// Any string is accepted; the name is only ever used to build a
/// stylesheet path and a display label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ThemeName(String);

impl ThemeName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The base Bootstrap theme
    pub fn base() -> Self {
        Self(BASE_THEME.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the base theme rather than an alternate
    pub fn is_base(&self) -> bool {
        self.0 == BASE_THEME
    }

    /// Human-readable label for selector options.
    ///
    /// The base theme reads "Bootstrap (default)"; alternates get their
    /// first character upper-cased ("darkly" -> "Darkly").
    pub fn display_label(&self) -> String {
        if self.is_base() {
            return "Bootstrap (default)".to_string();
        }
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl Default for ThemeName {
    fn default() -> Self {
        Self::base()
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ThemeName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for ThemeName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for ThemeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Concrete color mode applied to the page.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Only the exact strings "light" and "dark"
    /// are valid; anything else is treated as absent.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Mode represented by a dark-mode toggle's checked state
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configured default mode. `Auto` defers to the environment's
/// color-scheme preference and is never stored or applied as such.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ModePreference {
    Light,
    Dark,
    #[default]
    Auto,
}

impl ModePreference {
    /// Case-insensitive parse. Unrecognized values mean `Auto`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Self::Light,
            "dark" => Self::Dark,
            _ => Self::Auto,
        }
    }

    /// The concrete mode this preference pins, if any
    pub fn fixed(self) -> Option<ColorMode> {
        match self {
            Self::Light => Some(ColorMode::Light),
            Self::Dark => Some(ColorMode::Dark),
            Self::Auto => None,
        }
    }
}
