//! Shared UI components for the BootSwatcher web UI.

pub mod layout;
pub mod theme;

pub use layout::Layout;
pub use theme::{boot_script, BootSwatcher};
