//! The hosting page: the shared stylesheet link, the root color-mode
//! marker, the environment's color-scheme signal, and notification delivery.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use swatch_events::{SwatcherEvent, ThemeName};

/// Root attribute Bootstrap 5.3 reads for color mode
pub const MODE_ATTRIBUTE: &str = "data-bs-theme";

/// Stylesheet path for a theme.
///
/// The base theme lives at `{dir}/bootstrap.min.css`; each alternate at
/// `{dir}/{name}/bootstrap.min.css`. This matches the layout written by
/// the asset sync tool.
pub fn theme_href(themes_base_dir: &str, theme: &ThemeName) -> String {
    if theme.is_base() {
        format!("{}/bootstrap.min.css", themes_base_dir)
    } else {
        format!("{}/{}/bootstrap.min.css", themes_base_dir, theme)
    }
}

/// Page-level side effects the switcher performs.
///
/// Every method is infallible from the caller's point of view; a missing
/// document or element is a silent no-op.
pub trait Page {
    /// Whether a stylesheet link with this id exists
    fn has_link(&self, id: &str) -> bool;

    /// Append `<link id=.. rel="stylesheet">` to the document head
    fn insert_link(&self, id: &str);

    /// Rewrite the link's href. Returns false when the link does not exist.
    fn set_link_href(&self, id: &str, href: &str) -> bool;

    /// Set an attribute on the document root element
    fn set_root_attribute(&self, name: &str, value: &str);

    /// Environment reports `prefers-color-scheme: dark`
    fn prefers_dark(&self) -> bool;

    /// Deliver a change notification to host-page listeners
    fn dispatch(&self, event: &SwatcherEvent);
}

#[derive(Debug, Default)]
struct PageState {
    /// link id -> current href
    links: HashMap<String, Option<String>>,
    root_attributes: HashMap<String, String>,
    prefers_dark: bool,
    dispatched: Vec<SwatcherEvent>,
}

/// In-memory page. Clones share one document, like several widgets on
/// the same page. Used for server-side rendering and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    state: Rc<RefCell<PageState>>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page with an existing stylesheet link
    pub fn with_link(self, id: &str) -> Self {
        self.state.borrow_mut().links.insert(id.to_string(), None);
        self
    }

    /// Set the environment's dark color-scheme signal
    pub fn with_prefers_dark(self, prefers_dark: bool) -> Self {
        self.state.borrow_mut().prefers_dark = prefers_dark;
        self
    }

    pub fn link_href(&self, id: &str) -> Option<String> {
        self.state.borrow().links.get(id).cloned().flatten()
    }

    pub fn root_attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().root_attributes.get(name).cloned()
    }

    /// Notifications dispatched so far, oldest first
    pub fn dispatched(&self) -> Vec<SwatcherEvent> {
        self.state.borrow().dispatched.clone()
    }
}

impl Page for MemoryPage {
    fn has_link(&self, id: &str) -> bool {
        self.state.borrow().links.contains_key(id)
    }

    fn insert_link(&self, id: &str) {
        self.state
            .borrow_mut()
            .links
            .entry(id.to_string())
            .or_insert(None);
    }

    fn set_link_href(&self, id: &str, href: &str) -> bool {
        match self.state.borrow_mut().links.get_mut(id) {
            Some(slot) => {
                *slot = Some(href.to_string());
                true
            }
            None => false,
        }
    }

    fn set_root_attribute(&self, name: &str, value: &str) {
        self.state
            .borrow_mut()
            .root_attributes
            .insert(name.to_string(), value.to_string());
    }

    fn prefers_dark(&self) -> bool {
        self.state.borrow().prefers_dark
    }

    fn dispatch(&self, event: &SwatcherEvent) {
        self.state.borrow_mut().dispatched.push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_href_alternate() {
        assert_eq!(
            theme_href("./themes", &ThemeName::from("darkly")),
            "./themes/darkly/bootstrap.min.css"
        );
    }

    #[test]
    fn test_theme_href_base() {
        assert_eq!(
            theme_href("/static/themes", &ThemeName::base()),
            "/static/themes/bootstrap.min.css"
        );
    }

    #[test]
    fn test_missing_link_is_noop() {
        let page = MemoryPage::new();
        assert!(!page.set_link_href("bootswatch-theme", "x.css"));
        assert_eq!(page.link_href("bootswatch-theme"), None);
    }

    #[test]
    fn test_insert_link_keeps_existing_href() {
        let page = MemoryPage::new().with_link("theme");
        assert!(page.set_link_href("theme", "a.css"));
        page.insert_link("theme");
        assert_eq!(page.link_href("theme").as_deref(), Some("a.css"));
    }
}
