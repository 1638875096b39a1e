//! ThemeSwitcher - renderer-independent widget controller
//!
//! Owns the widget's view model and in-memory catalog, and drives the
//! shared page resources (stylesheet link, root mode marker) and the
//! preference store it is handed.
//!
//! Lifecycle: `Unattached -> Rendering -> LoadingCatalog -> Ready`.
//! The catalog fetch is the only suspension point. It is split into
//! [`ThemeSwitcher::begin_attach`] / [`ThemeSwitcher::complete_attach`]
//! so a UI layer can await the fetch without holding the controller.

use swatch_events::{ColorMode, SwatcherEvent, ThemeName};
use tracing::{debug, info};

use crate::catalog::{load_catalog, CatalogSource, ThemeCatalog};
use crate::config::SwitcherConfig;
use crate::page::{theme_href, Page, MODE_ATTRIBUTE};
use crate::storage::{PreferenceStore, Preferences};

/// Element id of the theme selector
pub const SELECT_ID: &str = "bsw-select";

/// Element id of the dark-mode checkbox
pub const TOGGLE_ID: &str = "bsw-darkmode";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Unattached,
    Rendering,
    LoadingCatalog,
    Ready,
}

/// One `<option>` of the selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeOption {
    pub value: ThemeName,
    pub label: String,
}

/// Dark-mode switch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeToggle {
    pub form_class: &'static str,
    pub label_class: &'static str,
    pub checked: bool,
}

/// Rendered UI shell. Absent entirely when the widget is invisible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetView {
    pub wrapper_class: &'static str,
    /// "Theme" label class, when labels are shown
    pub label_class: Option<&'static str>,
    pub select_class: &'static str,
    pub select_style: &'static str,
    pub options: Vec<ThemeOption>,
    /// Selector value (may name a theme outside `options`)
    pub selected: Option<ThemeName>,
    pub toggle: Option<ModeToggle>,
}

impl WidgetView {
    fn shell(config: &SwitcherConfig) -> Self {
        let compact = config.compact;
        Self {
            wrapper_class: if compact {
                "d-inline-flex align-items-center gap-1"
            } else {
                "d-inline-flex align-items-center gap-2"
            },
            label_class: config.show_label.then_some(if compact {
                "form-label mb-0 visually-hidden"
            } else {
                "form-label mb-0"
            }),
            select_class: "form-select form-select-sm",
            select_style: if compact {
                "min-width: 10rem"
            } else {
                "min-width: 14rem"
            },
            options: Vec::new(),
            selected: None,
            toggle: config.show_mode_toggle.then_some(ModeToggle {
                form_class: if compact {
                    "form-check form-switch ms-1"
                } else {
                    "form-check form-switch ms-2"
                },
                label_class: if compact {
                    "form-check-label visually-hidden"
                } else {
                    "form-check-label"
                },
                checked: false,
            }),
        }
    }
}

/// Theme and color-mode switcher bound to a store and a page.
pub struct ThemeSwitcher<S, P> {
    config: SwitcherConfig,
    prefs: Preferences<S>,
    page: P,
    lifecycle: Lifecycle,
    catalog: Option<ThemeCatalog>,
    view: Option<WidgetView>,
    /// Change handlers are live (Ready and visible)
    wired: bool,
    theme: Option<ThemeName>,
    mode: Option<ColorMode>,
}

impl<S: PreferenceStore, P: Page> ThemeSwitcher<S, P> {
    pub fn new(config: SwitcherConfig, store: S, page: P) -> Self {
        Self {
            config,
            prefs: Preferences::new(store),
            page,
            lifecycle: Lifecycle::Unattached,
            catalog: None,
            view: None,
            wired: false,
            theme: None,
            mode: None,
        }
    }

    pub fn config(&self) -> &SwitcherConfig {
        &self.config
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Current UI shell, `None` when invisible or not yet rendered
    pub fn view(&self) -> Option<&WidgetView> {
        self.view.as_ref()
    }

    pub fn catalog(&self) -> Option<&ThemeCatalog> {
        self.catalog.as_ref()
    }

    /// Last applied theme
    pub fn current_theme(&self) -> Option<&ThemeName> {
        self.theme.as_ref()
    }

    /// Last applied mode
    pub fn current_mode(&self) -> Option<ColorMode> {
        self.mode
    }

    pub fn is_wired(&self) -> bool {
        self.wired
    }

    /// Render the shell and enter `LoadingCatalog`.
    ///
    /// Returns the catalog URL the caller should fetch before calling
    /// [`Self::complete_attach`].
    pub fn begin_attach(&mut self) -> String {
        self.lifecycle = Lifecycle::Rendering;
        self.render();
        self.lifecycle = Lifecycle::LoadingCatalog;
        debug!(url = %self.config.catalog_url, "Loading theme catalog");
        self.config.catalog_url.clone()
    }

    /// Finish attachment with the loaded (or fallback) catalog.
    ///
    /// Populates the selector, resolves the saved-or-default theme and
    /// mode, applies both to the page, syncs controls, then wires change
    /// handlers. Nothing is persisted and no notification is emitted.
    pub fn complete_attach(&mut self, catalog: ThemeCatalog) {
        self.catalog = Some(catalog);
        self.populate();

        let theme = self.resolve_theme();
        let mode = self.resolve_mode();
        self.ensure_link();
        self.sync_controls(Some(&theme), Some(mode));
        self.apply_theme(&theme);
        self.apply_mode(mode);
        info!(theme = %theme, mode = %mode, "Theme switcher ready");
        self.theme = Some(theme);
        self.mode = Some(mode);

        self.wired = !self.config.invisible;
        self.lifecycle = Lifecycle::Ready;
    }

    /// Full attachment: render, fetch the catalog from `source`, and apply.
    pub async fn attach<C: CatalogSource + ?Sized>(&mut self, source: &C) {
        let url = self.begin_attach();
        let catalog = load_catalog(source, &url).await;
        self.complete_attach(catalog);
    }

    /// Apply saved-or-default state for a widget that unmounted while its
    /// catalog was loading.
    ///
    /// Store and page outlive the widget, so a throwaway controller over
    /// them finishes the attachment; nothing is rendered.
    pub fn settle_detached(config: SwitcherConfig, store: S, page: P, catalog: ThemeCatalog) {
        let config = SwitcherConfig {
            invisible: true,
            ..config
        };
        let mut switcher = Self::new(config, store, page);
        switcher.begin_attach();
        switcher.complete_attach(catalog);
        debug!("Attachment finished after unmount");
    }

    /// Replace the configuration after attributes change.
    ///
    /// Re-renders the shell and repopulates options from the catalog
    /// already loaded. The catalog is not re-fetched and persisted
    /// preferences are not re-applied; the fresh controls show the theme
    /// and mode currently applied.
    pub fn reconfigure(&mut self, config: SwitcherConfig) {
        self.config = config;
        if self.lifecycle == Lifecycle::Unattached {
            return;
        }
        self.render();
        self.populate();
        let theme = self.theme.clone();
        self.sync_controls(theme.as_ref(), self.mode);
        self.wired = self.lifecycle == Lifecycle::Ready && !self.config.invisible;
        debug!(invisible = self.config.invisible, "Theme switcher reconfigured");
    }

    /// Apply, persist, and announce a theme. Any name is accepted.
    pub fn set_theme(&mut self, theme: impl Into<ThemeName>) -> SwatcherEvent {
        let theme = theme.into();
        self.ensure_link();
        self.apply_theme(&theme);
        self.prefs.save_theme(&theme);
        self.sync_controls(Some(&theme), None);
        self.theme = Some(theme.clone());

        let event = SwatcherEvent::ThemeChanged { theme };
        self.page.dispatch(&event);
        event
    }

    /// Apply, persist, and announce a color mode.
    pub fn set_mode(&mut self, mode: ColorMode) -> SwatcherEvent {
        self.apply_mode(mode);
        self.prefs.save_mode(mode);
        self.sync_controls(None, Some(mode));
        self.mode = Some(mode);

        let event = SwatcherEvent::ModeChanged { mode };
        self.page.dispatch(&event);
        event
    }

    /// Selector change handler. Ignored until wired.
    pub fn on_theme_selected(&mut self, value: &str) -> Option<SwatcherEvent> {
        self.wired.then(|| self.set_theme(value))
    }

    /// Dark-mode switch change handler. Ignored until wired.
    pub fn on_mode_toggled(&mut self, checked: bool) -> Option<SwatcherEvent> {
        self.wired
            .then(|| self.set_mode(ColorMode::from_dark_flag(checked)))
    }

    fn render(&mut self) {
        self.view = (!self.config.invisible).then(|| WidgetView::shell(&self.config));
    }

    fn populate(&mut self) {
        let (Some(view), Some(catalog)) = (self.view.as_mut(), self.catalog.as_ref()) else {
            return;
        };
        view.options = catalog
            .iter()
            .map(|name| ThemeOption {
                value: name.clone(),
                label: name.display_label(),
            })
            .collect();
    }

    fn sync_controls(&mut self, theme: Option<&ThemeName>, mode: Option<ColorMode>) {
        let Some(view) = self.view.as_mut() else {
            return;
        };
        if let Some(theme) = theme {
            view.selected = Some(theme.clone());
        }
        if let (Some(toggle), Some(mode)) = (view.toggle.as_mut(), mode) {
            toggle.checked = mode.is_dark();
        }
    }

    fn resolve_theme(&self) -> ThemeName {
        self.prefs
            .saved_theme()
            .unwrap_or_else(|| self.config.default_theme.clone())
    }

    fn resolve_mode(&self) -> ColorMode {
        if let Some(mode) = self.prefs.saved_mode() {
            return mode;
        }
        self.config
            .default_mode
            .fixed()
            .unwrap_or_else(|| ColorMode::from_dark_flag(self.page.prefers_dark()))
    }

    fn ensure_link(&self) {
        let id = &self.config.style_link_id;
        if self.config.insert_link_if_missing && !self.page.has_link(id) {
            debug!(id = %id, "Inserting theme stylesheet link");
            self.page.insert_link(id);
        }
    }

    fn apply_theme(&self, theme: &ThemeName) {
        let href = theme_href(&self.config.themes_base_dir, theme);
        if !self.page.set_link_href(&self.config.style_link_id, &href) {
            debug!(
                id = %self.config.style_link_id,
                "Theme stylesheet link missing, theme not applied"
            );
        }
    }

    fn apply_mode(&self, mode: ColorMode) {
        self.page.set_root_attribute(MODE_ATTRIBUTE, mode.as_str());
    }
}
