//! End-to-end switcher behavior through the public API, using the
//! in-memory page and store.

use bootswatcher::storage::{MODE_KEY, THEME_KEY};
use bootswatcher::{
    CatalogError, ColorMode, Lifecycle, MemoryPage, MemoryStore, ModePreference, StaticCatalog,
    SwatcherEvent, SwitcherConfig, ThemeName, ThemeSwitcher,
};

const LINK: &str = "bootswatch-theme";

fn offline() -> StaticCatalog {
    StaticCatalog::failing(CatalogError::Status(503))
}

#[test]
fn test_first_visit_in_dark_environment() {
    let store = MemoryStore::new();
    let page = MemoryPage::new().with_link(LINK).with_prefers_dark(true);
    let config = SwitcherConfig::from_attributes([("show-mode-toggle", ""), ("show-label", "")]);

    let mut switcher = ThemeSwitcher::new(config, store.clone(), page.clone());
    assert_eq!(switcher.lifecycle(), Lifecycle::Unattached);
    tokio_test::block_on(switcher.attach(&offline()));

    assert_eq!(switcher.lifecycle(), Lifecycle::Ready);
    assert_eq!(page.root_attribute("data-bs-theme").as_deref(), Some("dark"));
    assert_eq!(
        page.link_href(LINK).as_deref(),
        Some("./themes/bootstrap.min.css")
    );
    assert_eq!(switcher.view().unwrap().options.len(), 26);
}

#[test]
fn test_returning_visit_restores_choices() {
    let store = MemoryStore::new();
    let page = MemoryPage::new().with_link(LINK);

    {
        let mut first = ThemeSwitcher::new(SwitcherConfig::default(), store.clone(), page.clone());
        tokio_test::block_on(first.attach(&offline()));
        first.on_theme_selected("superhero");
        first.on_mode_toggled(true);
    }

    // New page load: fresh document, same origin storage
    let page = MemoryPage::new().with_link(LINK);
    let config = SwitcherConfig {
        default_mode: ModePreference::Light,
        ..SwitcherConfig::default()
    };
    let mut second = ThemeSwitcher::new(config, store.clone(), page.clone());
    tokio_test::block_on(second.attach(&StaticCatalog::body(r#"["superhero", "solar"]"#)));

    assert_eq!(
        second.view().unwrap().selected,
        Some(ThemeName::from("superhero"))
    );
    assert_eq!(
        page.link_href(LINK).as_deref(),
        Some("./themes/superhero/bootstrap.min.css")
    );
    assert_eq!(page.root_attribute("data-bs-theme").as_deref(), Some("dark"));
}

#[test]
fn test_two_widgets_share_store_last_writer_wins() {
    let store = MemoryStore::new();
    let page = MemoryPage::new().with_link(LINK);

    let mut header = ThemeSwitcher::new(SwitcherConfig::default(), store.clone(), page.clone());
    let invisible = SwitcherConfig::from_attributes([("invisible", "")]);
    let mut footer = ThemeSwitcher::new(invisible, store.clone(), page.clone());
    tokio_test::block_on(header.attach(&offline()));
    tokio_test::block_on(footer.attach(&offline()));

    header.set_theme("minty");
    footer.set_theme("pulse");

    assert_eq!(store.peek(THEME_KEY).as_deref(), Some("pulse"));
    assert_eq!(
        page.link_href(LINK).as_deref(),
        Some("./themes/pulse/bootstrap.min.css")
    );
    // The header's own view only reflects its own writes
    assert_eq!(
        header.view().unwrap().selected,
        Some(ThemeName::from("minty"))
    );
}

#[test]
fn test_notifications_reach_the_page_in_order() {
    let page = MemoryPage::new().with_link(LINK);
    let mut switcher =
        ThemeSwitcher::new(SwitcherConfig::default(), MemoryStore::new(), page.clone());
    tokio_test::block_on(switcher.attach(&offline()));

    switcher.set_theme("yeti");
    switcher.set_mode(ColorMode::Dark);

    assert_eq!(
        page.dispatched(),
        vec![
            SwatcherEvent::ThemeChanged {
                theme: ThemeName::from("yeti")
            },
            SwatcherEvent::ModeChanged {
                mode: ColorMode::Dark
            },
        ]
    );
}

#[test]
fn test_custom_link_and_path() {
    let store = MemoryStore::new().with_item(MODE_KEY, "light");
    let page = MemoryPage::new();
    let config = SwitcherConfig::from_attributes([
        ("link-id", "site-theme"),
        ("themes-path", "/css/themes"),
        ("insert-link", ""),
        ("default-theme", "sandstone"),
    ]);
    let mut switcher = ThemeSwitcher::new(config, store, page.clone());
    tokio_test::block_on(switcher.attach(&offline()));

    assert_eq!(
        page.link_href("site-theme").as_deref(),
        Some("/css/themes/sandstone/bootstrap.min.css")
    );
    assert_eq!(page.link_href(LINK), None);
}
