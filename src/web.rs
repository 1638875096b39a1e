//! Browser bindings (WASM only): `localStorage`, the live document, and
//! `fetch`-based catalog loading.

use async_trait::async_trait;
use serde::Serialize;
use swatch_events::SwatcherEvent;
use tracing::debug;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{CustomEvent, CustomEventInit, Document, RequestCache, RequestInit, Response};

use crate::catalog::CatalogSource;
use crate::error::{CatalogError, StorageError};
use crate::page::Page;
use crate::storage::PreferenceStore;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

fn js_error(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_else(|| format!("{:?}", value))
}

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// `window.localStorage`. Access errors (disabled storage, sandboxed
/// frames) surface as [`StorageError`]s for the caller to absorb.
#[derive(Clone, Default)]
pub struct WebStorage;

impl WebStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(StorageError::Unavailable),
            Err(e) => Err(StorageError::Rejected(js_error(&e))),
        }
    }
}

impl PreferenceStore for WebStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Rejected(js_error(&e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Rejected(js_error(&e)))
    }
}

/// The live document.
#[derive(Clone, Default)]
pub struct WebPage;

impl Page for WebPage {
    fn has_link(&self, id: &str) -> bool {
        document()
            .and_then(|d| d.get_element_by_id(id))
            .is_some()
    }

    fn insert_link(&self, id: &str) {
        let Some(document) = document() else {
            return;
        };
        let Some(head) = document.head() else {
            return;
        };
        let Ok(link) = document.create_element("link") else {
            return;
        };
        link.set_id(id);
        let _ = link.set_attribute("rel", "stylesheet");
        if let Err(e) = head.append_child(&link) {
            debug!(id, error = %js_error(&e), "Failed to insert stylesheet link");
        }
    }

    fn set_link_href(&self, id: &str, href: &str) -> bool {
        match document().and_then(|d| d.get_element_by_id(id)) {
            Some(link) => link.set_attribute("href", href).is_ok(),
            None => false,
        }
    }

    fn set_root_attribute(&self, name: &str, value: &str) {
        if let Some(root) = document().and_then(|d| d.document_element()) {
            let _ = root.set_attribute(name, value);
        }
    }

    fn prefers_dark(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
            .map(|mql| mql.matches())
            .unwrap_or(false)
    }

    fn dispatch(&self, event: &SwatcherEvent) {
        let Some(root) = document().and_then(|d| d.document_element()) else {
            return;
        };
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let detail = match event.detail().serialize(&serializer) {
            Ok(detail) => detail,
            Err(e) => {
                debug!(error = %e, "Failed to encode event detail");
                return;
            }
        };

        let init = CustomEventInit::new();
        init.set_bubbles(true);
        init.set_detail(&detail);
        match CustomEvent::new_with_event_init_dict(event.dom_event_name(), &init) {
            Ok(dom_event) => {
                let _ = root.dispatch_event(&dom_event);
            }
            Err(e) => debug!(error = %js_error(&e), "Failed to create change event"),
        }
    }
}

/// Catalog fetched over HTTP with `cache: no-store`.
#[derive(Clone, Default)]
pub struct HttpCatalogSource;

#[async_trait(?Send)]
impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self, url: &str) -> Result<String, CatalogError> {
        let window =
            web_sys::window().ok_or_else(|| CatalogError::Unreachable("no window".to_string()))?;

        let init = RequestInit::new();
        init.set_method("GET");
        init.set_cache(RequestCache::NoStore);

        let response = JsFuture::from(window.fetch_with_str_and_init(url, &init))
            .await
            .map_err(|e| CatalogError::Unreachable(js_error(&e)))?;
        let response: Response = response
            .dyn_into()
            .map_err(|e| CatalogError::Unreachable(js_error(&e)))?;

        if !response.ok() {
            return Err(CatalogError::Status(response.status()));
        }

        let text = response
            .text()
            .map_err(|e| CatalogError::Malformed(js_error(&e)))?;
        let body = JsFuture::from(text)
            .await
            .map_err(|e| CatalogError::Malformed(js_error(&e)))?;
        body.as_string()
            .ok_or_else(|| CatalogError::Malformed("response body is not text".to_string()))
    }
}
