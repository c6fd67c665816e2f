//! Thin adapters from the page logic onto `web_sys`.
//!
//! Everything here must only run in the browser: event handlers and effects.
//! On the server, preferences live in a [`MemoryStorage`](crate::theme::MemoryStorage)
//! for the request.

use web_sys::{ScrollBehavior, ScrollToOptions, Window};

use crate::nav::{self, Anchor, Viewport};
use crate::theme::Theme;
#[cfg(not(feature = "hydrate"))]
use crate::theme::MemoryStorage;
#[cfg(feature = "hydrate")]
use crate::theme::{PreferenceStorage, StorageError};

#[cfg(feature = "hydrate")]
pub type PageStorage = BrowserStorage;
#[cfg(not(feature = "hydrate"))]
pub type PageStorage = MemoryStorage;

#[cfg(feature = "hydrate")]
pub fn page_storage() -> PageStorage {
    BrowserStorage
}

#[cfg(not(feature = "hydrate"))]
pub fn page_storage() -> PageStorage {
    MemoryStorage::default()
}

/// `window.localStorage`, looked up on every access.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| StorageError::Unavailable)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed {
                key: key.to_string(),
            })
    }
}

/// Mirror the theme onto `<html>`: exactly one of `light` / `dark`.
pub fn apply_theme_class(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let _ = classes.remove_2(Theme::Light.as_str(), Theme::Dark.as_str());
    if classes.add_1(theme.as_str()).is_err() {
        log::warn!("couldn't apply {theme} theme to document");
    }
}

pub struct BrowserViewport {
    window: Window,
}

impl BrowserViewport {
    pub fn current() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }
}

impl Viewport for BrowserViewport {
    fn element_top(&self, id: &str) -> Option<f64> {
        let element = self.window.document()?.get_element_by_id(id)?;
        Some(element.get_bounding_client_rect().top())
    }

    fn page_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or_default()
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Scroll the page to `anchor`; false if there was nothing to scroll to.
pub fn scroll_to(anchor: Anchor) -> bool {
    BrowserViewport::current()
        .map(|viewport| nav::scroll_to_anchor(&viewport, anchor.id()))
        .unwrap_or(false)
}
