//! Browser bindings for the theme controller.
//!
//! Reads and writes the preference in `localStorage`, queries
//! `prefers-color-scheme`, and toggles the `dark` class on the `<html>`
//! element. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Outside the `csr` build every binding is inert: the store reports itself
//! unavailable, the system signal reads light, and applying a mode does
//! nothing. This keeps native tests and tooling deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::{PreferenceError, PreferenceStore, SystemPreference, ThemeController, ThemeMode, ThemeSurface};

/// Class toggled on the document root while dark mode is active.
pub const DARK_CLASS: &str = "dark";

const DARK_MEDIA_QUERY: &str = "(prefers-color-scheme: dark)";

/// Theme controller wired to the real browser.
pub type BrowserThemeController = ThemeController<LocalStorageStore, DocumentRoot>;

/// Build the browser controller, resolving and applying the startup mode.
pub fn init(storage_key: &str) -> BrowserThemeController {
    ThemeController::init(LocalStorageStore, &MediaQueryPreference, DocumentRoot, storage_key)
}

/// `window.localStorage` access.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl PreferenceStore for LocalStorageStore {
    fn read(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage()?;
            storage.get_item(key).map_err(|e| PreferenceError::Read { key: key.to_owned(), reason: format!("{e:?}") })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(PreferenceError::Unavailable)
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage()?;
            storage
                .set_item(key, value)
                .map_err(|e| PreferenceError::Write { key: key.to_owned(), reason: format!("{e:?}") })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(PreferenceError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, PreferenceError> {
    // `local_storage()` errors when storage is disabled by the browser.
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(PreferenceError::Unavailable)
}

/// `matchMedia("(prefers-color-scheme: dark)")` query.
#[derive(Clone, Copy, Debug, Default)]
pub struct MediaQueryPreference;

impl SystemPreference for MediaQueryPreference {
    fn prefers_dark(&self) -> bool {
        #[cfg(feature = "csr")]
        {
            web_sys::window()
                .and_then(|w| w.match_media(DARK_MEDIA_QUERY).ok().flatten())
                .map_or(false, |mq| mq.matches())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = DARK_MEDIA_QUERY;
            false
        }
    }
}

/// The `<html>` element, styled through the `dark` class.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

impl ThemeSurface for DocumentRoot {
    fn apply(&self, mode: ThemeMode) {
        #[cfg(feature = "csr")]
        {
            let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) else {
                return;
            };
            let classes = el.class_list();
            let result = if mode.is_dark() { classes.add_1(DARK_CLASS) } else { classes.remove_1(DARK_CLASS) };
            if let Err(e) = result {
                log::warn!("failed to apply {} theme class: {e:?}", mode.as_str());
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = mode;
        }
    }
}
