//! Host access for the theme preference.
//!
//! The browser host reads and writes `localStorage`, evaluates the
//! `(prefers-color-scheme: dark)` media query and toggles the `dark` class on
//! the `<html>` element. `MemoryHost` stands in for all three outside the
//! browser (non-`csr` builds and tests).

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use std::collections::HashMap;

use crate::state::theme::ThemeError;

/// Class applied to the document root while dark-presented.
pub const DARK_CLASS: &str = "dark";

/// Media query backing the system preference signal.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Environment a `ThemePreference` reads from and writes to.
pub trait ThemeHost {
    fn read_item(&self, key: &str) -> Result<Option<String>, ThemeError>;

    fn write_item(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;

    /// Whether the system currently prefers a dark colour scheme. Never cached.
    fn prefers_dark(&self) -> Result<bool, ThemeError>;

    fn set_dark_presented(&mut self, dark: bool) -> Result<(), ThemeError>;
}

#[cfg(feature = "csr")]
pub type PlatformHost = BrowserHost;
#[cfg(not(feature = "csr"))]
pub type PlatformHost = MemoryHost;

// =============================================================================
// BROWSER
// =============================================================================

/// `window`-backed host. Looks up browser objects on every call.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHost;

#[cfg(feature = "csr")]
impl BrowserHost {
    fn storage() -> Result<web_sys::Storage, ThemeError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(ThemeError::StorageUnavailable)
    }
}

#[cfg(feature = "csr")]
impl ThemeHost for BrowserHost {
    fn read_item(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| ThemeError::Storage(format!("{e:?}")))
    }

    fn write_item(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| ThemeError::Storage(format!("{e:?}")))
    }

    fn prefers_dark(&self) -> Result<bool, ThemeError> {
        web_sys::window()
            .and_then(|w| w.match_media(PREFERS_DARK_QUERY).ok().flatten())
            .map(|mq| mq.matches())
            .ok_or(ThemeError::MediaQueryUnavailable)
    }

    fn set_dark_presented(&mut self, dark: bool) -> Result<(), ThemeError> {
        let el = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
            .ok_or(ThemeError::RootUnavailable)?;
        el.class_list()
            .toggle_with_force(DARK_CLASS, dark)
            .map(|_| ())
            .map_err(|_| ThemeError::RootUnavailable)
    }
}

// =============================================================================
// MEMORY
// =============================================================================

/// In-memory host. Each host capability can be switched off to model a
/// degraded browser.
#[derive(Clone, Debug)]
pub struct MemoryHost {
    items: HashMap<String, String>,
    storage_available: bool,
    /// `None` models a browser without `matchMedia`.
    system_prefers_dark: Option<bool>,
    root_available: bool,
    dark_presented: bool,
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self {
            items: HashMap::new(),
            storage_available: true,
            system_prefers_dark: Some(false),
            root_available: true,
            dark_presented: false,
        }
    }
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_item(mut self, key: &str, value: &str) -> Self {
        self.items.insert(key.to_owned(), value.to_owned());
        self
    }

    #[must_use]
    pub fn with_system_dark(mut self, dark: bool) -> Self {
        self.system_prefers_dark = Some(dark);
        self
    }

    #[must_use]
    pub fn without_storage(mut self) -> Self {
        self.storage_available = false;
        self
    }

    #[must_use]
    pub fn without_media_query(mut self) -> Self {
        self.system_prefers_dark = None;
        self
    }

    #[must_use]
    pub fn without_root(mut self) -> Self {
        self.root_available = false;
        self
    }

    /// Change the system preference without re-applying anything.
    pub fn set_system_dark(&mut self, dark: bool) {
        self.system_prefers_dark = Some(dark);
    }

    pub fn item(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    pub fn is_dark_presented(&self) -> bool {
        self.dark_presented
    }
}

impl ThemeHost for MemoryHost {
    fn read_item(&self, key: &str) -> Result<Option<String>, ThemeError> {
        if !self.storage_available {
            return Err(ThemeError::StorageUnavailable);
        }
        Ok(self.items.get(key).cloned())
    }

    fn write_item(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        if !self.storage_available {
            return Err(ThemeError::StorageUnavailable);
        }
        self.items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn prefers_dark(&self) -> Result<bool, ThemeError> {
        self.system_prefers_dark
            .ok_or(ThemeError::MediaQueryUnavailable)
    }

    fn set_dark_presented(&mut self, dark: bool) -> Result<(), ThemeError> {
        if !self.root_available {
            return Err(ThemeError::RootUnavailable);
        }
        self.dark_presented = dark;
        Ok(())
    }
}
