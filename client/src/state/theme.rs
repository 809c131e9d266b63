//! Theme preference state (light / dark / auto).
//!
//! SYSTEM CONTEXT
//! ==============
//! Exactly one `ThemePreference` exists per running app. It owns the current
//! mode and keeps three things in step on every change: the in-memory mode,
//! the persisted `theme` record, and the `dark` class on the document root.
//! Host access goes through [`ThemeHost`] so the state machine runs the same
//! against the browser and against an in-memory host in tests.
//!
//! TRADE-OFFS
//! ==========
//! Persistence and media-query failures are logged and swallowed. The visual
//! update always wins; a missing `localStorage` only costs the next session
//! its remembered mode.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use leptos::logging::warn;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::util::dark_mode::{PlatformHost, ThemeHost};

/// Storage key for the persisted theme mode.
pub const STORAGE_KEY: &str = "theme";

// =============================================================================
// TYPES
// =============================================================================

/// Failures reading or applying the theme; all but `InvalidMode` are host faults.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("invalid theme mode: {0:?}")]
    InvalidMode(String),
    #[error("local storage unavailable")]
    StorageUnavailable,
    #[error("local storage error: {0}")]
    Storage(String),
    #[error("prefers-color-scheme media query unavailable")]
    MediaQueryUnavailable,
    #[error("document root element unavailable")]
    RootUnavailable,
}

/// User display preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the system colour scheme at the time the mode is applied.
    #[default]
    Auto,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::Auto];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }

    /// Lenient read of a persisted record: absent or unknown values are `Auto`.
    pub fn from_persisted(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "auto" => Ok(Self::Auto),
            other => Err(ThemeError::InvalidMode(other.to_owned())),
        }
    }
}

// =============================================================================
// PREFERENCE
// =============================================================================

/// Owner of the active theme mode.
#[derive(Clone, Debug)]
pub struct ThemePreference<H> {
    mode: ThemeMode,
    host: H,
}

impl<H: ThemeHost> ThemePreference<H> {
    /// Read the persisted mode without touching the document.
    pub fn load(host: H) -> Self {
        let mode = match host.read_item(STORAGE_KEY) {
            Ok(raw) => {
                let mode = ThemeMode::from_persisted(raw.as_deref());
                if let Some(raw) = raw.as_deref().filter(|raw| *raw != mode.as_str()) {
                    warn!("theme: ignoring persisted value {raw:?}, using {mode}");
                }
                mode
            }
            Err(err) => {
                warn!("theme: could not read persisted mode: {err}");
                ThemeMode::Auto
            }
        };
        Self { mode, host }
    }

    /// Apply the loaded mode. Run once by bootstrap before the UI mounts.
    pub fn initialize(&mut self) {
        self.set_theme(self.mode);
    }

    pub fn current(&self) -> ThemeMode {
        self.mode
    }

    /// Switch to `mode`, update the root `dark` class and persist the choice.
    pub fn set_theme(&mut self, mode: ThemeMode) {
        self.mode = mode;

        let dark = match mode {
            ThemeMode::Dark => true,
            ThemeMode::Light => false,
            ThemeMode::Auto => self.system_prefers_dark(),
        };
        if let Err(err) = self.host.set_dark_presented(dark) {
            warn!("theme: could not apply dark={dark}: {err}");
        }
        if let Err(err) = self.host.write_item(STORAGE_KEY, mode.as_str()) {
            warn!("theme: could not persist {mode}: {err}");
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn system_prefers_dark(&self) -> bool {
        self.host.prefers_dark().unwrap_or_else(|err| {
            warn!("theme: {err}, falling back to light");
            false
        })
    }
}

// =============================================================================
// CONTEXT
// =============================================================================

/// Reactive handle to the app's single `ThemePreference`.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    mode: RwSignal<ThemeMode>,
    preference: StoredValue<ThemePreference<PlatformHost>>,
}

impl ThemeContext {
    pub fn new(preference: ThemePreference<PlatformHost>) -> Self {
        Self {
            mode: RwSignal::new(preference.current()),
            preference: StoredValue::new(preference),
        }
    }

    /// Create the context and provide it to the component tree.
    pub fn provide(preference: ThemePreference<PlatformHost>) -> Self {
        let ctx = Self::new(preference);
        provide_context(ctx);
        ctx
    }

    /// Current mode; tracked when read inside a reactive scope.
    pub fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    pub fn mode_untracked(&self) -> ThemeMode {
        self.mode.get_untracked()
    }

    pub fn set_theme(&self, mode: ThemeMode) {
        self.preference.update_value(|p| p.set_theme(mode));
        self.mode.set(mode);
    }

    #[cfg(test)]
    pub(crate) fn host_mut_for_test<T>(&self, f: impl FnOnce(&mut PlatformHost) -> T) -> T {
        let mut out = None;
        self.preference.update_value(|p| out = Some(f(p.host_mut())));
        out.expect("stored preference is alive")
    }

    /// Run `f` against the underlying preference without tracking.
    pub fn with_preference<T>(&self, f: impl FnOnce(&ThemePreference<PlatformHost>) -> T) -> T {
        self.preference.with_value(f)
    }
}

/// Fetch the theme context provided by `App`.
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}
