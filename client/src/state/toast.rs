//! Toast notification queue.
//!
//! DESIGN
//! ======
//! The queue is plain data so ordering, capping and expiry stay testable
//! without a browser. `ToastContext` wraps it in a signal and owns the
//! dismissal timers (browser builds only).

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Severity of a toast; selects its styling and icon.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "toast toast--info",
            Self::Success => "toast toast--success",
            Self::Warning => "toast toast--warning",
            Self::Error => "toast toast--error",
        }
    }

    /// Bootstrap Icons class for the kind.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Info => "bi bi-info-circle",
            Self::Success => "bi bi-check-circle",
            Self::Warning => "bi bi-exclamation-triangle",
            Self::Error => "bi bi-x-octagon",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    /// Time a toast stays visible.
    pub timeout_ms: u32,
    /// Whether hovering a toast holds off its dismissal.
    pub pause_on_hover: bool,
    /// Oldest toasts are dropped beyond this many.
    pub max_visible: usize,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 2000,
            pause_on_hover: false,
            max_visible: 5,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub paused: bool,
    /// Bumped on every re-arm; older timers no longer match.
    generation: u64,
}

/// A scheduled auto-dismissal. Only the latest one armed for a toast counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Expiry {
    pub id: u64,
    pub generation: u64,
    pub after_ms: u32,
}

#[derive(Clone, Debug)]
pub struct ToastState {
    pub config: ToastConfig,
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new(ToastConfig::default())
    }
}

impl ToastState {
    pub fn new(config: ToastConfig) -> Self {
        Self {
            config,
            toasts: Vec::new(),
            next_id: 1,
        }
    }

    /// Queue a toast and return its id. Call `arm` to schedule its dismissal.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
            paused: false,
            generation: 0,
        });
        let max = self.config.max_visible.max(1);
        if self.toasts.len() > max {
            let overflow = self.toasts.len() - max;
            self.toasts.drain(..overflow);
        }
        id
    }

    /// Start a fresh `timeout_ms` countdown for `id`, superseding earlier ones.
    pub fn arm(&mut self, id: u64) -> Option<Expiry> {
        let after_ms = self.config.timeout_ms;
        let toast = self.toasts.iter_mut().find(|t| t.id == id)?;
        toast.generation += 1;
        Some(Expiry {
            id,
            generation: toast.generation,
            after_ms,
        })
    }

    /// The countdown currently in force for `id`, if any.
    pub fn pending_expiry(&self, id: u64) -> Option<Expiry> {
        self.toasts
            .iter()
            .find(|t| t.id == id && t.generation > 0)
            .map(|t| Expiry {
                id,
                generation: t.generation,
                after_ms: self.config.timeout_ms,
            })
    }

    /// Remove a toast regardless of hover state.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Timer-driven removal. Stale countdowns and paused toasts are ignored.
    pub fn expire(&mut self, expiry: Expiry) -> bool {
        let live = self
            .toasts
            .iter()
            .any(|t| t.id == expiry.id && t.generation == expiry.generation && !t.paused);
        live && self.dismiss(expiry.id)
    }

    /// Mark a toast hovered or not. No-op unless `pause_on_hover` is set.
    pub fn set_paused(&mut self, id: u64, paused: bool) -> bool {
        if !self.config.pause_on_hover {
            return false;
        }
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) if toast.paused != paused => {
                toast.paused = paused;
                true
            }
            _ => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Reactive handle to the toast queue.
#[derive(Clone, Copy)]
pub struct ToastContext {
    pub state: RwSignal<ToastState>,
}

impl ToastContext {
    pub fn new(config: ToastConfig) -> Self {
        Self {
            state: RwSignal::new(ToastState::new(config)),
        }
    }

    pub fn provide(config: ToastConfig) -> Self {
        let ctx = Self::new(config);
        provide_context(ctx);
        ctx
    }

    /// Show a toast and schedule its dismissal.
    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let mut id = 0;
        self.state.update(|s| id = s.push(kind, message));
        self.arm(id);
        id
    }

    pub fn dismiss(&self, id: u64) {
        self.state.update(|s| {
            s.dismiss(id);
        });
    }

    /// Hover tracking; leaving a paused toast restarts its countdown.
    pub fn hover(&self, id: u64, hovered: bool) {
        let mut changed = false;
        self.state.update(|s| changed = s.set_paused(id, hovered));
        if changed && !hovered {
            self.arm(id);
        }
    }

    /// Timer callback body. Safe after the owning scope is gone.
    pub fn expire(&self, expiry: Expiry) {
        let _ = self.state.try_update(|s| s.expire(expiry));
    }

    fn arm(&self, id: u64) {
        let mut expiry = None;
        self.state.update(|s| expiry = s.arm(id));
        let Some(expiry) = expiry else {
            return;
        };
        #[cfg(feature = "csr")]
        {
            let ctx = *self;
            gloo_timers::callback::Timeout::new(expiry.after_ms, move || ctx.expire(expiry)).forget();
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = expiry;
        }
    }
}

/// Fetch the toast context provided by `App`.
pub fn use_toasts() -> ToastContext {
    expect_context::<ToastContext>()
}
