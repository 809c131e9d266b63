//! Light / dark / auto selector.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only caller-driven path into `ThemeContext::set_theme` after startup.

#[cfg(test)]
#[path = "theme_switcher_test.rs"]
mod theme_switcher_test;

use leptos::prelude::*;

use crate::state::theme::{ThemeContext, ThemeMode, use_theme};
use crate::state::toast::{ToastContext, ToastKind, use_toasts};

/// Segmented control with one button per theme mode.
#[component]
pub fn ThemeSwitcher() -> impl IntoView {
    let theme = use_theme();
    let toasts = use_toasts();

    let buttons = ThemeMode::ALL
        .into_iter()
        .map(move |mode| {
            let active = move || theme.mode() == mode;
            let on_click = move |_| {
                select_mode(theme, toasts, mode);
            };
            view! {
                <button
                    class="btn theme-switcher__option"
                    class:theme-switcher__option--active=active
                    title=theme_label(mode)
                    on:click=on_click
                >
                    <i class=theme_icon(mode)></i>
                    <span class="theme-switcher__label">{theme_label(mode)}</span>
                </button>
            }
        })
        .collect_view();

    view! { <div class="theme-switcher" role="group">{buttons}</div> }
}

/// Apply `mode` on every click so `Auto` re-reads the system preference.
/// Only an actual mode change raises a toast. Returns whether it changed.
fn select_mode(theme: ThemeContext, toasts: ToastContext, mode: ThemeMode) -> bool {
    let changed = theme.mode_untracked() != mode;
    theme.set_theme(mode);
    if changed {
        toasts.notify(ToastKind::Info, theme_toast_message(mode));
    }
    changed
}

fn theme_label(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "Light",
        ThemeMode::Dark => "Dark",
        ThemeMode::Auto => "Auto",
    }
}

fn theme_icon(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "bi bi-sun",
        ThemeMode::Dark => "bi bi-moon-stars",
        ThemeMode::Auto => "bi bi-circle-half",
    }
}

fn theme_toast_message(mode: ThemeMode) -> String {
    match mode {
        ThemeMode::Auto => "Theme follows system".to_owned(),
        other => format!("Theme set to {}", theme_label(other).to_lowercase()),
    }
}
