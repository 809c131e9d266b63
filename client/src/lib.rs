//! # gallery-client
//!
//! Leptos + WASM shell for the gallery application: theme preference
//! (light / dark / auto), toast notifications and the Bootstrap Icons set.
//!
//! Browser code is gated behind the `csr` feature. Without it the same state
//! logic compiles against an in-memory host, which is what the tests use.

pub mod app;
pub mod components;
pub mod config;
pub mod state;
pub mod util;

/// Browser entry point: logging, theme, then mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::App;
    use crate::state::theme::ThemePreference;
    use crate::util::dark_mode::BrowserHost;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let mut preference = ThemePreference::load(BrowserHost);
    preference.initialize();
    log::debug!("theme initialized: {}", preference.current());

    leptos::mount::mount_to_body(move || view! { <App preference/> });
}
