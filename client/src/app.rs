//! Root application component with context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::components::{theme_switcher::ThemeSwitcher, toaster::Toaster};
use crate::config::AppConfig;
use crate::state::theme::{ThemeContext, ThemePreference};
use crate::state::toast::ToastContext;
use crate::util::dark_mode::PlatformHost;

/// Root application component.
///
/// Takes an already initialized `ThemePreference` so the document root has
/// the right theme before anything renders.
#[component]
pub fn App(
    preference: ThemePreference<PlatformHost>,
    #[prop(optional)] config: Option<AppConfig>,
) -> impl IntoView {
    provide_meta_context();

    let config = config.unwrap_or_default();
    ThemeContext::provide(preference);
    ToastContext::provide(config.toast.clone());

    view! {
        <Stylesheet id="bootstrap-icons" href=config.icon_stylesheet_href.clone()/>
        <Title text=config.title.clone()/>

        <main class="app">
            <header class="app__header">
                <h1 class="app__title">{config.title}</h1>
                <span class="app__spacer"></span>
                <ThemeSwitcher/>
            </header>
            <Toaster/>
        </main>
    }
}
