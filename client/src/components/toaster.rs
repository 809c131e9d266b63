//! Toast stack rendered in the corner of the viewport.

use leptos::prelude::*;

use crate::state::toast::use_toasts;

/// Renders queued toasts. Clicking a toast dismisses it.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toaster" aria-live="polite">
            {move || {
                toasts
                    .state
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div
                                class=toast.kind.css_class()
                                role="status"
                                on:click=move |_| toasts.dismiss(id)
                                on:mouseenter=move |_| toasts.hover(id, true)
                                on:mouseleave=move |_| toasts.hover(id, false)
                            >
                                <i class=toast.kind.icon_class()></i>
                                <span class="toast__message">{toast.message}</span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
