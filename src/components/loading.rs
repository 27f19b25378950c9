//! Placeholder shown while a request or credential check is in flight.

use leptos::prelude::*;

#[component]
pub fn Loading(#[prop(default = "Loading...")] label: &'static str) -> impl IntoView {
    view! {
        <div class="loading" role="status">
            <span class="loading__spinner"></span>
            <span class="loading__label">{label}</span>
        </div>
    }
}

/// Inline error banner; renders nothing while `message` is `None`.
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            <p class="error-banner" role="alert">{move || message.get().unwrap_or_default()}</p>
        </Show>
    }
}
