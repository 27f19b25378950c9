//! Login page: email + password sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submitting dispatches `LoginStarted` and then either `SignedIn` or
//! `LoginFailed` into the shared session. Leaving the page is driven by the
//! session itself: once it has a user, the page navigates to the remembered
//! return path (or `/books`).

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::loading::ErrorBanner;
use crate::config::ClientConfig;
use crate::net::types::LoginRequest;
use crate::state::session::{Session, SessionAction};
use crate::util::auth::{ReturnTo, post_login_path};
use crate::util::validate::validate_login;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let return_to = expect_context::<RwSignal<ReturnTo>>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let Some(role) = session.with(Session::role) else {
            return;
        };
        let target = post_login_path(return_to.get_untracked().0.as_deref(), role);
        return_to.set(ReturnTo::default());
        navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.with_untracked(|s| s.is_loading) {
            return;
        }
        match validate_login(&email.get_untracked(), &password.get_untracked()) {
            Ok(request) => {
                form_error.set(None);
                session.update(|s| s.apply(SessionAction::LoginStarted));
                submit_login(config.clone(), session, request);
            }
            Err(message) => form_error.set(Some(message.to_owned())),
        }
    };

    let busy = move || session.with(|s| s.is_loading);
    let error = Signal::derive(move || form_error.get().or_else(|| session.with(|s| s.error.clone())));

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <p class="auth-card__subtitle">"Library catalog and lending"</p>
                <ErrorBanner message=error/>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="auth-button" type="submit" disabled=busy>
                        {move || if busy() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "No account yet? "
                    <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}

fn submit_login(config: ClientConfig, session: RwSignal<Session>, request: LoginRequest) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        use crate::state::bootstrap::accept_auth_response;
        use crate::util::credential::BrowserCredentialStore;

        let action = match crate::net::api::login(&config, &request).await {
            Ok(response) => {
                log::info!("signed in as {}", response.user.email);
                accept_auth_response(&BrowserCredentialStore, response)
            }
            Err(err) => {
                log::warn!("login failed: {err}");
                SessionAction::LoginFailed { message: err.to_string() }
            }
        };
        session.update(|s| s.apply(action));
    });
    #[cfg(not(feature = "csr"))]
    let _ = (config, session, request);
}
