//! Self-service registration page. New accounts are created as students.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::loading::ErrorBanner;
use crate::config::ClientConfig;
use crate::net::types::RegisterRequest;
use crate::state::session::{Session, SessionAction};
use crate::util::auth::HOME_PATH;
use crate::util::validate::validate_register;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);

    Effect::new(move || {
        if session.with(|s| s.is_authenticated) {
            navigate(HOME_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.with_untracked(|s| s.is_loading) {
            return;
        }
        let validated = validate_register(
            &first_name.get_untracked(),
            &last_name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
        );
        match validated {
            Ok(request) => {
                form_error.set(None);
                session.update(|s| s.apply(SessionAction::LoginStarted));
                submit_register(config.clone(), session, request);
            }
            Err(message) => form_error.set(Some(message.to_owned())),
        }
    };

    let busy = move || session.with(|s| s.is_loading);
    let error = Signal::derive(move || form_error.get().or_else(|| session.with(|s| s.error.clone())));
    let text_input = move |label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <label class="auth-form__label">
                {label}
                <input
                    class="auth-input"
                    type=kind
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create an account"</h1>
                <ErrorBanner message=error/>
                <form class="auth-form" on:submit=on_submit>
                    {text_input("First name", "text", first_name)}
                    {text_input("Last name", "text", last_name)}
                    {text_input("Email", "email", email)}
                    {text_input("Password", "password", password)}
                    <button class="auth-button" type="submit" disabled=busy>
                        {move || if busy() { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}

fn submit_register(config: ClientConfig, session: RwSignal<Session>, request: RegisterRequest) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        use crate::state::bootstrap::accept_auth_response;
        use crate::util::credential::BrowserCredentialStore;

        let action = match crate::net::api::register(&config, &request).await {
            Ok(response) => {
                log::info!("registered {}", response.user.email);
                accept_auth_response(&BrowserCredentialStore, response)
            }
            Err(err) => {
                log::warn!("registration failed: {err}");
                let message = err.form_message(crate::util::validate::REGISTER_FIELDS);
                SessionAction::LoginFailed { message }
            }
        };
        session.update(|s| s.apply(action));
    });
    #[cfg(not(feature = "csr"))]
    let _ = (config, session, request);
}
