//! Librarian form for creating (`/users/new`) or editing (`/users/:id/edit`)
//! an account.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::loading::{ErrorBanner, Loading};
use crate::config::ClientConfig;
use crate::net::types::{Role, User, UserInput, UserPatch};
use crate::state::session::Session;
use crate::state::users::UsersState;
use crate::util::validate::{validate_new_user, validate_user_edit};

#[derive(Clone, Copy)]
struct UserFields {
    first_name: RwSignal<String>,
    last_name: RwSignal<String>,
    email: RwSignal<String>,
    password: RwSignal<String>,
    role: RwSignal<String>,
}

impl UserFields {
    fn new() -> Self {
        Self {
            first_name: RwSignal::new(String::new()),
            last_name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            role: RwSignal::new(Role::Student.as_str().to_owned()),
        }
    }

    fn fill(self, user: &User) {
        self.first_name.set(user.first_name.clone());
        self.last_name.set(user.last_name.clone());
        self.email.set(user.email.clone());
        self.password.set(String::new());
        self.role.set(user.role.as_str().to_owned());
    }
}

#[cfg_attr(not(feature = "csr"), allow(dead_code))]
enum UserSubmission {
    Create(UserInput),
    Update { id: String, patch: UserPatch },
}

#[component]
pub fn UserFormPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let session = expect_context::<RwSignal<Session>>();
    let users = expect_context::<RwSignal<UsersState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    let fields = UserFields::new();
    let loading = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let editing_id = move || params.with(|p| p.get("id"));

    let load_config = config.clone();
    Effect::new(move || {
        if let Some(id) = editing_id() {
            load_for_edit(&load_config, session, fields, loading, error, id);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let first_name = fields.first_name.get_untracked();
        let last_name = fields.last_name.get_untracked();
        let email = fields.email.get_untracked();
        let password = fields.password.get_untracked();
        let role = fields.role.get_untracked();
        let submission = match editing_id() {
            Some(id) => validate_user_edit(&first_name, &last_name, &email, &password, &role)
                .map(|patch| UserSubmission::Update { id, patch }),
            None => validate_new_user(&first_name, &last_name, &email, &password, &role).map(UserSubmission::Create),
        };
        match submission {
            Ok(submission) => {
                error.set(None);
                busy.set(true);
                save_user(config.clone(), session, users, busy, error, submission, navigate.clone());
            }
            Err(message) => error.set(Some(message.to_owned())),
        }
    };

    let is_edit = move || editing_id().is_some();
    let text_input = move |label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <label class="form__label">
                {label}
                <input
                    class="form__input"
                    type=kind
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <div class="form-page">
            <h1>{move || if is_edit() { "Edit user" } else { "Add a user" }}</h1>
            <ErrorBanner message=error/>
            <Show when=move || !loading.get() fallback=|| view! { <Loading label="Loading user..."/> }>
                <form class="form" on:submit=on_submit.clone()>
                    {text_input("First name", "text", fields.first_name)}
                    {text_input("Last name", "text", fields.last_name)}
                    {text_input("Email", "email", fields.email)}
                    <label class="form__label">
                        {move || if is_edit() { "New password (leave blank to keep)" } else { "Password" }}
                        <input
                            class="form__input"
                            type="password"
                            prop:value=move || fields.password.get()
                            on:input=move |ev| fields.password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Role"
                        <select
                            class="form__input"
                            prop:value=move || fields.role.get()
                            on:change=move |ev| fields.role.set(event_target_value(&ev))
                        >
                            <option value=Role::Student.as_str()>{Role::Student.label()}</option>
                            <option value=Role::Librarian.as_str()>{Role::Librarian.label()}</option>
                        </select>
                    </label>
                    <div class="form__actions">
                        <button class="button" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Saving..." } else { "Save" }}
                        </button>
                        <a class="button button--secondary" href="/users">"Cancel"</a>
                    </div>
                </form>
            </Show>
        </div>
    }
}

fn load_for_edit(
    config: &ClientConfig,
    session: RwSignal<Session>,
    fields: UserFields,
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    id: String,
) {
    loading.set(true);
    #[cfg(feature = "csr")]
    {
        let config = config.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::get_user(&config, &id).await {
                Ok(user) => fields.fill(&user),
                Err(err) => error.set(Some(super::report_failure(session, &err))),
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = (config, session, fields, error, id);
}

fn save_user<F>(
    config: ClientConfig,
    session: RwSignal<Session>,
    users: RwSignal<UsersState>,
    busy: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    submission: UserSubmission,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = match &submission {
            UserSubmission::Create(input) => crate::net::api::create_user(&config, input).await,
            UserSubmission::Update { id, patch } => crate::net::api::update_user(&config, id, patch).await,
        };
        busy.set(false);
        match result {
            Ok(user) => {
                log::info!("saved user {}", user.email);
                users.update(|u| u.upsert(user));
                navigate("/users", NavigateOptions::default());
            }
            Err(err) => {
                let message = super::report_form_failure(session, &err, crate::util::validate::USER_FIELDS);
                error.set(Some(message));
            }
        }
    });
    #[cfg(not(feature = "csr"))]
    let _ = (config, session, users, busy, error, submission, navigate);
}
