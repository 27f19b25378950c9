//! Librarian user management: list, edit links, delete.

use leptos::prelude::*;

use crate::components::loading::{ErrorBanner, Loading};
use crate::config::ClientConfig;
use crate::net::types::User;
use crate::state::session::Session;
use crate::state::users::UsersState;

#[component]
pub fn UsersPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let session = expect_context::<RwSignal<Session>>();
    let users = expect_context::<RwSignal<UsersState>>();

    load_users(&config, session, users);

    let action_error = RwSignal::new(None::<String>);
    let on_delete = Callback::new(move |user: User| {
        let prompt = format!("Delete {}? This cannot be undone.", user.full_name());
        if super::confirm(&prompt) {
            remove_user(config.clone(), session, users, action_error, user.id);
        }
    });

    let error = Signal::derive(move || action_error.get().or_else(|| users.with(|u| u.error.clone())));
    let own_id = move || session.with(|s| s.current_user().map(|u| u.id.clone()));

    view! {
        <div class="users-page">
            <header class="users-page__header">
                <h1>"Users"</h1>
                <a class="button" href="/users/new">"Add user"</a>
            </header>
            <ErrorBanner message=error/>
            <Show
                when=move || !users.with(|u| u.loading)
                fallback=|| view! { <Loading label="Loading users..."/> }
            >
                <table class="user-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Role"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let own_id = own_id();
                            users
                                .get()
                                .items
                                .into_iter()
                                .map(|user| {
                                    let is_self = own_id.as_deref() == Some(user.id.as_str());
                                    view! { <UserRow user=user is_self=is_self on_delete=on_delete/> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}

#[component]
fn UserRow(user: User, is_self: bool, on_delete: Callback<User>) -> impl IntoView {
    let edit_href = format!("/users/{}/edit", user.id);
    let name = user.full_name();
    let email = user.email.clone();
    let role = user.role.label();
    let delete_title = if is_self { "You can't delete your own account" } else { "Delete this account" };

    view! {
        <tr class="user-row">
            <td>{name}</td>
            <td>{email}</td>
            <td>{role}</td>
            <td class="user-row__actions">
                <a href=edit_href>"Edit"</a>
                <button
                    class="button button--danger"
                    disabled=is_self
                    title=delete_title
                    on:click=move |_| on_delete.run(user.clone())
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

fn load_users(config: &ClientConfig, session: RwSignal<Session>, users: RwSignal<UsersState>) {
    users.update(UsersState::begin_fetch);
    #[cfg(feature = "csr")]
    {
        let config = config.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::list_users(&config)
                .await
                .map_err(|err| super::report_failure(session, &err));
            users.update(|u| u.finish_fetch(result));
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = (config, session);
}

fn remove_user(
    config: ClientConfig,
    session: RwSignal<Session>,
    users: RwSignal<UsersState>,
    error: RwSignal<Option<String>>,
    id: String,
) {
    error.set(None);
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::api::delete_user(&config, &id).await {
            Ok(()) => {
                log::info!("deleted user {id}");
                users.update(|u| u.remove(&id));
            }
            Err(err) => error.set(Some(super::report_failure(session, &err))),
        }
    });
    #[cfg(not(feature = "csr"))]
    let _ = (config, session, users, id);
}
