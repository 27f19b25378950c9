//! Top navigation bar with role-aware links and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::books::BooksState;
use crate::state::bootstrap::sign_out;
use crate::state::checkouts::CheckoutsState;
use crate::state::session::Session;
use crate::state::users::UsersState;
use crate::util::auth::LOGIN_PATH;
use crate::util::credential::BrowserCredentialStore;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let books = expect_context::<RwSignal<BooksState>>();
    let checkouts = expect_context::<RwSignal<CheckoutsState>>();
    let users = expect_context::<RwSignal<UsersState>>();
    let navigate = use_navigate();

    let on_logout = move |_: leptos::ev::MouseEvent| {
        let action = sign_out(&BrowserCredentialStore);
        session.update(|s| s.apply(action));
        books.set(BooksState::default());
        checkouts.set(CheckoutsState::default());
        users.set(UsersState::default());
        log::info!("signed out");
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    let is_authenticated = move || session.with(|s| s.is_authenticated);
    let is_student = move || session.with(Session::is_student);
    let is_librarian = move || session.with(Session::is_librarian);
    let user_label = move || {
        session.with(|s| {
            s.current_user()
                .map(|u| format!("{} ({})", u.full_name(), u.role.label()))
                .unwrap_or_default()
        })
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/books">"Library"</a>
            <Show
                when=is_authenticated
                fallback=|| {
                    view! {
                        <div class="navbar__links">
                            <a href="/login">"Login"</a>
                            <a href="/register">"Register"</a>
                        </div>
                    }
                }
            >
                <div class="navbar__links">
                    <a href="/books">"Books"</a>
                    <Show when=is_student>
                        <a href="/my-checkouts">"My Checkouts"</a>
                    </Show>
                    <Show when=is_librarian>
                        <a href="/books/new">"Add Book"</a>
                        <a href="/checkouts">"All Checkouts"</a>
                        <a href="/users">"Users"</a>
                    </Show>
                </div>
            </Show>
            <div class="navbar__account" class:navbar__account--hidden=move || !is_authenticated()>
                <span class="navbar__user">{user_label}</span>
                <button class="navbar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </nav>
    }
}
