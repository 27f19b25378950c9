//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::protected::Protected;
use crate::config::ClientConfig;
use crate::net::api::RemoteValidator;
use crate::net::types::Role;
use crate::pages::{
    book_detail::BookDetailPage, book_form::BookFormPage, books::BooksPage, checkouts::CheckoutsPage,
    login::LoginPage, my_checkouts::MyCheckoutsPage, register::RegisterPage, unauthorized::UnauthorizedPage,
    user_form::UserFormPage, users::UsersPage,
};
use crate::state::{
    books::BooksState, bootstrap::Bootstrapper, checkouts::CheckoutsState, users::UsersState,
};
use crate::util::auth::{HOME_PATH, ReturnTo};
use crate::util::credential::BrowserCredentialStore;

const STUDENT_ONLY: &[Role] = &[Role::Student];
const LIBRARIAN_ONLY: &[Role] = &[Role::Librarian];

/// Root application component.
///
/// Resolves the stored credential, provides all shared state contexts, and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let validator = RemoteValidator::new(config.clone());
    let session = RwSignal::new(Bootstrapper::new(&BrowserCredentialStore, &validator).start());

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let store = BrowserCredentialStore;
        Bootstrapper::new(&store, &validator)
            .run(|action| session.update(|s| s.apply(action)))
            .await;
    });

    provide_context(config);
    provide_context(session);
    provide_context(RwSignal::new(BooksState::default()));
    provide_context(RwSignal::new(CheckoutsState::default()));
    provide_context(RwSignal::new(UsersState::default()));
    provide_context(RwSignal::new(ReturnTo::default()));

    view! {
        <Title text="Library"/>

        <Router>
            <Navbar/>
            <main class="page">
                <Routes fallback=|| view! { <Redirect path=HOME_PATH/> }>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=HOME_PATH/> }/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>

                    <Route
                        path=StaticSegment("books")
                        view=|| view! { <Protected><BooksPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("books"), StaticSegment("new"))
                        view=|| view! { <Protected roles=LIBRARIAN_ONLY><BookFormPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("books"), ParamSegment("id"), StaticSegment("edit"))
                        view=|| view! { <Protected roles=LIBRARIAN_ONLY><BookFormPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("books"), ParamSegment("id"))
                        view=|| view! { <Protected><BookDetailPage/></Protected> }
                    />

                    <Route
                        path=StaticSegment("my-checkouts")
                        view=|| view! { <Protected roles=STUDENT_ONLY><MyCheckoutsPage/></Protected> }
                    />
                    <Route
                        path=StaticSegment("checkouts")
                        view=|| view! { <Protected roles=LIBRARIAN_ONLY><CheckoutsPage/></Protected> }
                    />

                    <Route
                        path=StaticSegment("users")
                        view=|| view! { <Protected roles=LIBRARIAN_ONLY><UsersPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("users"), StaticSegment("new"))
                        view=|| view! { <Protected roles=LIBRARIAN_ONLY><UserFormPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("users"), ParamSegment("id"), StaticSegment("edit"))
                        view=|| view! { <Protected roles=LIBRARIAN_ONLY><UserFormPage/></Protected> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
