//! Shown when a signed-in user opens a page reserved for the other role.

use leptos::prelude::*;

use crate::state::session::Session;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let role = move || session.with(|s| s.role().map(|r| r.label()).unwrap_or("Guest"));

    view! {
        <div class="notice-page">
            <h1>"Access denied"</h1>
            <p>"Your account (" {role} ") can't open that page."</p>
            <a class="button" href="/books">"Back to the catalog"</a>
        </div>
    }
}
