//! Route guard wrapper for authenticated pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps a route's page. While the session is still verifying a stored
//! credential it shows a placeholder; once resolved it either renders the
//! page or redirects through `install_route_guard`.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::loading::Loading;
use crate::net::types::Role;
use crate::state::session::Session;
use crate::util::auth::{ReturnTo, RouteAccess, install_route_guard, route_access};

/// Render `children` only for an authenticated session whose role is in
/// `roles` (any role when empty).
#[component]
pub fn Protected(#[prop(default = &[])] roles: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let return_to = expect_context::<RwSignal<ReturnTo>>();
    let location = use_location();
    install_route_guard(session, roles, location.pathname, return_to, use_navigate());

    let access = move || session.with(|s| route_access(s, roles));

    view! {
        <Show
            when=move || access() == RouteAccess::Granted
            fallback=move || {
                view! {
                    <Show when=move || access() == RouteAccess::Pending>
                        <Loading label="Checking your session..."/>
                    </Show>
                }
            }
        >
            {children()}
        </Show>
    }
}
