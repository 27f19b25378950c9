//! Shared route-gating helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same decision to the single
//! `RwSignal<Session>`: wait while loading, send anonymous users to `/login`,
//! and send users with the wrong role to `/unauthorized`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::Role;
use crate::state::session::Session;

pub const HOME_PATH: &str = "/books";
pub const LOGIN_PATH: &str = "/login";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

const STUDENT_ONLY_PREFIXES: &[&str] = &["/my-checkouts"];
const LIBRARIAN_ONLY_PREFIXES: &[&str] = &["/checkouts", "/users", "/books/new"];

/// Outcome of checking a session against a route's role requirement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    /// Credential verification is still running; render a placeholder.
    Pending,
    Granted,
    RedirectLogin,
    Unauthorized,
}

/// Path the login page should return to after signing in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReturnTo(pub Option<String>);

/// Decide access for a route. An empty `allowed` list admits any role.
pub fn route_access(session: &Session, allowed: &[Role]) -> RouteAccess {
    if session.is_loading {
        return RouteAccess::Pending;
    }
    let Some(role) = session.role() else {
        return RouteAccess::RedirectLogin;
    };
    if allowed.is_empty() || allowed.contains(&role) {
        RouteAccess::Granted
    } else {
        RouteAccess::Unauthorized
    }
}

/// Whether `path` only makes sense for one role.
pub fn is_role_specific_path(path: &str) -> bool {
    path.starts_with("/my-checkouts")
        || path.starts_with("/checkouts")
        || path.starts_with("/users")
        || path.contains("/edit")
        || path.contains("/new")
}

/// Path to remember when redirecting an anonymous user to login.
///
/// Role-specific pages are not remembered so a different account signing in
/// doesn't land on a page it can't open.
pub fn remembered_path(path: &str) -> Option<String> {
    if is_role_specific_path(path) || path == LOGIN_PATH || path == UNAUTHORIZED_PATH {
        None
    } else {
        Some(path.to_owned())
    }
}

/// Where to go after a successful login.
pub fn post_login_path(from: Option<&str>, role: Role) -> String {
    let Some(from) = from.filter(|p| *p != LOGIN_PATH && *p != UNAUTHORIZED_PATH) else {
        return HOME_PATH.to_owned();
    };
    let blocked = match role {
        Role::Student => LIBRARIAN_ONLY_PREFIXES,
        Role::Librarian => STUDENT_ONLY_PREFIXES,
    };
    if blocked.iter().any(|prefix| from.starts_with(prefix)) {
        HOME_PATH.to_owned()
    } else {
        from.to_owned()
    }
}

/// Navigate away whenever the session resolves to a denied state.
pub fn install_route_guard<F>(
    session: RwSignal<Session>,
    allowed: &'static [Role],
    path: Memo<String>,
    return_to: RwSignal<ReturnTo>,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let access = session.with(|s| route_access(s, allowed));
        let replace = NavigateOptions { replace: true, ..NavigateOptions::default() };
        match access {
            RouteAccess::Pending | RouteAccess::Granted => {}
            RouteAccess::RedirectLogin => {
                return_to.set(ReturnTo(remembered_path(&path.get_untracked())));
                navigate(LOGIN_PATH, replace);
            }
            RouteAccess::Unauthorized => navigate(UNAUTHORIZED_PATH, replace),
        }
    });
}
