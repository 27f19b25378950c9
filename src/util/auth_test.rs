use super::*;
use crate::net::types::User;
use crate::state::session::SessionAction;

fn signed_in(role: Role) -> Session {
    let mut session = Session::default();
    session.apply(SessionAction::SignedIn {
        user: User {
            id: "u1".to_owned(),
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
            role,
            created_at: None,
            updated_at: None,
        },
    });
    session
}

// =============================================================
// route_access
// =============================================================

#[test]
fn loading_session_is_pending_even_for_restricted_routes() {
    let session = Session::initial(true);
    assert_eq!(route_access(&session, &[]), RouteAccess::Pending);
    assert_eq!(route_access(&session, &[Role::Librarian]), RouteAccess::Pending);
}

#[test]
fn anonymous_session_redirects_to_login() {
    assert_eq!(route_access(&Session::default(), &[]), RouteAccess::RedirectLogin);
}

#[test]
fn rejected_session_redirects_to_login() {
    let mut session = signed_in(Role::Student);
    session.apply(SessionAction::Rejected { message: "expired".to_owned() });
    assert_eq!(route_access(&session, &[]), RouteAccess::RedirectLogin);
}

#[test]
fn any_role_is_granted_open_routes() {
    assert_eq!(route_access(&signed_in(Role::Student), &[]), RouteAccess::Granted);
    assert_eq!(route_access(&signed_in(Role::Librarian), &[]), RouteAccess::Granted);
}

#[test]
fn wrong_role_is_unauthorized() {
    assert_eq!(route_access(&signed_in(Role::Student), &[Role::Librarian]), RouteAccess::Unauthorized);
    assert_eq!(route_access(&signed_in(Role::Librarian), &[Role::Student]), RouteAccess::Unauthorized);
    assert_eq!(route_access(&signed_in(Role::Librarian), &[Role::Librarian]), RouteAccess::Granted);
}

// =============================================================
// Return paths
// =============================================================

#[test]
fn remembered_path_skips_role_specific_pages() {
    assert_eq!(remembered_path("/books/b1"), Some("/books/b1".to_owned()));
    assert_eq!(remembered_path("/books/b1/edit"), None);
    assert_eq!(remembered_path("/books/new"), None);
    assert_eq!(remembered_path("/my-checkouts"), None);
    assert_eq!(remembered_path("/users"), None);
    assert_eq!(remembered_path("/login"), None);
}

#[test]
fn post_login_defaults_to_home() {
    assert_eq!(post_login_path(None, Role::Student), HOME_PATH);
    assert_eq!(post_login_path(Some("/login"), Role::Librarian), HOME_PATH);
    assert_eq!(post_login_path(Some("/unauthorized"), Role::Student), HOME_PATH);
}

#[test]
fn post_login_returns_to_allowed_page() {
    assert_eq!(post_login_path(Some("/books/b1"), Role::Student), "/books/b1");
    assert_eq!(post_login_path(Some("/checkouts"), Role::Librarian), "/checkouts");
}

#[test]
fn post_login_skips_pages_of_the_other_role() {
    assert_eq!(post_login_path(Some("/checkouts"), Role::Student), HOME_PATH);
    assert_eq!(post_login_path(Some("/my-checkouts"), Role::Librarian), HOME_PATH);
}
