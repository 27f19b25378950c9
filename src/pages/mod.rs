//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, form state,
//! navigation) and delegates shared rendering to `components`.

pub mod book_detail;
pub mod book_form;
pub mod books;
pub mod checkouts;
pub mod login;
pub mod my_checkouts;
pub mod register;
pub mod unauthorized;
pub mod user_form;
pub mod users;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::error::ApiError;
use crate::state::checkouts::CheckoutsState;
use crate::state::session::{Session, SessionAction};

/// Turn a failed request into the message a page shows.
///
/// A 401 also de-authenticates the session so the route guard sends the user
/// back to `/login`; the credential itself was already erased by `net::api`.
pub fn report_failure(session: RwSignal<Session>, err: &ApiError) -> String {
    report_form_failure(session, err, &[])
}

/// Like [`report_failure`], but names the first form field the server
/// rejected. `fields` pairs wire names with labels.
pub fn report_form_failure(session: RwSignal<Session>, err: &ApiError, fields: &[(&str, &str)]) -> String {
    if err.is_auth_rejected() {
        session.update(|s| s.apply(SessionAction::Rejected { message: err.to_string() }));
    }
    err.form_message(fields)
}

/// Browser confirmation dialog; always declines off-browser.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window().is_some_and(|w| w.confirm_with_message(message).unwrap_or(false))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}

/// Mark a checkout returned and update the shared list.
pub fn return_checkout(
    config: ClientConfig,
    session: RwSignal<Session>,
    checkouts: RwSignal<CheckoutsState>,
    error: RwSignal<Option<String>>,
    checkout_id: String,
) {
    error.set(None);
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::api::return_book(&config, &checkout_id).await {
            Ok(checkout) => {
                log::info!("returned checkout {checkout_id}");
                checkouts.update(|c| c.mark_returned(checkout));
            }
            Err(err) => error.set(Some(report_failure(session, &err))),
        }
    });
    #[cfg(not(feature = "csr"))]
    let _ = (config, session, checkouts, checkout_id);
}
