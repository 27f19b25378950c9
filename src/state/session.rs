//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns one `RwSignal<Session>` and provides it as context. Route guards,
//! the navbar, and pages read it; every change goes through
//! [`Session::apply`] so there is a single update channel.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{Role, User};

/// Error shown when credential validation fails for reasons other than rejection.
pub const CONNECTION_ERROR: &str = "connection error";

/// Resolved authentication status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub user: Option<User>,
    pub is_authenticated: bool,
    /// True while a credential is being verified or a login is in flight.
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Every way the session can change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionAction {
    /// A stored credential is being validated.
    VerifyStarted,
    /// A login or registration request was submitted.
    LoginStarted,
    /// The API accepted a credential and returned the identity.
    SignedIn { user: User },
    /// Login or registration failed (bad password, duplicate email, ...).
    LoginFailed { message: String },
    /// The API rejected the stored credential (401).
    Rejected { message: String },
    /// Validation could not reach the API.
    ConnectionFailed,
    SignedOut,
}

impl Session {
    /// Session to render before any remote call completes.
    ///
    /// With a stored credential the session starts in the loading state so
    /// protected views wait instead of flashing a logged-out screen.
    pub fn initial(has_credential: bool) -> Self {
        Self { is_loading: has_credential, ..Self::default() }
    }

    pub fn apply(&mut self, action: SessionAction) {
        match action {
            SessionAction::VerifyStarted | SessionAction::LoginStarted => {
                self.is_loading = true;
                self.error = None;
            }
            SessionAction::SignedIn { user } => {
                *self = Self { user: Some(user), is_authenticated: true, is_loading: false, error: None };
            }
            SessionAction::LoginFailed { message } | SessionAction::Rejected { message } => {
                *self = Self { error: Some(message), ..Self::default() };
            }
            SessionAction::ConnectionFailed => {
                *self = Self { error: Some(CONNECTION_ERROR.to_owned()), ..Self::default() };
            }
            SessionAction::SignedOut => *self = Self::default(),
        }
    }

    /// Role of the signed-in user, if any.
    pub fn role(&self) -> Option<Role> {
        self.current_user().map(|u| u.role)
    }

    /// The user, but only once the session is authenticated.
    pub fn current_user(&self) -> Option<&User> {
        if self.is_authenticated { self.user.as_ref() } else { None }
    }

    pub fn is_librarian(&self) -> bool {
        self.role() == Some(Role::Librarian)
    }

    pub fn is_student(&self) -> bool {
        self.role() == Some(Role::Student)
    }
}
