//! Session bootstrap and credential lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once when the app mounts. A stored credential is validated against
//! the API before protected routes resolve; the outcome is reported as a
//! single [`SessionAction`] for the caller to apply.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here fails past its boundary. A 401 erases the credential; any
//! other failure keeps it so the next page load can retry. Transport errors
//! and 5xx are expected; anything else is logged as an error.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use crate::net::error::ApiError;
use crate::net::types::AuthResponse;
use crate::state::session::{Session, SessionAction};
use crate::util::credential::{CredentialStore, clear_session_storage};

/// Remote "validate credential" operation (`GET /auth/me`).
#[allow(async_fn_in_trait)]
pub trait CredentialValidator {
    async fn validate(&self, token: &str) -> Result<AuthResponse, ApiError>;
}

/// Resolves a stored credential into a [`Session`].
pub struct Bootstrapper<'a, S, V> {
    store: &'a S,
    validator: &'a V,
}

impl<'a, S, V> Bootstrapper<'a, S, V>
where
    S: CredentialStore,
    V: CredentialValidator,
{
    pub fn new(store: &'a S, validator: &'a V) -> Self {
        Self { store, validator }
    }

    /// Synchronous first step: resolved when no credential exists,
    /// loading otherwise.
    pub fn start(&self) -> Session {
        Session::initial(self.store.load().is_some())
    }

    /// Asynchronous second step. Returns `None` when there is nothing to
    /// verify, so the session from [`Self::start`] is already final.
    pub async fn verify(&self) -> Option<SessionAction> {
        let token = self.store.load()?;
        let action = match self.validator.validate(&token).await {
            Ok(response) => {
                log::info!("stored credential accepted for {}", response.user.email);
                refresh_credential(self.store, response)
            }
            Err(err) if err.is_auth_rejected() => {
                log::warn!("stored credential rejected: {err}");
                self.store.erase();
                SessionAction::Rejected { message: err.to_string() }
            }
            Err(err) if err.is_transient() => {
                log::warn!("credential validation failed, keeping credential: {err}");
                SessionAction::ConnectionFailed
            }
            // Only a 401 proves the credential bad; other 4xx and malformed
            // bodies leave it for the next load.
            Err(err) => {
                log::error!("unexpected credential validation response, keeping credential: {err}");
                SessionAction::ConnectionFailed
            }
        };
        Some(action)
    }

    /// Run both steps, reporting each session change through `dispatch`.
    pub async fn run<F>(&self, mut dispatch: F)
    where
        F: FnMut(SessionAction),
    {
        if self.store.load().is_none() {
            return;
        }
        dispatch(SessionAction::VerifyStarted);
        if let Some(action) = self.verify().await {
            dispatch(action);
        }
    }
}

/// Message shown when a login or register response carries no credential.
pub const MISSING_TOKEN_MESSAGE: &str = "sign-in response did not include a session token";

/// Persist the credential from a login or register response.
///
/// Both endpoints must issue a token. Without one nothing is stored and the
/// attempt fails.
pub fn accept_auth_response<S: CredentialStore>(store: &S, response: AuthResponse) -> SessionAction {
    match response.token.as_deref().filter(|t| !t.is_empty()) {
        Some(token) => {
            store.save(token);
            SessionAction::SignedIn { user: response.user }
        }
        None => {
            log::warn!("auth response for {} carried no token", response.user.email);
            SessionAction::LoginFailed { message: MISSING_TOKEN_MESSAGE.to_owned() }
        }
    }
}

/// Apply a `/auth/me` response. A refreshed token replaces the stored one;
/// without one the stored token stays.
fn refresh_credential<S: CredentialStore>(store: &S, response: AuthResponse) -> SessionAction {
    if let Some(token) = response.token.as_deref().filter(|t| !t.is_empty()) {
        store.save(token);
    }
    SessionAction::SignedIn { user: response.user }
}

/// Drop the credential and any per-tab state.
pub fn sign_out<S: CredentialStore>(store: &S) -> SessionAction {
    store.erase();
    clear_session_storage();
    SessionAction::SignedOut
}
