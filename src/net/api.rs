//! REST API helpers for the library service.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`, with the stored
//! bearer credential attached to every request.
//! Native builds: stubs returning [`ApiError::Transport`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every non-2xx response becomes an [`ApiError`]. A 401 erases the stored
//! credential before the error reaches the caller, whichever request hit it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    AuthResponse, Book, BookInput, Checkout, CheckoutRequest, LoginRequest, RegisterRequest, ReturnRequest, User,
    UserInput, UserPatch,
};
use crate::config::ClientConfig;
use crate::state::bootstrap::CredentialValidator;
use crate::state::search::SearchFilters;
#[cfg(feature = "csr")]
use crate::util::credential::{BrowserCredentialStore, CredentialStore};

#[cfg(not(feature = "csr"))]
const UNAVAILABLE: &str = "not available outside the browser";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

fn book_path(id: &str) -> String {
    format!("/books/{id}")
}

fn user_path(id: &str) -> String {
    format!("/users/{id}")
}

#[cfg(any(test, feature = "csr"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// `POST /auth/login`.
pub async fn login(cfg: &ClientConfig, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    send_json(cfg, Verb::Post, "/auth/login", request, None).await
}

/// `POST /auth/register`.
pub async fn register(cfg: &ClientConfig, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    send_json(cfg, Verb::Post, "/auth/register", request, None).await
}

/// `GET /auth/me` with an explicit credential.
pub async fn validate_credential(cfg: &ClientConfig, token: &str) -> Result<AuthResponse, ApiError> {
    get_json(cfg, "/auth/me", &[], Some(token.to_owned())).await
}

/// `GET /books`, narrowed by every constrained filter.
pub async fn list_books(cfg: &ClientConfig, filters: &SearchFilters) -> Result<Vec<Book>, ApiError> {
    get_json(cfg, "/books", &filters.query_pairs(), stored_token()).await
}

pub async fn get_book(cfg: &ClientConfig, id: &str) -> Result<Book, ApiError> {
    get_json(cfg, &book_path(id), &[], stored_token()).await
}

pub async fn create_book(cfg: &ClientConfig, input: &BookInput) -> Result<Book, ApiError> {
    send_json(cfg, Verb::Post, "/books", input, stored_token()).await
}

pub async fn update_book(cfg: &ClientConfig, id: &str, input: &BookInput) -> Result<Book, ApiError> {
    send_json(cfg, Verb::Put, &book_path(id), input, stored_token()).await
}

pub async fn delete_book(cfg: &ClientConfig, id: &str) -> Result<(), ApiError> {
    delete(cfg, &book_path(id)).await
}

/// `GET /checkouts` (librarian only).
pub async fn list_checkouts(cfg: &ClientConfig) -> Result<Vec<Checkout>, ApiError> {
    get_json(cfg, "/checkouts", &[], stored_token()).await
}

/// `GET /checkouts/me` for the signed-in student.
pub async fn my_checkouts(cfg: &ClientConfig) -> Result<Vec<Checkout>, ApiError> {
    get_json(cfg, "/checkouts/me", &[], stored_token()).await
}

pub async fn checkout_book(cfg: &ClientConfig, book_id: &str) -> Result<Checkout, ApiError> {
    let request = CheckoutRequest { book: book_id.to_owned() };
    send_json(cfg, Verb::Post, "/checkouts", &request, stored_token()).await
}

pub async fn return_book(cfg: &ClientConfig, checkout_id: &str) -> Result<Checkout, ApiError> {
    let request = ReturnRequest { checkout_id: checkout_id.to_owned() };
    send_json(cfg, Verb::Post, "/checkouts/return", &request, stored_token()).await
}

pub async fn list_users(cfg: &ClientConfig) -> Result<Vec<User>, ApiError> {
    get_json(cfg, "/users", &[], stored_token()).await
}

pub async fn get_user(cfg: &ClientConfig, id: &str) -> Result<User, ApiError> {
    get_json(cfg, &user_path(id), &[], stored_token()).await
}

pub async fn create_user(cfg: &ClientConfig, input: &UserInput) -> Result<User, ApiError> {
    send_json(cfg, Verb::Post, "/users", input, stored_token()).await
}

pub async fn update_user(cfg: &ClientConfig, id: &str, patch: &UserPatch) -> Result<User, ApiError> {
    send_json(cfg, Verb::Put, &user_path(id), patch, stored_token()).await
}

pub async fn delete_user(cfg: &ClientConfig, id: &str) -> Result<(), ApiError> {
    delete(cfg, &user_path(id)).await
}

/// Validates stored credentials through `GET /auth/me`.
#[derive(Clone, Debug)]
pub struct RemoteValidator {
    config: ClientConfig,
}

impl RemoteValidator {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

impl CredentialValidator for RemoteValidator {
    async fn validate(&self, token: &str) -> Result<AuthResponse, ApiError> {
        validate_credential(&self.config, token).await
    }
}

fn stored_token() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        BrowserCredentialStore.load()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

async fn get_json<T: DeserializeOwned>(
    cfg: &ClientConfig,
    path: &str,
    query: &[(&str, &str)],
    token: Option<String>,
) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = builder(Verb::Get, &cfg.endpoint(path), token)
            .query(query.iter().copied())
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode(execute(request).await?).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (cfg, path, query, token, Verb::Get);
        Err(ApiError::Transport(UNAVAILABLE.to_owned()))
    }
}

async fn send_json<T: DeserializeOwned, B: Serialize>(
    cfg: &ClientConfig,
    verb: Verb,
    path: &str,
    body: &B,
    token: Option<String>,
) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = builder(verb, &cfg.endpoint(path), token)
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode(execute(request).await?).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (cfg, verb, path, body, token);
        Err(ApiError::Transport(UNAVAILABLE.to_owned()))
    }
}

async fn delete(cfg: &ClientConfig, path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = builder(Verb::Delete, &cfg.endpoint(path), stored_token())
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        execute(request).await.map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (cfg, path, Verb::Delete);
        Err(ApiError::Transport(UNAVAILABLE.to_owned()))
    }
}

#[cfg(feature = "csr")]
fn builder(verb: Verb, url: &str, token: Option<String>) -> gloo_net::http::RequestBuilder {
    use gloo_net::http::Request;

    let builder = match verb {
        Verb::Get => Request::get(url),
        Verb::Post => Request::post(url),
        Verb::Put => Request::put(url),
        Verb::Delete => Request::delete(url),
    };
    match token {
        Some(token) => builder.header("Authorization", &bearer(&token)),
        None => builder,
    }
}

#[cfg(feature = "csr")]
async fn execute(request: gloo_net::http::Request) -> Result<gloo_net::http::Response, ApiError> {
    let resp = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.json::<super::types::ApiErrorBody>().await.ok();
    let err = ApiError::from_status(status, body);
    if err.is_auth_rejected() {
        log::warn!("{} rejected the credential; erasing it", resp.url());
        BrowserCredentialStore.erase();
    }
    Err(err)
}

#[cfg(feature = "csr")]
async fn decode<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}
