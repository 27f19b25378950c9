//! Durable storage for the bearer credential.
//!
//! SYSTEM CONTEXT
//! ==============
//! Exactly one credential slot exists (`localStorage["token"]`). The API layer
//! reads it for every request, the bootstrapper validates it at startup, and
//! any 401 response erases it.

#[cfg(test)]
#[path = "credential_test.rs"]
mod credential_test;

#[cfg(test)]
use std::cell::RefCell;

/// Storage key holding the current bearer token.
pub const CREDENTIAL_KEY: &str = "token";

/// A single-slot credential store.
pub trait CredentialStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn erase(&self);
}

/// `localStorage`-backed store used in the browser.
///
/// Off the browser every call is a no-op and `load` yields `None`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserCredentialStore;

impl CredentialStore for BrowserCredentialStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage()?;
            storage
                .get_item(CREDENTIAL_KEY)
                .ok()
                .flatten()
                .filter(|t| !t.is_empty())
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            if storage.set_item(CREDENTIAL_KEY, token).is_err() {
                log::warn!("failed to persist credential");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn erase(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(CREDENTIAL_KEY);
            }
        }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Drop per-tab navigation state on logout.
pub fn clear_session_storage() {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten()) {
            let _ = storage.clear();
        }
    }
}

/// In-memory store for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    slot: RefCell<Option<String>>,
}

#[cfg(test)]
impl MemoryCredentialStore {
    pub fn with_token(token: &str) -> Self {
        Self { slot: RefCell::new(Some(token.to_owned())) }
    }
}

#[cfg(test)]
impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_owned());
    }

    fn erase(&self) {
        *self.slot.borrow_mut() = None;
    }
}
