//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, timers,
//! navigation) from page and component logic to improve reuse and
//! testability.

pub mod auth;
pub mod credential;
pub mod debounce;
pub mod validate;
