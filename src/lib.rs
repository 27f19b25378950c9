//! # lending-client
//!
//! Leptos + WASM front-end for a library catalog and lending service.
//! Students browse and borrow books; librarians manage the catalog, users,
//! and all checkouts. Everything talks to the REST API in `net::api`.
//!
//! The two pieces with real behavior are the session bootstrapper
//! (`state::bootstrap`), which resolves a stored credential before protected
//! routes render, and the debounced search controller (`state::search`),
//! which turns filter edits into remote catalog searches.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
