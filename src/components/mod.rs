//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (navigation, route guards, catalog cards)
//! while reading shared state from Leptos context providers.

pub mod book_card;
pub mod checkout_row;
pub mod loading;
pub mod navbar;
pub mod protected;
