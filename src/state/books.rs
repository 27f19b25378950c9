//! Catalog list state shared by the book list and detail pages.
//!
//! DESIGN
//! ======
//! `filters` outlives the book list page so returning to `/books` restores
//! the last search. Fetches are sequenced: only the response to the most
//! recently issued request may replace `items`, so a slow stale search can't
//! overwrite a newer one.

#[cfg(test)]
#[path = "books_test.rs"]
mod books_test;

use crate::net::types::Book;
use crate::state::search::{SearchField, SearchFilters};

#[derive(Clone, Debug, Default)]
pub struct BooksState {
    pub items: Vec<Book>,
    pub selected: Option<Book>,
    pub loading: bool,
    pub error: Option<String>,
    pub filters: SearchFilters,
    latest_request: u64,
}

impl BooksState {
    /// Mark a fetch as in flight and return its ticket.
    pub fn begin_fetch(&mut self) -> u64 {
        self.latest_request += 1;
        self.loading = true;
        self.error = None;
        self.latest_request
    }

    /// Apply a fetch result if `ticket` is still the latest request.
    ///
    /// Returns `false` when the result was dropped as stale.
    pub fn finish_fetch(&mut self, ticket: u64, result: Result<Vec<Book>, String>) -> bool {
        if ticket != self.latest_request {
            log::debug!("dropping stale book list response {ticket} (latest {})", self.latest_request);
            return false;
        }
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(message) => self.error = Some(message),
        }
        true
    }

    pub fn set_filter(&mut self, field: SearchField, value: String) {
        self.filters.set(field, value);
    }

    pub fn clear_filters(&mut self) {
        self.filters = SearchFilters::default();
    }

    /// Replace a book in the list and selection after an edit or checkout.
    pub fn upsert(&mut self, book: Book) {
        if let Some(existing) = self.items.iter_mut().find(|b| b.id == book.id) {
            *existing = book.clone();
        }
        if self.selected.as_ref().is_some_and(|b| b.id == book.id) {
            self.selected = Some(book);
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.items.retain(|b| b.id != id);
        if self.selected.as_ref().is_some_and(|b| b.id == id) {
            self.selected = None;
        }
    }
}
