//! Checkout list state for the student and librarian views.

#[cfg(test)]
#[path = "checkouts_test.rs"]
mod checkouts_test;

use crate::net::types::Checkout;

/// Status filter on the librarian's all-checkouts view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CheckoutFilter {
    All,
    #[default]
    Active,
    Returned,
}

impl CheckoutFilter {
    pub const ALL: [Self; 3] = [Self::All, Self::Active, Self::Returned];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Returned => "Returned",
        }
    }

    pub fn admits(self, checkout: &Checkout) -> bool {
        match self {
            Self::All => true,
            Self::Active => !checkout.returned,
            Self::Returned => checkout.returned,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct CheckoutsState {
    pub items: Vec<Checkout>,
    pub loading: bool,
    pub error: Option<String>,
}

impl CheckoutsState {
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_fetch(&mut self, result: Result<Vec<Checkout>, String>) {
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(message) => self.error = Some(message),
        }
    }

    pub fn add(&mut self, checkout: Checkout) {
        self.items.push(checkout);
    }

    /// Apply a return. Only the return fields are copied so populated
    /// book/user refs survive a response that sends bare ids.
    pub fn mark_returned(&mut self, checkout: Checkout) {
        if let Some(existing) = self.items.iter_mut().find(|c| c.id == checkout.id) {
            existing.returned = checkout.returned;
            existing.return_date = checkout.return_date;
            existing.updated_at = checkout.updated_at;
        }
    }

    /// Checkouts not yet returned.
    pub fn active(&self) -> Vec<&Checkout> {
        self.items.iter().filter(|c| !c.returned).collect()
    }

    /// Checkouts already returned.
    pub fn history(&self) -> Vec<&Checkout> {
        self.items.iter().filter(|c| c.returned).collect()
    }

    pub fn filtered(&self, filter: CheckoutFilter) -> Vec<&Checkout> {
        self.items.iter().filter(|c| filter.admits(c)).collect()
    }
}
