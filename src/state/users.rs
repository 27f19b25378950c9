//! Account list state for librarian user management.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use crate::net::types::User;

#[derive(Clone, Debug, Default)]
pub struct UsersState {
    pub items: Vec<User>,
    pub loading: bool,
    pub error: Option<String>,
}

impl UsersState {
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_fetch(&mut self, result: Result<Vec<User>, String>) {
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(message) => self.error = Some(message),
        }
    }

    /// Insert a new account or replace an edited one.
    pub fn upsert(&mut self, user: User) {
        match self.items.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => *existing = user,
            None => self.items.push(user),
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.items.retain(|u| u.id != id);
    }
}
