//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `books`, `checkouts`, `users`) so
//! pages depend on small focused models. Each model is plain data held in an
//! `RwSignal` that `App` provides as context; none of them touch the network.

pub mod books;
pub mod bootstrap;
pub mod checkouts;
pub mod search;
pub mod session;
pub mod users;
