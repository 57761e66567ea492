//! In-memory todo store served over a small JSON API.
//!
//! Users own ordered lists of todo items; everything lives in the
//! [`AppState`] created by the binary and is gone once the process exits.

use std::sync::{Mutex, MutexGuard, PoisonError};

pub mod config;
pub mod error;
pub mod handler;
pub mod model;
pub mod route;
pub mod schema;
pub mod service;
pub mod store;

use store::TodoStore;

// Struct representing the application state
#[derive(Debug, Default)]
pub struct AppState {
    store: Mutex<TodoStore>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Locks the store for the duration of one request.
    ///
    /// Handlers never hold the guard across an `.await`, so requests are
    /// applied one at a time.
    pub fn store(&self) -> MutexGuard<'_, TodoStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
