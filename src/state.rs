//! Shared application state for all routes.

use crate::store::UserStore;

#[derive(Clone)]
pub struct AppState {
    /// Constructed once by the entry point; every handler goes through it.
    pub users: UserStore,
}

impl AppState {
    pub fn new(users: UserStore) -> Self {
        Self { users }
    }
}
