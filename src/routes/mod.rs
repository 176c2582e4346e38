//! Route tables and the assembled application router.

mod users;

pub use users::users_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

/// Largest request body accepted by any route.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// The users CRUD surface with the request body limit applied.
pub fn app(state: AppState) -> Router {
    users_routes(state).layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
}
