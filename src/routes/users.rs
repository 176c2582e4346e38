//! `/users` CRUD routes. Only the list route carries CORS headers.

use crate::handlers::users::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{handler::Handler, routing::get, Router};
use tower_http::cors::CorsLayer;

pub fn users_routes(state: AppState) -> Router {
    Router::new()
        .route("/users", get(list.layer(CorsLayer::permissive())).post(create))
        .route("/users/:id", get(read).put(update).delete(delete_handler))
        .with_state(state)
}
