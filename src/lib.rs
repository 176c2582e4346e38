//! Users API: REST CRUD over a single SQLite `users` table.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::{ServerConfig, StoreConfig};
pub use error::{AppError, ConfigError, StoreError};
pub use model::{CreatedUser, User, UserInput};
pub use routes::{app, users_routes};
pub use state::AppState;
pub use store::UserStore;
