//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Message returned for every 0-row match on get, update and delete.
pub const USER_NOT_FOUND: &str = "User not found";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Statement execution failure against the store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl StoreError {
    /// The driver's own message, e.g. `NOT NULL constraint failed: users.name`.
    pub fn message(&self) -> String {
        match self {
            StoreError::Db(sqlx::Error::Database(e)) => e.message().to_string(),
            StoreError::Db(e) => e.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{}", USER_NOT_FOUND)]
    NotFound,
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Store(StoreError::Db(e))
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound => (StatusCode::NOT_FOUND, USER_NOT_FOUND.to_string()),
            AppError::Store(e) => {
                let message = e.message();
                tracing::error!(error = %message, "store error");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            AppError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
