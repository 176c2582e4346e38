//! Users CRUD handlers: create, list, read, update, delete. Each makes exactly one store call.
//!
//! Path ids go to the store as received; the store decides whether they match a row.

use crate::error::AppError;
use crate::extractors::UserPayload;
use crate::model::CreatedUser;
use crate::response::{message, user_many, user_one, USER_DELETED, USER_UPDATED};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

pub async fn create(
    State(state): State<AppState>,
    UserPayload(input): UserPayload,
) -> Result<impl IntoResponse, AppError> {
    let id = state.users.insert(&input).await?;
    tracing::info!(id, "user created");
    Ok(Json(CreatedUser::new(id, input)))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = state.users.select_all().await?;
    Ok(user_many(users))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.users.select_by_id(&id).await?.ok_or(AppError::NotFound)?;
    Ok(user_one(user))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    UserPayload(input): UserPayload,
) -> Result<impl IntoResponse, AppError> {
    if state.users.update_by_id(&id, &input).await? == 0 {
        return Err(AppError::NotFound);
    }
    tracing::info!(%id, "user updated");
    Ok(message(USER_UPDATED))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if state.users.delete_by_id(&id).await? == 0 {
        return Err(AppError::NotFound);
    }
    tracing::info!(%id, "user deleted");
    Ok(message(USER_DELETED))
}
