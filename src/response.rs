//! Success bodies for the users routes.

use crate::model::User;
use axum::Json;
use serde::Serialize;

pub const USER_UPDATED: &str = "User updated successfully";
pub const USER_DELETED: &str = "User deleted successfully";

#[derive(Serialize)]
pub struct UserOne {
    pub user: User,
}

#[derive(Serialize)]
pub struct UserMany {
    pub users: Vec<User>,
}

#[derive(Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

pub fn user_one(user: User) -> Json<UserOne> {
    Json(UserOne { user })
}

pub fn user_many(users: Vec<User>) -> Json<UserMany> {
    Json(UserMany { users })
}

pub fn message(message: &'static str) -> Json<MessageBody> {
    Json(MessageBody { message })
}
