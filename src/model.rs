//! The `users` row and the request payload that writes it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One row of the `users` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub address: String,
}

/// Body of create and update requests.
///
/// Fields are taken as whatever JSON value the client sent. Fields left out (or `null`)
/// bind as NULL and are rejected by the table's NOT NULL constraints; any other value is
/// stored in its text form.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UserInput {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub address: Option<Value>,
}

impl UserInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: Some(Value::String(name.into())),
            email: Some(Value::String(email.into())),
            address: Some(Value::String(address.into())),
        }
    }

    pub fn name_text(&self) -> Option<String> {
        column_text(self.name.as_ref())
    }

    pub fn email_text(&self) -> Option<String> {
        column_text(self.email.as_ref())
    }

    pub fn address_text(&self) -> Option<String> {
        column_text(self.address.as_ref())
    }
}

/// Text a value takes in a TEXT column. Booleans store as `1`/`0`; arrays and objects as JSON.
fn column_text(v: Option<&Value>) -> Option<String> {
    match v? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(if *b { "1" } else { "0" }.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

/// Body of a successful create: the new id with the fields exactly as the client sent them.
#[derive(Clone, Debug, Serialize)]
pub struct CreatedUser {
    pub id: i64,
    pub name: Value,
    pub email: Value,
    pub address: Value,
}

impl CreatedUser {
    pub fn new(id: i64, input: UserInput) -> Self {
        Self {
            id,
            name: input.name.unwrap_or(Value::Null),
            email: input.email.unwrap_or(Value::Null),
            address: input.address.unwrap_or(Value::Null),
        }
    }
}
