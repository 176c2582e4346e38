//! Create/update body accepted as JSON or as a url-encoded form.

use crate::error::AppError;
use crate::model::UserInput;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    http::header::{CONTENT_LENGTH, CONTENT_TYPE},
    Form, Json,
};

/// Body of `POST /users` and `PUT /users/:id`.
///
/// `application/json` and `application/x-www-form-urlencoded` bodies are parsed;
/// an empty body or any other content type yields a payload with every field absent.
#[derive(Clone, Debug, Default)]
pub struct UserPayload(pub UserInput);

#[derive(Debug, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Ignored,
}

fn body_kind(content_type: Option<&str>) -> BodyKind {
    let essence = content_type
        .and_then(|ct| ct.split(';').next())
        .map(|s| s.trim().to_ascii_lowercase())
        .unwrap_or_default();
    match essence.as_str() {
        "application/json" => BodyKind::Json,
        "application/x-www-form-urlencoded" => BodyKind::Form,
        s if s.starts_with("application/") && s.ends_with("+json") => BodyKind::Json,
        _ => BodyKind::Ignored,
    }
}

#[async_trait]
impl<S> FromRequest<S> for UserPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let headers = req.headers();
        let empty = headers
            .get(CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.trim() == "0");
        let kind = body_kind(headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()));
        if empty {
            return Ok(UserPayload::default());
        }
        let input = match kind {
            BodyKind::Json => {
                let Json(input) = Json::<UserInput>::from_request(req, state)
                    .await
                    .map_err(|e| AppError::BadRequest(e.body_text()))?;
                input
            }
            BodyKind::Form => {
                let Form(input) = Form::<UserInput>::from_request(req, state)
                    .await
                    .map_err(|e| AppError::BadRequest(e.body_text()))?;
                input
            }
            BodyKind::Ignored => UserInput::default(),
        };
        Ok(UserPayload(input))
    }
}
