use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use serde::Deserialize;

use crate::error::ApiError;
use crate::handlers::json_body;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// POST /api/register - Register new user account
///
/// Expected Input:
/// ```json
/// { "username": "string", "password": "string" }
/// ```
///
/// Responds `201 User registered`, or 400 when a field is missing or the
/// username is taken.
pub async fn register_post(
    State(state): State<AppState>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let payload = json_body(body)?;

    state
        .credentials
        .register(
            payload.username.as_deref().unwrap_or_default(),
            payload.password.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok((StatusCode::CREATED, "User registered"))
}
