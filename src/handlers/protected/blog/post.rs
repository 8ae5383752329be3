use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;

use crate::error::ApiError;
use crate::handlers::json_body;
use crate::middleware::AuthUser;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// POST /api/blog - Create a post authored by the caller
pub async fn blog_post(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    body: Result<Json<CreatePostRequest>, JsonRejection>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let payload = json_body(body)?;

    state
        .content
        .create_post(
            payload.title.as_deref().unwrap_or_default(),
            payload.content.as_deref().unwrap_or_default(),
            user.user_id,
        )
        .await?;

    Ok((StatusCode::CREATED, "Blog post created"))
}
