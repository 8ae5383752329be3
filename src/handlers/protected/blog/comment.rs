use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::handlers::json_body;
use crate::middleware::AuthUser;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CommentRequest {
    pub content: Option<String>,
}

/// POST /api/blog/:id/comment - Append a comment to any post
///
/// An id that is not a UUID cannot name a post, so it is a 404 like any
/// other unknown id.
pub async fn comment_post(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    body: Result<Json<CommentRequest>, JsonRejection>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let post_id = Uuid::parse_str(&id).map_err(|_| ApiError::not_found("Blog post not found"))?;
    let payload = json_body(body)?;

    state
        .content
        .add_comment(post_id, payload.content.as_deref().unwrap_or_default(), user.user_id)
        .await?;

    Ok((StatusCode::CREATED, "Comment added"))
}
