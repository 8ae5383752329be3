use axum::{extract::State, Json};

use crate::database::models::BlogPostView;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/blog - Every post with author and commenter usernames resolved
pub async fn list_get(State(state): State<AppState>) -> Result<Json<Vec<BlogPostView>>, ApiError> {
    let posts = state.content.list_posts().await?;
    Ok(Json(posts))
}
