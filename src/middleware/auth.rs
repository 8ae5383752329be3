use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::Identity;
use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated caller extracted from the session token
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub username: String,
}

impl From<Identity> for AuthUser {
    fn from(identity: Identity) -> Self {
        Self {
            user_id: identity.user_id,
            username: identity.username,
        }
    }
}

/// Access gate for protected routes. A missing, unreadable, forged or
/// expired token all produce the same 403.
pub async fn jwt_auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token_from_headers(&headers).ok_or_else(|| {
        tracing::debug!("Access denied: no usable Authorization header");
        ApiError::access_denied()
    })?;

    let identity = state.tokens.verify(token).ok_or_else(|| {
        tracing::warn!("Access denied: token failed verification");
        ApiError::access_denied()
    })?;

    // Convert identity to AuthUser and inject into request
    request.extensions_mut().insert(AuthUser::from(identity));

    Ok(next.run(request).await)
}

/// The header carries the raw token, no `Bearer ` scheme.
fn extract_token_from_headers(headers: &HeaderMap) -> Option<&str> {
    let token = headers.get(axum::http::header::AUTHORIZATION)?.to_str().ok()?.trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}
