// handlers/mod.rs - Two-tier handler layout
//
// Public (no auth) → Protected (session token required, see middleware::auth)
pub mod protected; // Tier 2: token required (POST /api/blog, POST /api/blog/:id/comment)
pub mod public; // Tier 1: no authentication (/api/register, /api/login, GET /api/blog)

use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::error::ApiError;

/// Unwrap a JSON body, turning any rejection (bad syntax, wrong content
/// type, wrong field types) into a 400.
pub(crate) fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(value)| value).map_err(|rejection| {
        tracing::debug!("Rejected request body: {}", rejection);
        ApiError::bad_request(rejection.body_text())
    })
}
