// handlers/protected/mod.rs - Protected handlers (session token required)
//
// Every route in this tier sits behind middleware::auth::jwt_auth_middleware,
// which injects `AuthUser` into the request extensions. There is no
// per-resource ownership check: any authenticated user may post and comment.

pub mod blog;
