// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Token acquisition plus the read-only blog listing.

pub mod auth;
pub mod blog;
