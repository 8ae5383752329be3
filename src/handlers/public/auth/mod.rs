// handlers/public/auth/mod.rs - Registration and token acquisition

pub mod login; // POST /api/login - authenticate and get a session token
pub mod register; // POST /api/register - create new account

pub use login::login_post;
pub use register::register_post;
