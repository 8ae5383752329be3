pub mod content_service;
pub mod credential_service;
pub mod error;

pub use content_service::ContentService;
pub use credential_service::CredentialService;
pub use error::ServiceError;
