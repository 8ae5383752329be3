use std::sync::Arc;

use crate::auth::{TokenError, TokenService};
use crate::config::AppConfig;
use crate::database::{HealthCheck, PostRepository, UserRepository};
use crate::services::{ContentService, CredentialService};

/// Shared handler state: the two stores, the token service and a
/// connectivity probe for `/health`.
#[derive(Clone)]
pub struct AppState {
    pub credentials: CredentialService,
    pub content: ContentService,
    pub tokens: TokenService,
    pub health: Arc<dyn HealthCheck>,
}

impl AppState {
    /// Wire every service onto one document store.
    pub fn new<S>(store: Arc<S>, config: &AppConfig) -> Result<Self, TokenError>
    where
        S: UserRepository + PostRepository + HealthCheck + 'static,
    {
        let tokens = TokenService::from_config(&config.security)?;

        Ok(Self {
            credentials: CredentialService::new(store.clone(), tokens.clone(), config.security.bcrypt_cost),
            content: ContentService::new(store.clone(), store.clone()),
            tokens,
            health: store,
        })
    }
}
