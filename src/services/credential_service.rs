use std::sync::Arc;

use uuid::Uuid;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::TokenService;
use crate::database::models::User;
use crate::database::UserRepository;
use crate::services::error::{require, ServiceError};

/// Registration, lookup and password checks over the user collection
#[derive(Clone)]
pub struct CredentialService {
    users: Arc<dyn UserRepository>,
    tokens: TokenService,
    bcrypt_cost: u32,
}

impl CredentialService {
    pub fn new(users: Arc<dyn UserRepository>, tokens: TokenService, bcrypt_cost: u32) -> Self {
        Self {
            users,
            tokens,
            bcrypt_cost,
        }
    }

    pub async fn register(&self, username: &str, password: &str) -> Result<Uuid, ServiceError> {
        let username = require(username, "username")?;
        let password = require(password, "password")?;

        let hashed = hash_password(password, self.bcrypt_cost).await?;
        let user = self.users.insert_user(User::new(username.to_string(), hashed)).await?;

        tracing::info!("Registered user '{}' ({})", user.username, user.id);
        Ok(user.id)
    }

    pub async fn find_by_username(&self, username: &str) -> Result<User, ServiceError> {
        self.users
            .find_by_username(username)
            .await?
            .ok_or_else(|| ServiceError::NotFound("User not found".to_string()))
    }

    pub async fn verify_password(&self, user: &User, password: &str) -> Result<bool, ServiceError> {
        Ok(verify_password(password, &user.password).await?)
    }

    /// Check credentials and issue a session token
    pub async fn login(&self, username: &str, password: &str) -> Result<String, ServiceError> {
        let username = require(username, "username")?;
        let password = require(password, "password")?;

        let user = self.find_by_username(username).await.map_err(|e| {
            tracing::warn!("Login failed: unknown user '{}'", username);
            e
        })?;

        if !self.verify_password(&user, password).await? {
            tracing::warn!("Login failed: bad password for '{}'", username);
            return Err(ServiceError::InvalidCredentials);
        }

        let token = self.tokens.issue(user.id, &user.username)?;
        tracing::info!("User '{}' logged in", user.username);
        Ok(token)
    }
}
