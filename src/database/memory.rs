use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{BlogPost, Comment, User};
use crate::database::repository::{HealthCheck, PostRepository, UserRepository};

/// In-process document store with the same contract as `PgStore`.
/// Data lives only as long as the process.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
    posts: RwLock<Vec<BlogPost>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn insert_user(&self, user: User) -> Result<User, DatabaseError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.username == user.username) {
            return Err(DatabaseError::Conflict("Username already exists".to_string()));
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DatabaseError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn select_ids(&self, ids: &[Uuid]) -> Result<Vec<User>, DatabaseError> {
        let users = self.users.read().await;
        Ok(users.iter().filter(|u| ids.contains(&u.id)).cloned().collect())
    }
}

#[async_trait]
impl PostRepository for MemoryStore {
    async fn insert_post(&self, post: BlogPost) -> Result<BlogPost, DatabaseError> {
        self.posts.write().await.push(post.clone());
        Ok(post)
    }

    async fn select_posts(&self) -> Result<Vec<BlogPost>, DatabaseError> {
        Ok(self.posts.read().await.clone())
    }

    async fn append_comment(&self, post_id: Uuid, comment: Comment) -> Result<(), DatabaseError> {
        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| DatabaseError::NotFound(format!("Blog post {} not found", post_id)))?;
        post.comments.push(comment);
        Ok(())
    }
}

#[async_trait]
impl HealthCheck for MemoryStore {
    async fn ping(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}
