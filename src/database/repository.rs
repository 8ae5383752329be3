use async_trait::async_trait;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{BlogPost, Comment, User};

/// User collection of the document store
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user. Fails with `DatabaseError::Conflict` when the
    /// username is already taken.
    async fn insert_user(&self, user: User) -> Result<User, DatabaseError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DatabaseError>;

    /// Fetch every user whose id is in `ids`. Unknown ids are skipped.
    async fn select_ids(&self, ids: &[Uuid]) -> Result<Vec<User>, DatabaseError>;
}

/// Blog post collection of the document store
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn insert_post(&self, post: BlogPost) -> Result<BlogPost, DatabaseError>;

    /// All posts in creation order
    async fn select_posts(&self) -> Result<Vec<BlogPost>, DatabaseError>;

    /// Atomically append `comment` to the post's embedded sequence. Fails with
    /// `DatabaseError::NotFound` when no such post exists.
    async fn append_comment(&self, post_id: Uuid, comment: Comment) -> Result<(), DatabaseError>;
}

#[async_trait]
pub trait HealthCheck: Send + Sync {
    async fn ping(&self) -> Result<(), DatabaseError>;
}
