use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{types::Json, FromRow, PgPool};
use uuid::Uuid;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::{BlogPost, Comment, User};
use crate::database::repository::{HealthCheck, PostRepository, UserRepository};

/// PostgreSQL-backed document store. Comments are embedded in each post as
/// a JSONB array.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct PostRow {
    id: Uuid,
    title: String,
    content: String,
    author_id: Uuid,
    comments: Json<Vec<Comment>>,
    created_at: DateTime<Utc>,
}

impl From<PostRow> for BlogPost {
    fn from(row: PostRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            content: row.content,
            author_id: row.author_id,
            comments: row.comments.0,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl UserRepository for PgStore {
    async fn insert_user(&self, user: User) -> Result<User, DatabaseError> {
        sqlx::query("INSERT INTO users (id, username, password, created_at) VALUES ($1, $2, $3, $4)")
            .bind(user.id)
            .bind(&user.username)
            .bind(&user.password)
            .bind(user.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::from_insert(e, "Username"))?;

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password, created_at FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn select_ids(&self, ids: &[Uuid]) -> Result<Vec<User>, DatabaseError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let users = sqlx::query_as::<_, User>(
            "SELECT id, username, password, created_at FROM users WHERE id = ANY($1)",
        )
        .bind(ids.to_vec())
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }
}

#[async_trait]
impl PostRepository for PgStore {
    async fn insert_post(&self, post: BlogPost) -> Result<BlogPost, DatabaseError> {
        sqlx::query(
            "INSERT INTO blog_posts (id, title, content, author_id, comments, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(post.id)
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.author_id)
        .bind(Json(&post.comments))
        .bind(post.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::from_insert(e, "Blog post"))?;

        Ok(post)
    }

    async fn select_posts(&self) -> Result<Vec<BlogPost>, DatabaseError> {
        let rows = sqlx::query_as::<_, PostRow>(
            "SELECT id, title, content, author_id, comments, created_at
             FROM blog_posts
             ORDER BY seq",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BlogPost::from).collect())
    }

    async fn append_comment(&self, post_id: Uuid, comment: Comment) -> Result<(), DatabaseError> {
        // Single-statement append: concurrent comments on one post never
        // overwrite each other.
        let result = sqlx::query("UPDATE blog_posts SET comments = comments || $2 WHERE id = $1")
            .bind(post_id)
            .bind(Json(vec![comment]))
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!("Blog post {} not found", post_id)));
        }
        Ok(())
    }
}

#[async_trait]
impl HealthCheck for PgStore {
    async fn ping(&self) -> Result<(), DatabaseError> {
        DatabaseManager::health_check(&self.pool).await
    }
}
