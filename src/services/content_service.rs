use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use uuid::Uuid;

use crate::database::models::{BlogPost, BlogPostView, Comment, CommentView, UserRef};
use crate::database::{PostRepository, UserRepository};
use crate::services::error::{require, ServiceError};

/// Blog posts and their embedded comments
#[derive(Clone)]
pub struct ContentService {
    posts: Arc<dyn PostRepository>,
    users: Arc<dyn UserRepository>,
}

impl ContentService {
    pub fn new(posts: Arc<dyn PostRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { posts, users }
    }

    pub async fn create_post(
        &self,
        title: &str,
        content: &str,
        author_id: Uuid,
    ) -> Result<Uuid, ServiceError> {
        let title = require(title, "title")?;
        let content = require(content, "content")?;

        let post = self
            .posts
            .insert_post(BlogPost::new(author_id, title.to_string(), content.to_string()))
            .await?;

        tracing::info!("Created blog post {} by {}", post.id, author_id);
        Ok(post.id)
    }

    /// Every post, with author and commenter ids resolved to usernames.
    pub async fn list_posts(&self) -> Result<Vec<BlogPostView>, ServiceError> {
        let posts = self.posts.select_posts().await?;

        let ids: Vec<Uuid> = posts
            .iter()
            .flat_map(|post| {
                std::iter::once(post.author_id).chain(post.comments.iter().map(|c| c.commenter_id))
            })
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let users: HashMap<Uuid, UserRef> = self
            .users
            .select_ids(&ids)
            .await?
            .iter()
            .map(|user| (user.id, UserRef::from(user)))
            .collect();

        Ok(posts
            .into_iter()
            .map(|post| BlogPostView {
                id: post.id,
                title: post.title,
                content: post.content,
                author: users.get(&post.author_id).cloned(),
                comments: post
                    .comments
                    .into_iter()
                    .map(|comment| CommentView {
                        id: comment.id,
                        content: comment.content,
                        commenter: users.get(&comment.commenter_id).cloned(),
                        created_at: comment.created_at,
                    })
                    .collect(),
                created_at: post.created_at,
            })
            .collect())
    }

    pub async fn add_comment(
        &self,
        post_id: Uuid,
        content: &str,
        commenter_id: Uuid,
    ) -> Result<Uuid, ServiceError> {
        let comment = Comment::new(commenter_id, content.to_string());
        let comment_id = comment.id;
        self.posts
            .append_comment(post_id, comment)
            .await
            .map_err(|e| match ServiceError::from(e) {
                ServiceError::NotFound(_) => ServiceError::NotFound("Blog post not found".to_string()),
                other => other,
            })?;

        tracing::info!("Comment {} added to post {} by {}", comment_id, post_id, commenter_id);
        Ok(comment_id)
    }
}
