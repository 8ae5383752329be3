use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserRef;

/// Blog post document. Comments live inside the post, in append order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author_id: Uuid,
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
}

impl BlogPost {
    pub fn new(author_id: Uuid, title: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            author_id,
            comments: Vec::new(),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub content: String,
    pub commenter_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(commenter_id: Uuid, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
            commenter_id,
            created_at: Utc::now(),
        }
    }
}

/// Listing shape: references resolved to usernames. A reference that no
/// longer resolves is rendered as `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPostView {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: Option<UserRef>,
    pub comments: Vec<CommentView>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentView {
    pub id: Uuid,
    pub content: String,
    pub commenter: Option<UserRef>,
    pub created_at: DateTime<Utc>,
}
