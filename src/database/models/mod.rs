pub mod post;
pub mod user;

pub use post::{BlogPost, BlogPostView, Comment, CommentView};
pub use user::{User, UserRef};
