pub mod comment; // POST /api/blog/:id/comment
pub mod post; // POST /api/blog

pub use comment::comment_post;
pub use post::blog_post;
