//! Error types for the content pipeline

use thiserror::Error;

/// Errors raised while loading posts or building feeds
#[derive(Debug, Error)]
pub enum Error {
    /// A post file name does not follow the `YYYY-MM-DD-slug.md` convention
    #[error("Post ID {id} does not have expected format")]
    MalformedPostId { id: String },

    /// A `post_url` lookup found no matching post
    #[error("{slug} not found in specified collection")]
    PostNotFound { slug: String },

    /// The content store failed to produce a collection
    #[error("content store error: {0:#}")]
    Store(anyhow::Error),

    /// The feed builder rejected the document
    #[error("feed validation failed: {0}")]
    Feed(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
