//! Search index port - abstraction over full-text search backends.

use async_trait::async_trait;

use crate::domain::{MatchQuery, PostDocument};

/// Search index holding [`PostDocument`]s (Elasticsearch, in-memory).
#[async_trait]
pub trait SearchIndex: Send + Sync {
    /// Insert or replace the document with the same id.
    async fn save(&self, document: PostDocument) -> Result<PostDocument, IndexError>;

    /// Execute a match query, returning hits in the index's ranking order.
    async fn search(&self, query: &MatchQuery) -> Result<Vec<PostDocument>, IndexError>;
}

/// Search index errors.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Index responded with status {status}: {reason}")]
    Status { status: u16, reason: String },

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Invalid index configuration: {0}")]
    Configuration(String),
}
