//! Domain-level error types.

use thiserror::Error;

use crate::ports::IndexError;

/// Domain errors - failures surfaced by the post service.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Post store failed: {0}")]
    Store(#[from] RepoError),

    #[error("Search index failed: {0}")]
    Index(#[from] IndexError),

    /// The post was stored but its search document was not written.
    /// The two stores stay diverged until the post is indexed again.
    #[error("Post {post_id} stored but not indexed: {source}")]
    PartialWrite { post_id: i64, source: IndexError },
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
