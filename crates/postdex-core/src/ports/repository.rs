use async_trait::async_trait;

use crate::domain::{NewPost, Post};
use crate::error::RepoError;

/// Relational store for posts.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Persist a new post; the store assigns its identity.
    async fn save(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError>;
}
