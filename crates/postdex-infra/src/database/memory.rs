//! In-memory post store - used when no database is configured.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use postdex_core::domain::{NewPost, Post};
use postdex_core::error::RepoError;
use postdex_core::ports::PostStore;

/// Post store backed by a `BTreeMap` with ids assigned from 1 upwards.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostStore {
    last_id: AtomicI64,
    rows: RwLock<BTreeMap<i64, Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            last_id: AtomicI64::new(0),
            rows: RwLock::new(BTreeMap::new()),
        }
    }

    /// Number of stored posts.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn save(&self, post: NewPost) -> Result<Post, RepoError> {
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let post = post.with_id(id);

        self.rows.write().await.insert(id, post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }
}
