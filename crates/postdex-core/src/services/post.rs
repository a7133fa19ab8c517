use std::sync::Arc;

use crate::domain::{MatchQuery, NewPost, Post, PostDocument};
use crate::error::DomainError;
use crate::ports::{PostStore, SearchIndex};

/// Writes posts to the relational store and mirrors them into the search index.
///
/// The two writes are independent: if the index write fails after the post
/// was stored, nothing is rolled back and [`DomainError::PartialWrite`] is
/// returned with the id of the unindexed post.
#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostStore>,
    index: Arc<dyn SearchIndex>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostStore>, index: Arc<dyn SearchIndex>) -> Self {
        Self { posts, index }
    }

    /// Store a new post and index its search document.
    pub async fn create_post(&self, title: String, content: String) -> Result<Post, DomainError> {
        let post = self.posts.save(NewPost::new(title, content)).await?;
        tracing::debug!(post_id = post.id, "Post stored");

        if let Err(source) = self.index.save(PostDocument::from(&post)).await {
            tracing::error!(
                post_id = post.id,
                error = %source,
                "Post stored but search document was not written"
            );
            return Err(DomainError::PartialWrite {
                post_id: post.id,
                source,
            });
        }

        tracing::debug!(post_id = post.id, "Search document indexed");
        Ok(post)
    }

    /// Match `keyword` against post content.
    pub async fn search_posts(&self, keyword: &str) -> Result<Vec<PostDocument>, DomainError> {
        let query = MatchQuery::content(keyword);
        let documents = self.index.search(&query).await?;

        tracing::debug!(keyword = %keyword, hits = documents.len(), "Search executed");
        Ok(documents)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicI64, Ordering};

    use async_trait::async_trait;
    use tokio::sync::RwLock;

    use super::*;
    use crate::error::RepoError;
    use crate::ports::IndexError;

    #[derive(Default)]
    struct MapStore {
        next_id: AtomicI64,
        rows: RwLock<BTreeMap<i64, Post>>,
    }

    #[async_trait]
    impl PostStore for MapStore {
        async fn save(&self, post: NewPost) -> Result<Post, RepoError> {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
            let post = post.with_id(id);
            self.rows.write().await.insert(id, post.clone());
            Ok(post)
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
            Ok(self.rows.read().await.get(&id).cloned())
        }
    }

    struct UnreachableStore;

    #[async_trait]
    impl PostStore for UnreachableStore {
        async fn save(&self, _post: NewPost) -> Result<Post, RepoError> {
            Err(RepoError::Connection("refused".to_string()))
        }

        async fn find_by_id(&self, _id: i64) -> Result<Option<Post>, RepoError> {
            Err(RepoError::Connection("refused".to_string()))
        }
    }

    /// Substring matching is enough here; analyzers are tested with the adapters.
    #[derive(Default)]
    struct MapIndex {
        docs: RwLock<BTreeMap<i64, PostDocument>>,
        reject_writes: bool,
    }

    impl MapIndex {
        fn rejecting() -> Self {
            Self {
                reject_writes: true,
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl SearchIndex for MapIndex {
        async fn save(&self, document: PostDocument) -> Result<PostDocument, IndexError> {
            if self.reject_writes {
                return Err(IndexError::Connection("index offline".to_string()));
            }
            self.docs.write().await.insert(document.id, document.clone());
            Ok(document)
        }

        async fn search(&self, query: &MatchQuery) -> Result<Vec<PostDocument>, IndexError> {
            Ok(self
                .docs
                .read()
                .await
                .values()
                .filter(|doc| !query.text.is_empty() && doc.content.contains(&query.text))
                .cloned()
                .collect())
        }
    }

    fn service(store: Arc<MapStore>, index: Arc<MapIndex>) -> PostService {
        PostService::new(store, index)
    }

    #[tokio::test]
    async fn create_writes_post_and_matching_document() {
        let store = Arc::new(MapStore::default());
        let index = Arc::new(MapIndex::default());
        let service = service(store.clone(), index.clone());

        let post = service
            .create_post("Hello".to_string(), "World".to_string())
            .await
            .unwrap();

        assert_eq!(store.rows.read().await.len(), 1);
        let docs = index.docs.read().await;
        assert_eq!(docs.len(), 1);
        let doc = docs.get(&post.id).unwrap();
        assert_eq!(doc.content, post.content);
        assert_eq!(doc.created_time, post.created_at);
    }

    #[tokio::test]
    async fn identical_creates_produce_independent_records() {
        let store = Arc::new(MapStore::default());
        let index = Arc::new(MapIndex::default());
        let service = service(store.clone(), index.clone());

        let first = service
            .create_post("t".to_string(), "same".to_string())
            .await
            .unwrap();
        let second = service
            .create_post("t".to_string(), "same".to_string())
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(index.docs.read().await.len(), 2);
    }

    #[tokio::test]
    async fn search_returns_only_matching_documents() {
        let service = service(Arc::new(MapStore::default()), Arc::new(MapIndex::default()));
        service
            .create_post("a".to_string(), "rust is fast".to_string())
            .await
            .unwrap();
        service
            .create_post("b".to_string(), "java is verbose".to_string())
            .await
            .unwrap();

        let hits = service.search_posts("rust").await.unwrap();

        assert_eq!(hits.len(), 1);
        assert!(hits[0].content.contains("rust"));
    }

    #[tokio::test]
    async fn repeated_search_is_stable() {
        let service = service(Arc::new(MapStore::default()), Arc::new(MapIndex::default()));
        for content in ["alpha beta", "beta gamma", "delta"] {
            service
                .create_post("t".to_string(), content.to_string())
                .await
                .unwrap();
        }

        let first = service.search_posts("beta").await.unwrap();
        let second = service.search_posts("beta").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[tokio::test]
    async fn index_failure_leaves_post_stored_but_unsearchable() {
        let store = Arc::new(MapStore::default());
        let index = Arc::new(MapIndex::rejecting());
        let service = service(store.clone(), index.clone());

        let err = service
            .create_post("Hello".to_string(), "orphan".to_string())
            .await
            .unwrap_err();

        let post_id = match err {
            DomainError::PartialWrite { post_id, .. } => post_id,
            other => panic!("unexpected error: {other:?}"),
        };

        let stored = store.find_by_id(post_id).await.unwrap().unwrap();
        assert_eq!(stored.content, "orphan");
        assert!(service.search_posts("orphan").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn store_failure_skips_index_write() {
        let index = Arc::new(MapIndex::default());
        let service = PostService::new(Arc::new(UnreachableStore), index.clone());

        let err = service
            .create_post("Hello".to_string(), "World".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Store(RepoError::Connection(_))));
        assert!(index.docs.read().await.is_empty());
    }
}
