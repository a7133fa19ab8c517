//! PostgreSQL repository implementations.

use async_trait::async_trait;

use postdex_core::domain::{NewPost, Post};
use postdex_core::error::RepoError;
use postdex_core::ports::PostStore;

use super::entity::post::{ActiveModel as PostActiveModel, Entity as PostEntity};
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL post store.
pub type PostgresPostStore = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl PostStore for PostgresPostStore {
    async fn save(&self, post: NewPost) -> Result<Post, RepoError> {
        let model = self.insert(PostActiveModel::from(post)).await?;
        tracing::debug!(post_id = model.id, "Inserted post row");
        Ok(model.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let model = self.find_one(id).await?;
        Ok(model.map(Into::into))
    }
}
