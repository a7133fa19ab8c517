//! Application state - shared across all handlers.

use std::sync::Arc;

use postdex_core::PostService;
use postdex_core::ports::{PostStore, SearchIndex};
use postdex_infra::{InMemoryPostStore, InMemorySearchIndex};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
}

/// A configured backend that cannot be set up at all.
///
/// Only configuration problems end up here. A backend that is merely
/// unreachable is kept, and its requests fail until it comes back.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[cfg(feature = "postgres")]
    #[error("database setup failed: {0}")]
    Database(String),
    #[cfg(feature = "elasticsearch")]
    #[error("search index setup failed: {0}")]
    SearchIndex(#[from] postdex_core::ports::IndexError),
}

impl AppState {
    /// Wire the post service over the given store and index.
    pub fn new(store: Arc<dyn PostStore>, index: Arc<dyn SearchIndex>) -> Self {
        Self {
            posts: PostService::new(store, index),
        }
    }

    /// Build the application state with the backends named in `config`.
    ///
    /// In-memory adapters are used only for backends without a URL.
    pub async fn from_config(config: &AppConfig) -> Result<Self, StartupError> {
        let store = build_post_store(config).await?;
        let index = build_search_index(config).await?;

        tracing::info!("Application state initialized");

        Ok(Self::new(store, index))
    }
}

#[cfg(feature = "postgres")]
async fn build_post_store(config: &AppConfig) -> Result<Arc<dyn PostStore>, StartupError> {
    use postdex_infra::PostgresPostStore;
    use postdex_infra::database::connect;

    let Some(db_config) = config.database.as_ref() else {
        tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        return Ok(Arc::new(InMemoryPostStore::new()));
    };

    let conn = connect(db_config)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;

    Ok(Arc::new(PostgresPostStore::new(conn)))
}

#[cfg(not(feature = "postgres"))]
async fn build_post_store(_config: &AppConfig) -> Result<Arc<dyn PostStore>, StartupError> {
    tracing::info!("Running without postgres feature - using in-memory post store");
    Ok(Arc::new(InMemoryPostStore::new()))
}

#[cfg(feature = "elasticsearch")]
async fn build_search_index(config: &AppConfig) -> Result<Arc<dyn SearchIndex>, StartupError> {
    use postdex_infra::{ElasticsearchConfig, ElasticsearchIndex};

    let Some(search) = config.search.as_ref() else {
        tracing::warn!(
            "ELASTICSEARCH_URL not set. Running without search cluster (in-memory mode)."
        );
        return Ok(Arc::new(InMemorySearchIndex::new()));
    };

    let index = ElasticsearchIndex::new(ElasticsearchConfig {
        url: search.url.clone(),
        index: search.index.clone(),
        username: search.username.clone(),
        password: search.password.clone(),
        analyzer: search.analyzer,
        timeout: search.timeout,
        max_results: search.max_results,
        refresh_on_write: search.refresh_on_write,
    })?;

    match index.ready().await {
        Ok(()) => tracing::info!(
            url = %search.url,
            index = %search.index,
            analyzer = %search.analyzer,
            "Search index ready"
        ),
        Err(e) => tracing::error!(
            url = %search.url,
            index = %search.index,
            "Search cluster unavailable: {}. Requests fail until it is reachable.",
            e
        ),
    }

    Ok(Arc::new(index))
}

#[cfg(not(feature = "elasticsearch"))]
async fn build_search_index(_config: &AppConfig) -> Result<Arc<dyn SearchIndex>, StartupError> {
    tracing::info!("Running without elasticsearch feature - using in-memory search index");
    Ok(Arc::new(InMemorySearchIndex::new()))
}
