//! # Postdex Infrastructure
//!
//! Concrete implementations of the ports defined in `postdex-core`.
//! This crate contains the relational store and search index integrations.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL post store via SeaORM
//! - `elasticsearch` - Elasticsearch search index via its REST API

pub mod database;
pub mod search;

// Re-exports - In-Memory
pub use database::InMemoryPostStore;
pub use search::InMemorySearchIndex;

#[cfg(feature = "postgres")]
pub use database::PostgresPostStore;

#[cfg(feature = "elasticsearch")]
pub use search::{ElasticsearchConfig, ElasticsearchIndex};
