//! Search index implementations - Elasticsearch and in-memory fallback.

mod memory;
mod settings;

#[cfg(feature = "elasticsearch")]
mod elasticsearch;

pub use memory::{InMemorySearchIndex, tokenize};
pub use settings::{Analyzer, index_definition};

#[cfg(feature = "elasticsearch")]
pub use elasticsearch::{ElasticsearchConfig, ElasticsearchIndex, match_query_body, parse_hits};
