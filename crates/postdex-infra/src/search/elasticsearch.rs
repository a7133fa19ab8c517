//! Elasticsearch search index over the REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::sync::OnceCell;

use postdex_core::domain::{MatchQuery, PostDocument};
use postdex_core::ports::{IndexError, SearchIndex};

use super::settings::{Analyzer, index_definition};

/// Elasticsearch connection and index configuration.
#[derive(Debug, Clone)]
pub struct ElasticsearchConfig {
    /// Base URL, e.g. `https://localhost:9200`. TLS follows the scheme.
    pub url: String,
    /// Name of the index holding post documents.
    pub index: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub analyzer: Analyzer,
    /// Per-request timeout.
    pub timeout: Duration,
    /// `size` sent with every search.
    pub max_results: usize,
    /// Wait for the next refresh on writes so documents are searchable
    /// when the write returns.
    pub refresh_on_write: bool,
}

impl ElasticsearchConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            index: "post".to_string(),
            username: None,
            password: None,
            analyzer: Analyzer::default(),
            timeout: Duration::from_secs(10),
            max_results: 10_000,
            refresh_on_write: true,
        }
    }
}

/// Elasticsearch-backed [`SearchIndex`].
///
/// The index is provisioned on first use and again on every request until
/// provisioning succeeds, so a cluster that is down at startup is picked up
/// once it comes back.
pub struct ElasticsearchIndex {
    client: Client,
    config: ElasticsearchConfig,
    provisioned: OnceCell<()>,
}

impl ElasticsearchIndex {
    pub fn new(config: ElasticsearchConfig) -> Result<Self, IndexError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| IndexError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            config,
            provisioned: OnceCell::new(),
        })
    }

    /// Make sure the index exists, checking the cluster only until the first success.
    pub async fn ready(&self) -> Result<(), IndexError> {
        self.provisioned
            .get_or_try_init(|| async { self.ensure_index().await.map(|_| ()) })
            .await
            .map(|_| ())
    }

    /// Create the index with its analyzer settings and mappings if it does not exist.
    ///
    /// Returns `true` when the index was created by this call.
    pub async fn ensure_index(&self) -> Result<bool, IndexError> {
        let exists = self
            .request(Method::HEAD, "")
            .send()
            .await
            .map_err(map_transport_err)?;

        match exists.status() {
            StatusCode::OK => {
                tracing::debug!(index = %self.config.index, "Search index already exists");
                return Ok(false);
            }
            StatusCode::NOT_FOUND => {}
            status => {
                return Err(IndexError::Status {
                    status: status.as_u16(),
                    reason: "unexpected response to index lookup".to_string(),
                });
            }
        }

        let definition = index_definition(self.config.analyzer)?;
        let response = self
            .request(Method::PUT, "")
            .json(&definition)
            .send()
            .await
            .map_err(map_transport_err)?;
        check_status(response).await?;

        tracing::info!(
            index = %self.config.index,
            analyzer = %self.config.analyzer,
            "Created search index"
        );
        Ok(true)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut url = format!(
            "{}/{}",
            self.config.url.trim_end_matches('/'),
            self.config.index
        );
        if !path.is_empty() {
            url.push('/');
            url.push_str(path);
        }

        let builder = self.client.request(method, url);
        match &self.config.username {
            Some(username) => builder.basic_auth(username, self.config.password.as_ref()),
            None => builder,
        }
    }
}

#[async_trait]
impl SearchIndex for ElasticsearchIndex {
    async fn save(&self, document: PostDocument) -> Result<PostDocument, IndexError> {
        self.ready().await?;

        let mut request = self
            .request(Method::PUT, &format!("_doc/{}", document.id))
            .json(&document);
        if self.config.refresh_on_write {
            request = request.query(&[("refresh", "wait_for")]);
        }

        let response = request.send().await.map_err(map_transport_err)?;
        check_status(response).await?;

        tracing::debug!(post_id = document.id, index = %self.config.index, "Indexed document");
        Ok(document)
    }

    async fn search(&self, query: &MatchQuery) -> Result<Vec<PostDocument>, IndexError> {
        self.ready().await?;

        let body = match_query_body(query, self.config.max_results);
        let response = self
            .request(Method::POST, "_search")
            .json(&body)
            .send()
            .await
            .map_err(map_transport_err)?;

        let payload: Value = check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| IndexError::Serialization(e.to_string()))?;

        parse_hits(payload)
    }
}

/// Request body of a match query limited to `size` hits.
pub fn match_query_body(query: &MatchQuery, size: usize) -> Value {
    json!({
        "query": {
            "match": {
                query.field.as_str(): { "query": query.text }
            }
        },
        "size": size,
    })
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    hits: HitsEnvelope,
}

#[derive(Debug, Deserialize)]
struct HitsEnvelope {
    hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
struct Hit {
    #[serde(rename = "_source")]
    source: PostDocument,
}

/// Extract `hits.hits[]._source` from a search response, keeping hit order.
pub fn parse_hits(payload: Value) -> Result<Vec<PostDocument>, IndexError> {
    let response: SearchResponse =
        serde_json::from_value(payload).map_err(|e| IndexError::Serialization(e.to_string()))?;

    Ok(response.hits.hits.into_iter().map(|hit| hit.source).collect())
}

async fn check_status(response: Response) -> Result<Response, IndexError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let reason = response.text().await.unwrap_or_default();
    Err(IndexError::Status {
        status: status.as_u16(),
        reason,
    })
}

fn map_transport_err(err: reqwest::Error) -> IndexError {
    if err.is_decode() {
        IndexError::Serialization(err.to_string())
    } else {
        IndexError::Connection(err.to_string())
    }
}
