//! In-memory search index - used when no search cluster is configured.

use std::collections::{BTreeMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;

use postdex_core::domain::{MatchQuery, PostDocument, SearchField};
use postdex_core::ports::{IndexError, SearchIndex};

/// Split on anything that is not alphanumeric and lowercase, roughly what
/// the `standard` analyzer does for Latin and Hangul text.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Search index keeping documents in a `BTreeMap` keyed by id.
///
/// A document matches when its field shares at least one term with the
/// query. Hits are ordered by the number of matching term occurrences,
/// then by id.
///
/// Note: Data is lost on process restart.
pub struct InMemorySearchIndex {
    documents: RwLock<BTreeMap<i64, PostDocument>>,
}

impl InMemorySearchIndex {
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(BTreeMap::new()),
        }
    }

    /// Number of indexed documents.
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    fn field_text(document: &PostDocument, field: SearchField) -> &str {
        match field {
            SearchField::Content => &document.content,
        }
    }
}

impl Default for InMemorySearchIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchIndex for InMemorySearchIndex {
    async fn save(&self, document: PostDocument) -> Result<PostDocument, IndexError> {
        let mut documents = self.documents.write().await;
        documents.insert(document.id, document.clone());
        Ok(document)
    }

    async fn search(&self, query: &MatchQuery) -> Result<Vec<PostDocument>, IndexError> {
        let terms: HashSet<String> = tokenize(&query.text).into_iter().collect();
        if terms.is_empty() {
            return Ok(Vec::new());
        }

        let documents = self.documents.read().await;
        let mut scored: Vec<(usize, &PostDocument)> = documents
            .values()
            .filter_map(|doc| {
                let score = tokenize(Self::field_text(doc, query.field))
                    .iter()
                    .filter(|token| terms.contains(*token))
                    .count();
                (score > 0).then_some((score, doc))
            })
            .collect();

        // BTreeMap iteration is by id, so a stable sort keeps ties ordered by id.
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        Ok(scored.into_iter().map(|(_, doc)| doc.clone()).collect())
    }
}
