//! Search queries understood by every [`SearchIndex`](crate::ports::SearchIndex).

use serde::{Deserialize, Serialize};

/// Text fields of a [`PostDocument`](super::PostDocument) that can be queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchField {
    Content,
}

impl SearchField {
    /// Field name as stored in the index.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Content => "content",
        }
    }
}

/// Match query: documents whose `field` contains terms of `text` under the
/// index's analyzer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchQuery {
    pub field: SearchField,
    pub text: String,
}

impl MatchQuery {
    pub fn new(field: SearchField, text: impl Into<String>) -> Self {
        Self {
            field,
            text: text.into(),
        }
    }

    /// Match against the post content.
    pub fn content(text: impl Into<String>) -> Self {
        Self::new(SearchField::Content, text)
    }
}
