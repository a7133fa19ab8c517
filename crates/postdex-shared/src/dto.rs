//! Data Transfer Objects - request parameters for the API.

use serde::{Deserialize, Serialize};

/// Parameters of `POST /api/post`, from the query string or a form body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostParams {
    pub title: String,
    pub content: String,
}

/// Parameters of `GET /api/post/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPostParams {
    pub keyword: String,
}
