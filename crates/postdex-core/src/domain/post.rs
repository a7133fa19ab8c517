use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - the system of record for a title/content pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A post that has not been persisted yet; the store assigns its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewPost {
    /// Create a new post stamped with the current time.
    pub fn new(title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            title,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach the identity assigned by a store.
    pub fn with_id(self, id: i64) -> Post {
        Post {
            id,
            title: self.title,
            content: self.content,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_post_has_matching_timestamps() {
        let post = NewPost::new("Hello".to_string(), "World".to_string());
        assert_eq!(post.created_at, post.updated_at);
    }

    #[test]
    fn with_id_keeps_fields() {
        let new_post = NewPost::new("Hello".to_string(), "World".to_string());
        let created_at = new_post.created_at;
        let post = new_post.with_id(7);

        assert_eq!(post.id, 7);
        assert_eq!(post.title, "Hello");
        assert_eq!(post.content, "World");
        assert_eq!(post.created_at, created_at);
    }
}
