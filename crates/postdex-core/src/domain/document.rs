use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::post::Post;

/// Search-optimized projection of a [`Post`].
///
/// Serialized with camelCase keys; the same JSON is stored in the index
/// and returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDocument {
    pub id: i64,
    pub content: String,
    #[serde(with = "date_hour_minute_second")]
    pub created_time: DateTime<Utc>,
    #[serde(with = "date_hour_minute_second")]
    pub updated_time: DateTime<Utc>,
}

impl From<&Post> for PostDocument {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            content: post.content.clone(),
            created_time: post.created_at,
            updated_time: post.updated_at,
        }
    }
}

/// `yyyy-MM-dd'T'HH:mm:ss`, the `date_hour_minute_second` index format.
pub mod date_hour_minute_second {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(de::Error::custom)
    }
}
