//! Domain entities - the core business objects.

mod document;
mod post;
mod query;

pub use document::{PostDocument, date_hour_minute_second};
pub use post::{NewPost, Post};
pub use query::{MatchQuery, SearchField};
