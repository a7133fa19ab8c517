//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod repository;
mod search_index;

pub use repository::PostStore;
pub use search_index::{IndexError, SearchIndex};
