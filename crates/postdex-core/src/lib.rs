//! # Postdex Core
//!
//! The domain layer of the post search service.
//! This crate contains the post model, its search projection, the storage
//! ports and the service that keeps both stores written.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;
pub use services::PostService;
