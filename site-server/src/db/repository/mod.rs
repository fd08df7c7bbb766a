//! Repository Module
//!
//! CRUD operations per entity, as free functions over the SQLite pool.
//!
//! Public content reads (shop/event/slider/popup lists and slug lookups)
//! are resilient: a failed query logs a warning and serves the fixed
//! fallback dataset filtered by the same predicate the live query would
//! have applied. Writes and id-addressed admin reads propagate errors.

pub mod admin_user;
pub mod event;
pub mod inquiry;
pub mod popup;
pub mod shop;
pub mod slider;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
