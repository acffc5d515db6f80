//! Blob store abstraction trait.

use async_trait::async_trait;
use bytes::Bytes;
use std::time::Duration;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("object not found: {bucket}/{key}")]
    NotFound { bucket: String, key: String },

    #[error("invalid object key: {0}")]
    InvalidKey(String),

    #[error("operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

/// The store contract the pipeline depends on.
///
/// Deliberately two calls wide: the pipeline reads one object and writes one
/// derived object per invocation, and must not grow a dependency on any
/// broader store API.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Read the full object at `bucket`/`key` into memory.
    async fn get(&self, bucket: &str, key: &str) -> StoreResult<Bytes>;

    /// Write `data` to `bucket`/`key`, tagged with `content_type`.
    ///
    /// Overwrites any existing object at the key; there are no partial
    /// writes visible to readers.
    async fn put(&self, bucket: &str, key: &str, data: Bytes, content_type: &str)
        -> StoreResult<()>;
}
