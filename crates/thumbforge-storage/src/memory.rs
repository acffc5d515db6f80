//! In-memory object store.
//!
//! The injected test double for the pipeline; also handy for local
//! experiments. Objects live in a map keyed by (bucket, key).

use crate::traits::{ObjectStore, StoreError, StoreResult};
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::RwLock;

/// A stored object: payload plus the content type it was tagged with.
#[derive(Clone, Debug)]
pub struct StoredObject {
    pub data: Bytes,
    pub content_type: String,
}

/// In-memory [`ObjectStore`] backend.
#[derive(Default)]
pub struct MemoryStore {
    objects: RwLock<HashMap<(String, String), StoredObject>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a stored object, for test assertions.
    pub fn object(&self, bucket: &str, key: &str) -> Option<StoredObject> {
        let objects = self.objects.read().unwrap_or_else(|e| e.into_inner());
        objects.get(&(bucket.to_string(), key.to_string())).cloned()
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        let objects = self.objects.read().unwrap_or_else(|e| e.into_inner());
        objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn get(&self, bucket: &str, key: &str) -> StoreResult<Bytes> {
        let objects = self.objects.read().unwrap_or_else(|e| e.into_inner());
        objects
            .get(&(bucket.to_string(), key.to_string()))
            .map(|obj| obj.data.clone())
            .ok_or_else(|| StoreError::NotFound {
                bucket: bucket.to_string(),
                key: key.to_string(),
            })
    }

    async fn put(
        &self,
        bucket: &str,
        key: &str,
        data: Bytes,
        content_type: &str,
    ) -> StoreResult<()> {
        let mut objects = self.objects.write().unwrap_or_else(|e| e.into_inner());
        objects.insert(
            (bucket.to_string(), key.to_string()),
            StoredObject {
                data,
                content_type: content_type.to_string(),
            },
        );
        Ok(())
    }
}
