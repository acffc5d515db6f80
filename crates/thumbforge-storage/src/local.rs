//! Local filesystem object store.
//!
//! Lays buckets out as directories under a base path: the object
//! `bucket/a/b.png` lives at `{base}/bucket/a/b.png`. Content-type tags have
//! no filesystem representation and are accepted but not persisted.

use crate::traits::{ObjectStore, StoreError, StoreResult};
use async_trait::async_trait;
use bytes::Bytes;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Filesystem-backed [`ObjectStore`] implementation.
#[derive(Clone)]
pub struct LocalStore {
    base_path: PathBuf,
}

impl LocalStore {
    /// Create a new LocalStore rooted at `base_path`, creating it if needed.
    pub async fn new(base_path: impl Into<PathBuf>) -> StoreResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StoreError::Backend(format!(
                "failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStore { base_path })
    }

    /// Convert a bucket/key pair to a filesystem path.
    ///
    /// Rejects components containing traversal sequences so a key can never
    /// resolve outside the store's base directory.
    fn object_path(&self, bucket: &str, key: &str) -> StoreResult<PathBuf> {
        for part in [bucket, key] {
            if part.is_empty() || part.contains("..") || part.starts_with('/') {
                return Err(StoreError::InvalidKey(format!("{bucket}/{key}")));
            }
        }
        Ok(self.base_path.join(bucket).join(key))
    }

    async fn ensure_parent_dir(path: &Path) -> StoreResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl ObjectStore for LocalStore {
    async fn get(&self, bucket: &str, key: &str) -> StoreResult<Bytes> {
        let path = self.object_path(bucket, key)?;
        match fs::read(&path).await {
            Ok(data) => Ok(Bytes::from(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(StoreError::NotFound {
                bucket: bucket.to_string(),
                key: key.to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    async fn put(
        &self,
        bucket: &str,
        key: &str,
        data: Bytes,
        _content_type: &str,
    ) -> StoreResult<()> {
        let path = self.object_path(bucket, key)?;
        Self::ensure_parent_dir(&path).await?;

        let mut file = fs::File::create(&path).await?;
        file.write_all(&data).await?;
        file.flush().await?;

        tracing::debug!(path = %path.display(), bytes = data.len(), "object written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_then_get_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path()).await.unwrap();

        store
            .put("b", "photos/cat.png", Bytes::from_static(b"png"), "image/png")
            .await
            .unwrap();

        let data = store.get("b", "photos/cat.png").await.unwrap();
        assert_eq!(data, Bytes::from_static(b"png"));
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path()).await.unwrap();

        let err = store.get("b", "missing.png").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn rejects_traversal_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path()).await.unwrap();

        for key in ["../escape.png", "a/../../escape.png", "/absolute.png", ""] {
            let err = store.get("b", key).await.unwrap_err();
            assert!(matches!(err, StoreError::InvalidKey(_)), "key {key:?}");
        }

        let err = store
            .put("..", "x.png", Bytes::from_static(b"x"), "image/png")
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidKey(_)));
    }

    #[tokio::test]
    async fn put_overwrites_existing_object() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path()).await.unwrap();

        store
            .put("b", "k.bin", Bytes::from_static(b"one"), "image/png")
            .await
            .unwrap();
        store
            .put("b", "k.bin", Bytes::from_static(b"two"), "image/png")
            .await
            .unwrap();

        assert_eq!(store.get("b", "k.bin").await.unwrap(), Bytes::from_static(b"two"));
    }
}
