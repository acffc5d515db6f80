//! Shared fixtures for pipeline integration tests.

use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use image::{DynamicImage, GenericImageView, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};

use thumbforge_core::{PipelineConfig, StorageEvent};
use thumbforge_pipeline::ThumbnailProducer;
use thumbforge_storage::{MemoryStore, ObjectStore, StoreError, StoreResult};

pub fn event(bucket: &str, path: &str, content_type: Option<&str>) -> StorageEvent {
    StorageEvent {
        bucket: bucket.to_string(),
        path: path.to_string(),
        content_type: content_type.map(str::to_string),
    }
}

/// A producer wired to a fresh in-memory store, both handles returned so
/// tests can seed and inspect objects directly.
pub fn producer() -> (ThumbnailProducer, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let producer = ThumbnailProducer::new(store.clone(), PipelineConfig::default());
    (producer, store)
}

/// Config with a short I/O budget, for tests against stalling backends.
pub fn short_io_config() -> PipelineConfig {
    PipelineConfig {
        io_timeout: Duration::from_millis(50),
        ..PipelineConfig::default()
    }
}

/// Store whose calls never complete, like a wedged backend.
pub struct UnresponsiveStore;

#[async_trait]
impl ObjectStore for UnresponsiveStore {
    async fn get(&self, _bucket: &str, _key: &str) -> StoreResult<Bytes> {
        std::future::pending().await
    }

    async fn put(
        &self,
        _bucket: &str,
        _key: &str,
        _data: Bytes,
        _content_type: &str,
    ) -> StoreResult<()> {
        std::future::pending().await
    }
}

/// Store that serves one fixed object but stalls forever on writes.
pub struct WriteStallStore {
    pub data: Bytes,
}

#[async_trait]
impl ObjectStore for WriteStallStore {
    async fn get(&self, _bucket: &str, _key: &str) -> StoreResult<Bytes> {
        Ok(self.data.clone())
    }

    async fn put(
        &self,
        _bucket: &str,
        _key: &str,
        _data: Bytes,
        _content_type: &str,
    ) -> StoreResult<()> {
        std::future::pending().await
    }
}

/// Store that serves one fixed object but rejects every write, like a
/// backend out of quota.
pub struct WriteFailStore {
    pub data: Bytes,
}

#[async_trait]
impl ObjectStore for WriteFailStore {
    async fn get(&self, _bucket: &str, _key: &str) -> StoreResult<Bytes> {
        Ok(self.data.clone())
    }

    async fn put(
        &self,
        _bucket: &str,
        _key: &str,
        _data: Bytes,
        _content_type: &str,
    ) -> StoreResult<()> {
        Err(StoreError::Backend("quota exceeded".to_string()))
    }
}

pub fn png_bytes(width: u32, height: u32) -> Bytes {
    let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        width,
        height,
        Rgba([10, 200, 30, 255]),
    ));
    encode(img, ImageFormat::Png)
}

pub fn jpeg_bytes(width: u32, height: u32) -> Bytes {
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([10, 200, 30])));
    encode(img, ImageFormat::Jpeg)
}

fn encode(img: DynamicImage, format: ImageFormat) -> Bytes {
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), format)
        .expect("failed to encode fixture image");
    Bytes::from(buffer)
}

pub fn decoded_dimensions(data: &[u8]) -> (u32, u32) {
    image::load_from_memory(data)
        .expect("stored thumbnail should decode")
        .dimensions()
}
