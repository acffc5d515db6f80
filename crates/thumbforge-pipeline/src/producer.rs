//! Thumbnail producer: fetch, transform, derive target path, upload.

use std::future::Future;
use std::sync::Arc;

use bytes::Bytes;
use tokio::time::timeout;
use tracing::{info, warn, Instrument};
use uuid::Uuid;

use thumbforge_core::{
    classify, derive_thumbnail_path, Classification, PipelineConfig, StorageEvent,
};
use thumbforge_processing::{detect_format, render_thumbnail, BoundingBox, ThumbnailError};
use thumbforge_storage::{ObjectStore, StoreError, StoreResult};

use crate::error::ProducerError;

/// Content type assumed when an eligible-looking event somehow carries none.
/// Unreachable through `handle_event`, which classifies such events as
/// `NotAnImage` before the producer runs.
const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Outcome of one pipeline invocation. Skips are successful no-ops and must
/// stay distinguishable from failures at the invocation boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvocationOutcome {
    Skipped(Classification),
    Uploaded { path: String },
}

/// The thumbnail pipeline.
///
/// Holds only the injected store capability and configuration; no state is
/// shared between invocations, so a producer can serve any number of
/// concurrent event deliveries.
pub struct ThumbnailProducer {
    store: Arc<dyn ObjectStore>,
    config: PipelineConfig,
}

impl ThumbnailProducer {
    pub fn new(store: Arc<dyn ObjectStore>, config: PipelineConfig) -> Self {
        Self { store, config }
    }

    /// Classify `event` and produce a thumbnail when eligible.
    ///
    /// The classifier runs before any network I/O; a thumbnail's own upload
    /// event is rejected here, which is what keeps the pipeline from
    /// re-triggering itself forever.
    pub async fn handle_event(
        &self,
        event: &StorageEvent,
    ) -> Result<InvocationOutcome, ProducerError> {
        let invocation_id = Uuid::new_v4();
        let span = tracing::info_span!(
            "invocation",
            %invocation_id,
            bucket = %event.bucket,
            path = %event.path,
        );

        async {
            match classify(event) {
                Classification::NotAnImage => {
                    info!("skipped: not an image");
                    Ok(InvocationOutcome::Skipped(Classification::NotAnImage))
                }
                Classification::AlreadyThumbnail => {
                    info!("skipped: already a thumbnail");
                    Ok(InvocationOutcome::Skipped(Classification::AlreadyThumbnail))
                }
                Classification::Eligible => match self.produce(event).await {
                    Ok(path) => Ok(InvocationOutcome::Uploaded { path }),
                    Err(e) => {
                        warn!(error = %e, "thumbnail production failed");
                        Err(e)
                    }
                },
            }
        }
        .instrument(span)
        .await
    }

    /// Materialize and persist the thumbnail for an eligible event:
    /// fetch the source, transform it off the async pool, derive the target
    /// path from the original event path, and upload with the source's
    /// content type. Returns the target path the thumbnail was written to,
    /// the only confirmation a successful invocation carries. No internal
    /// retries and no cleanup on failure; either the upload fully succeeds
    /// or the invocation reports an error.
    pub async fn produce(&self, event: &StorageEvent) -> Result<String, ProducerError> {
        let data = self
            .bounded(self.store.get(&event.bucket, &event.path))
            .await
            .map_err(|source| ProducerError::Fetch {
                bucket: event.bucket.clone(),
                path: event.path.clone(),
                source,
            })?;

        let content_type = event
            .content_type
            .clone()
            .unwrap_or_else(|| FALLBACK_CONTENT_TYPE.to_string());

        let thumb = self.transform(event, data, &content_type).await?;

        // Recomputed from the original event path, never from mutated state.
        let target = derive_thumbnail_path(&event.path);

        self.bounded(self.store.put(&event.bucket, &target, thumb, &content_type))
            .await
            .map_err(|source| ProducerError::Upload {
                bucket: event.bucket.clone(),
                path: target.clone(),
                source,
            })?;

        info!(target = %target, "thumbnail uploaded");
        Ok(target)
    }

    /// Decode, shrink, and re-encode on a blocking thread; image work is
    /// CPU-bound and must not stall the async pool.
    async fn transform(
        &self,
        event: &StorageEvent,
        data: Bytes,
        content_type: &str,
    ) -> Result<Bytes, ProducerError> {
        let bbox = BoundingBox::new(self.config.max_width, self.config.max_height);
        let format = detect_format(content_type);

        let rendered = tokio::task::spawn_blocking(move || render_thumbnail(&data, bbox, format))
            .await
            .map_err(|e| ProducerError::Encode {
                path: event.path.clone(),
                source: ThumbnailError::Encode(format!("transform task failed: {e}")),
            })?;

        rendered.map_err(|source| match source {
            ThumbnailError::Decode(_) => ProducerError::Decode {
                path: event.path.clone(),
                source,
            },
            ThumbnailError::Encode(_) => ProducerError::Encode {
                path: event.path.clone(),
                source,
            },
        })
    }

    /// Apply the configured timeout budget to a store call so an
    /// unresponsive backend fails the invocation instead of hanging it.
    async fn bounded<T>(&self, op: impl Future<Output = StoreResult<T>>) -> StoreResult<T> {
        match timeout(self.config.io_timeout, op).await {
            Ok(result) => result,
            Err(_) => Err(StoreError::Timeout(self.config.io_timeout)),
        }
    }
}
