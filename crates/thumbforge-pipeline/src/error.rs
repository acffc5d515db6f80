//! Producer error taxonomy.
//!
//! One variant per fallible pipeline step. All four are recoverable by
//! redelivery from the event source; the pipeline itself never retries.

use thiserror::Error;
use thumbforge_processing::ThumbnailError;
use thumbforge_storage::StoreError;

#[derive(Debug, Error)]
pub enum ProducerError {
    #[error("fetch failed for {bucket}/{path}: {source}")]
    Fetch {
        bucket: String,
        path: String,
        #[source]
        source: StoreError,
    },

    #[error("decode failed for {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: ThumbnailError,
    },

    #[error("encode failed for {path}: {source}")]
    Encode {
        path: String,
        #[source]
        source: ThumbnailError,
    },

    #[error("upload failed for {bucket}/{path}: {source}")]
    Upload {
        bucket: String,
        path: String,
        #[source]
        source: StoreError,
    },
}
