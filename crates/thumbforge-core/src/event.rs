//! Storage finalize event record.

use serde::{Deserialize, Serialize};

/// Notification that an object finished uploading to a bucket.
///
/// Supplied verbatim by the triggering source once per invocation; the
/// pipeline never mutates it. `content_type` may be absent when the uploader
/// did not set one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageEvent {
    /// Bucket the object was finalized in.
    pub bucket: String,
    /// Slash-delimited object path within the bucket.
    pub path: String,
    /// MIME type recorded on the object, if any.
    pub content_type: Option<String>,
}
