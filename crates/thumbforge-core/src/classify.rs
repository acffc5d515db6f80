//! Event classification: decides whether an event warrants producing a
//! thumbnail, from the event record alone and before any network I/O.

use crate::constants::IMAGE_CONTENT_TYPE_PREFIX;
use crate::event::StorageEvent;
use crate::path::ObjectPath;

/// Outcome of classifying a storage event.
///
/// `NotAnImage` and `AlreadyThumbnail` are successful no-ops, not errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    /// An image object that should be thumbnailed.
    Eligible,
    /// Content type absent or not `image/*`.
    NotAnImage,
    /// The stem already carries the reserved suffix; producing a thumbnail
    /// here would make the pipeline re-trigger itself forever.
    AlreadyThumbnail,
}

/// Classify `event`. Rules are evaluated in order, first match wins:
/// content-type check, then the thumbnail-suffix loop guard.
pub fn classify(event: &StorageEvent) -> Classification {
    match event.content_type.as_deref() {
        Some(ct) if ct.starts_with(IMAGE_CONTENT_TYPE_PREFIX) => {}
        _ => return Classification::NotAnImage,
    }

    if ObjectPath::parse(&event.path).is_thumbnail() {
        return Classification::AlreadyThumbnail;
    }

    Classification::Eligible
}
