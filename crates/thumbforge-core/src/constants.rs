//! Pipeline-wide constants.

/// Reserved suffix appended to a thumbnail's stem. An object whose stem
/// already ends with this suffix is never reprocessed; the classifier checks
/// it before any network I/O so a thumbnail upload cannot re-trigger the
/// pipeline.
pub const THUMB_SUFFIX: &str = "_thumb";

/// Content-type prefix that marks an object as an image.
pub const IMAGE_CONTENT_TYPE_PREFIX: &str = "image/";
