//! Thumbforge Processing Library
//!
//! Byte-level image transformation: decode a downloaded buffer, shrink it to
//! fit a bounding box without ever enlarging, and encode it back to bytes in
//! a format chosen from the source content type.

pub mod resize;
pub mod thumbnail;

// Re-export commonly used types
pub use resize::{fit_within, shrink_to_fit, BoundingBox};
pub use thumbnail::{detect_format, render_thumbnail, ThumbnailError};
