//! Thumbforge Pipeline Library
//!
//! The event-triggered thumbnail pipeline: classify an incoming
//! object-finalized event, and for eligible image objects download the
//! source, shrink it to the configured bounding box, and upload the result
//! next to the source under the reserved `_thumb` naming rule.
//!
//! Invocations are stateless and independent; the producer holds no mutable
//! state, so concurrent and duplicate deliveries are safe (a duplicate
//! simply overwrites the same target object). Retries belong to the event
//! source; every failure here is a typed [`ProducerError`] surfaced to the
//! invocation boundary.

pub mod error;
pub mod producer;

// Re-export commonly used types
pub use error::ProducerError;
pub use producer::{InvocationOutcome, ThumbnailProducer};
