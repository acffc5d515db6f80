//! Thumbforge Core Library
//!
//! This crate provides the domain model shared across all thumbforge
//! components: the storage event record, object path decomposition and
//! thumbnail naming, event classification, and pipeline configuration.
//!
//! Everything here is pure and I/O-free; storage backends live in
//! `thumbforge-storage` and the pipeline itself in `thumbforge-pipeline`.

pub mod classify;
pub mod config;
pub mod constants;
pub mod event;
pub mod path;

// Re-export commonly used types
pub use classify::{classify, Classification};
pub use config::PipelineConfig;
pub use event::StorageEvent;
pub use path::{derive_thumbnail_path, ObjectPath};
