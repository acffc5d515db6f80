//! Thumbforge Storage Library
//!
//! The narrow blob-store capability the pipeline consumes: `get` and `put`
//! of byte sequences keyed by bucket and slash-delimited path, plus a
//! content-type tag on `put`. Backends implement the [`ObjectStore`] trait;
//! the pipeline holds it as an injected trait object so tests run against
//! [`MemoryStore`] without any network or filesystem access.
//!
//! Keys must not contain `..` or start with `/`; the filesystem backend
//! enforces this so a key can never resolve outside its bucket root.

pub mod local;
pub mod memory;
pub mod traits;

// Re-export commonly used types
pub use local::LocalStore;
pub use memory::{MemoryStore, StoredObject};
pub use traits::{ObjectStore, StoreError, StoreResult};
