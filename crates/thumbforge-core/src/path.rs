//! Object path decomposition and thumbnail naming.
//!
//! Object paths are slash-delimited bucket keys, not filesystem paths, so
//! decomposition is done on the string itself rather than through
//! `std::path` (which would apply platform separator rules).

use crate::constants::THUMB_SUFFIX;

/// Decomposed object path: directory, stem (base name without extension),
/// and extension. Pure function of the input string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectPath {
    dir: String,
    stem: String,
    ext: Option<String>,
}

impl ObjectPath {
    /// Split `path` at its last `/` and last `.`.
    ///
    /// A leading dot in the base name is part of the stem (`.hidden` has no
    /// extension), matching `Path::file_stem` semantics.
    pub fn parse(path: &str) -> Self {
        let (dir, base) = match path.rsplit_once('/') {
            Some((dir, base)) => (dir.to_string(), base),
            None => (String::new(), path),
        };

        let (stem, ext) = match base.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => (stem.to_string(), Some(ext.to_string())),
            _ => (base.to_string(), None),
        };

        ObjectPath { dir, stem, ext }
    }

    /// Directory portion without a trailing slash; empty for root-level paths.
    pub fn dir(&self) -> &str {
        &self.dir
    }

    /// Base name without its extension.
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Extension without the leading dot, if present.
    pub fn extension(&self) -> Option<&str> {
        self.ext.as_deref()
    }

    /// Whether the stem carries the reserved thumbnail suffix.
    pub fn is_thumbnail(&self) -> bool {
        self.stem.ends_with(THUMB_SUFFIX)
    }

    /// Path of the thumbnail derived from this object:
    /// `dir/stem_thumb.ext`, keeping the source extension.
    pub fn thumbnail_path(&self) -> String {
        let mut out = String::new();
        if !self.dir.is_empty() {
            out.push_str(&self.dir);
            out.push('/');
        }
        out.push_str(&self.stem);
        out.push_str(THUMB_SUFFIX);
        if let Some(ext) = &self.ext {
            out.push('.');
            out.push_str(ext);
        }
        out
    }
}

/// Derive the thumbnail object path for `path`.
///
/// Always computed from the original event path so the naming rule stays a
/// pure function; callers must gate on classification first (the classifier,
/// not this function, is the reprocessing guard).
pub fn derive_thumbnail_path(path: &str) -> String {
    ObjectPath::parse(path).thumbnail_path()
}
