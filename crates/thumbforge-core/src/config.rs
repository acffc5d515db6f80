//! Pipeline configuration.
//!
//! The resize box and the I/O timeout are deployment knobs, not algorithm;
//! defaults match the pipeline's original fixed constants.

use std::env;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_MAX_WIDTH: u32 = 200;
const DEFAULT_MAX_HEIGHT: u32 = 200;
const DEFAULT_IO_TIMEOUT_SECS: u64 = 30;

/// Configuration for the thumbnail pipeline.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    /// Maximum thumbnail width in pixels.
    pub max_width: u32,
    /// Maximum thumbnail height in pixels.
    pub max_height: u32,
    /// Budget for each individual store call (get or put). An invocation
    /// must fail cleanly rather than hang on an unresponsive backend.
    pub io_timeout: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
            io_timeout: Duration::from_secs(DEFAULT_IO_TIMEOUT_SECS),
        }
    }
}

impl PipelineConfig {
    /// Build configuration from the environment, falling back to defaults
    /// for unset or unparseable values.
    ///
    /// Recognized variables: `THUMBNAIL_MAX_WIDTH`, `THUMBNAIL_MAX_HEIGHT`,
    /// `STORAGE_IO_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self {
            max_width: env_or("THUMBNAIL_MAX_WIDTH", DEFAULT_MAX_WIDTH),
            max_height: env_or("THUMBNAIL_MAX_HEIGHT", DEFAULT_MAX_HEIGHT),
            io_timeout: Duration::from_secs(env_or(
                "STORAGE_IO_TIMEOUT_SECS",
                DEFAULT_IO_TIMEOUT_SECS,
            )),
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_constants() {
        let config = PipelineConfig::default();
        assert_eq!(config.max_width, 200);
        assert_eq!(config.max_height, 200);
        assert_eq!(config.io_timeout, Duration::from_secs(30));
    }

    #[test]
    fn env_or_falls_back_on_garbage() {
        // Unset and unparseable values both yield the default.
        assert_eq!(env_or("THUMBFORGE_TEST_UNSET_VAR", 7u32), 7);
    }
}
