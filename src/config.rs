//! Job configuration.
//!
//! All knobs of the computation live in one struct passed at construction;
//! there is no global or static configuration.
use bon::Builder;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Timestamp;

/// Window width of the original click-counting job, in milliseconds.
pub const DEFAULT_WINDOW_SIZE_MS: u64 = 60_000;
/// Per-window count at which the original click-counting job reports a key.
pub const DEFAULT_THRESHOLD: u64 = 3;

/// Configuration for a [`WindowedThresholdCounter`](crate::counter::WindowedThresholdCounter).
///
/// `window_size` is in whatever unit the stream's timestamps use and must be
/// positive. `threshold` is the minimum count at which a closed bucket is
/// reported; ties are included (`>=` semantics).
#[derive(Debug, Clone, Copy, Builder, Serialize, Deserialize)]
pub struct DetectorConfig<T> {
    /// Width of each tumbling window, in the unit of event timestamps
    pub window_size: T,
    /// Minimum count at which a closed bucket is emitted
    #[builder(default = DEFAULT_THRESHOLD)]
    pub threshold: u64,
}

impl Default for DetectorConfig<u64> {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE_MS,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl<T> DetectorConfig<T>
where
    T: Timestamp,
{
    /// Check this configuration is usable for bucketing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_size <= T::ZERO {
            return Err(ConfigError::WindowSize(format!("{:?}", self.window_size)));
        }
        if self.threshold == 0 {
            return Err(ConfigError::Threshold);
        }
        Ok(())
    }
}

/// Possible errors in a [`DetectorConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Zero-width windows cannot bucket anything
    #[error("Window size must be positive, got {0}")]
    WindowSize(String),
    /// A threshold of 0 would emit buckets which never saw an event
    #[error("Threshold must be at least 1")]
    Threshold,
}
