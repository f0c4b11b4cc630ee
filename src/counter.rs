//! Per-key, per-window event counting with threshold emission.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    config::DetectorConfig,
    types::{Event, Key, Timestamp},
    window::{Window, WindowedKey},
};

/// Output record: a key whose count within one window reached the threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdCrossing<K, T> {
    /// Key whose bucket crossed the threshold
    pub key: K,
    /// Start of the window the count was taken in
    pub window_start: T,
    /// Final count of the bucket
    pub count: u64,
}

/// Counts events per `(key, window)` bucket and reports every bucket which
/// meets the configured threshold once its window has closed.
///
/// The counter owns its bucket map exclusively; updates happen through
/// `&mut self`, so increments for a key can never race. Buckets are removed
/// on drain whether or not they met the threshold, which bounds memory to
/// the number of open buckets.
///
/// Bucket lifecycle: created on the first event for a `(key, window)`,
/// incremented on every further event, final once the window end has passed
/// the drain clock, then emitted or dropped and destroyed.
pub struct WindowedThresholdCounter<K, T> {
    config: DetectorConfig<T>,
    buckets: IndexMap<WindowedKey<K, T>, u64>,
}

impl<K, T> WindowedThresholdCounter<K, T>
where
    K: Key,
    T: Timestamp,
{
    /// Create a counter with no open buckets.
    pub fn new(config: DetectorConfig<T>) -> Self {
        Self {
            config,
            buckets: IndexMap::new(),
        }
    }

    /// Record one event into the bucket for its key and window.
    ///
    /// The window is derived from the event timestamp alone: an event at `t`
    /// lands in the window starting at `t - (t % window_size)`.
    pub fn observe(&mut self, event: Event<K, T>) {
        let window = Window::containing(event.timestamp, self.config.window_size);
        let bucket = self
            .buckets
            .entry(WindowedKey {
                window,
                key: event.key,
            })
            .or_insert(0);
        *bucket += 1;
    }

    /// Close every bucket whose window end is at or before `now`.
    ///
    /// Returns a [`ThresholdCrossing`] for each closed bucket whose count is
    /// greater than or equal to the threshold; closed buckets below the
    /// threshold are discarded silently. Either way the bucket is removed,
    /// so a second drain with the same `now` emits nothing for the same
    /// windows.
    ///
    /// Emission order is the bucket creation order, which makes output
    /// deterministic for a given input sequence.
    pub fn drain_closed_windows(&mut self, now: T) -> Vec<ThresholdCrossing<K, T>> {
        let threshold = self.config.threshold;
        let mut crossings = Vec::new();
        self.buckets.retain(|windowed_key, count| {
            if !windowed_key.window.is_closed(now) {
                return true;
            }
            if *count >= threshold {
                crossings.push(ThresholdCrossing {
                    key: windowed_key.key.clone(),
                    window_start: windowed_key.window.start(),
                    count: *count,
                });
            } else {
                debug!(
                    key = ?windowed_key.key,
                    count = *count,
                    threshold,
                    "dropping closed bucket below threshold"
                );
            }
            false
        });
        crossings
    }

    /// Close all remaining buckets, e.g. when ingestion stops at shutdown.
    pub fn flush(&mut self) -> Vec<ThresholdCrossing<K, T>> {
        self.drain_closed_windows(T::MAX)
    }

    /// Number of currently open buckets
    pub fn open_buckets(&self) -> usize {
        self.buckets.len()
    }

    /// True if no bucket is open
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
