//! Tumbling windows: contiguous, fixed-size, non-overlapping time buckets.
use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// A half-open time interval `[start, start + size)`.
///
/// Tumbling windows partition the event timeline back-to-back, so every
/// timestamp belongs to exactly one window of a given size. The windows
/// touching the edges of the timestamp domain are clamped: the first window
/// starts no earlier than `T::MIN` and the last one ends at `T::MAX`, which
/// is therefore the only timestamp counted at the window end itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Window<T> {
    start: T,
    end: T,
}

impl<T> Window<T>
where
    T: Timestamp,
{
    /// The window containing `timestamp` when the timeline is partitioned
    /// into buckets of width `size`. `size` must be positive; a
    /// [`DetectorConfig`](crate::config::DetectorConfig) validates this.
    pub fn containing(timestamp: T, size: T) -> Self {
        let rem = timestamp % size;
        let start = if rem < T::ZERO {
            // the truncating remainder rounds negative timestamps toward
            // zero, one window too high
            let up = timestamp - rem;
            if up < T::MIN + size {
                T::MIN
            } else {
                up - size
            }
        } else {
            timestamp - rem
        };
        let end = if start > T::MAX - size {
            T::MAX
        } else {
            start + size
        };
        Self { start, end }
    }

    /// Inclusive lower bound of this window
    pub fn start(&self) -> T {
        self.start
    }

    /// Exclusive upper bound of this window
    pub fn end(&self) -> T {
        self.end
    }

    /// True once `now` has reached or passed this window's end.
    /// A closed window's counts are final.
    pub fn is_closed(&self, now: T) -> bool {
        self.end <= now
    }
}

/// Pairing of a window and a key; identifies one counting bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowedKey<K, T> {
    /// The window this bucket counts in
    pub window: Window<T>,
    /// The key this bucket counts for
    pub key: K,
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::Window;

    /// all timestamps up to the window end map into the same window,
    /// the end itself starts the next one
    #[test]
    fn assigns_timestamps_to_buckets() {
        let w = Window::containing(0u64, 60_000);
        assert_eq!(w.start(), 0);
        assert_eq!(w.end(), 60_000);
        assert_eq!(Window::containing(59_999u64, 60_000), w);
        assert_ne!(Window::containing(60_000u64, 60_000), w);
        assert_eq!(Window::containing(60_000u64, 60_000).start(), 60_000);
    }

    /// negative timestamps round down to their window start, not toward zero
    #[test]
    fn buckets_negative_timestamps() {
        let w = Window::containing(-10i64, 60_000);
        assert_eq!(w.start(), -60_000);
        assert_eq!(w.end(), 0);
        assert!(w.start() <= -10 && -10 < w.end());

        // aligned negative timestamps start their own window
        assert_eq!(Window::containing(-60_000i64, 60_000).start(), -60_000);
        assert_eq!(Window::containing(-60_001i64, 60_000).start(), -120_000);
    }

    /// the last window of the timestamp domain ends at the maximum timestamp
    /// instead of overflowing
    #[test]
    fn clamps_final_window() {
        let w = Window::containing(u64::MAX, 60_000);
        assert_eq!(w.start(), u64::MAX - (u64::MAX % 60_000));
        assert_eq!(w.end(), u64::MAX);
        assert!(!w.is_closed(u64::MAX - 1));
        assert!(w.is_closed(u64::MAX));
    }

    /// the first window of a signed domain starts at the minimum timestamp
    #[test]
    fn clamps_first_window() {
        let w = Window::containing(i64::MIN, 60_000);
        assert_eq!(w.start(), i64::MIN);
        assert!(w.start() <= i64::MIN && i64::MIN < w.end());
    }

    /// a window only closes once the clock reaches its end
    #[test]
    fn closes_at_end() {
        let w = Window::containing(10u64, 60_000);
        assert!(!w.is_closed(0));
        assert!(!w.is_closed(59_999));
        assert!(w.is_closed(60_000));
        assert!(w.is_closed(u64::MAX));
    }

    proptest! {
        /// every timestamp belongs to exactly one size-aligned window
        #[test]
        fn every_timestamp_has_exactly_one_window(
            ts in 0u64..(u64::MAX / 2),
            size in 1u64..1_000_000,
        ) {
            let w = Window::containing(ts, size);
            prop_assert!(w.start() <= ts);
            prop_assert!(ts < w.end());
            prop_assert_eq!(w.start() % size, 0);
            prop_assert_eq!(w.end(), w.start() + size);
        }

        /// negative timestamps obey the same containment and alignment
        #[test]
        fn every_signed_timestamp_has_exactly_one_window(
            ts in -1_000_000_000_000i64..1_000_000_000_000,
            size in 1i64..1_000_000,
        ) {
            let w = Window::containing(ts, size);
            prop_assert!(w.start() <= ts);
            prop_assert!(ts < w.end());
            prop_assert_eq!(w.start() % size, 0);
            prop_assert_eq!(w.end(), w.start() + size);
        }
    }
}
