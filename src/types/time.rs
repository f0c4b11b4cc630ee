//! Types and traits specific to time-keeping and windowed streams.

use std::{
    hash::Hash,
    ops::{Add, Rem, Sub},
    time::{SystemTime, UNIX_EPOCH},
};

/// Trait implemented by all types usable as timestamps in spikewatch.
///
/// The arithmetic bounds are exactly what tumbling-window bucketing needs:
/// a window start is computed as `ts - (ts % size)`.
pub trait Timestamp:
    PartialOrd
    + Ord
    + Copy
    + Hash
    + std::fmt::Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Rem<Output = Self>
    + 'static
{
    /// Maximum or final value of this type. This is the last possible timestamp.
    const MAX: Self;
    /// Minumum value of this type.
    const MIN: Self;
    /// Zero of this type. Window sizes must be strictly greater than this,
    /// signed timestamps may lie below it.
    const ZERO: Self;
}

/// Implements `Timestamp` for numeric types
macro_rules! timestamp_impl {
    ($t:ty) => {
        impl Timestamp for $t {
            const MAX: $t = <$t>::MAX;
            const MIN: $t = <$t>::MIN;
            const ZERO: $t = 0;
        }
    };
}

timestamp_impl!(usize);
timestamp_impl!(u8);
timestamp_impl!(u16);
timestamp_impl!(u32);
timestamp_impl!(u64);
timestamp_impl!(u128);

timestamp_impl!(isize);
timestamp_impl!(i8);
timestamp_impl!(i16);
timestamp_impl!(i32);
timestamp_impl!(i64);
timestamp_impl!(i128);

/// Milliseconds since the Unix epoch per the system clock.
/// Sources which stamp records on arrival use this as their event time.
pub fn processing_time_millis() -> u64 {
    let start = SystemTime::now();
    let millis = start
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis();
    u64::try_from(millis).unwrap_or(u64::MAX)
}
