//! Sources which feed records into a spikewatch job.
mod iterator;
mod stdin;

pub use iterator::{IteratorSource, TimestampedIteratorSource};
pub use stdin::StdinLineSource;

/// A source of raw, timestamped records for processing.
///
/// Sources are polled by the driver loop one record at a time. A source may
/// return `None` without being finished, e.g. when no record is ready yet.
pub trait EventSource<V, T> {
    /// Poll this source, returning the next record and its timestamp
    /// if one is available.
    fn poll(&mut self) -> Option<(V, T)>;

    /// Return true if this source will never yield another record.
    fn is_finished(&mut self) -> bool;
}
