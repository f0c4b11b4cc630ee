use std::iter::{Enumerate, Peekable};

use super::EventSource;

/// A source which yields values from an iterator.
///
/// Emitted values are timestamped with their index in the iterator, so
/// window sizes against this source are expressed in record counts.
///
/// # Example
/// ```rust
/// use spikewatch::sources::{EventSource, IteratorSource};
///
/// let mut source = IteratorSource::new(["a", "b"]);
/// assert_eq!(source.poll(), Some(("a", 0)));
/// assert_eq!(source.poll(), Some(("b", 1)));
/// assert!(source.is_finished());
/// ```
pub struct IteratorSource<V>(Peekable<Enumerate<Box<dyn Iterator<Item = V>>>>);

impl<V> IteratorSource<V> {
    /// Create a new source from an iterable value
    pub fn new<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = V>,
        <I as IntoIterator>::IntoIter: 'static,
    {
        let boxed: Box<dyn Iterator<Item = V>> = Box::new(iter.into_iter());
        Self(boxed.enumerate().peekable())
    }
}

impl<V> EventSource<V, usize> for IteratorSource<V> {
    fn poll(&mut self) -> Option<(V, usize)> {
        self.0.next().map(|x| (x.1, x.0))
    }

    fn is_finished(&mut self) -> bool {
        self.0.peek().is_none()
    }
}

/// A source which yields explicit `(value, timestamp)` pairs from an
/// iterator. Useful for replays and tests where event time matters.
pub struct TimestampedIteratorSource<V, T>(Peekable<Box<dyn Iterator<Item = (V, T)>>>);

impl<V, T> TimestampedIteratorSource<V, T> {
    /// Create a new source from an iterable of `(value, timestamp)` pairs
    pub fn new<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (V, T)>,
        <I as IntoIterator>::IntoIter: 'static,
    {
        let boxed: Box<dyn Iterator<Item = (V, T)>> = Box::new(iter.into_iter());
        Self(boxed.peekable())
    }
}

impl<V, T> EventSource<V, T> for TimestampedIteratorSource<V, T> {
    fn poll(&mut self) -> Option<(V, T)> {
        self.0.next()
    }

    fn is_finished(&mut self) -> bool {
        self.0.peek().is_none()
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    /// values should be timestamped with their iterator index
    #[test]
    fn emits_indexed_timestamps() {
        let mut source = IteratorSource::new(42..52);
        let mut out = Vec::new();
        while let Some(x) = source.poll() {
            out.push(x);
        }
        let expected = (42..52).enumerate().map(|(t, v)| (v, t)).collect_vec();
        assert_eq!(out, expected);
        assert!(source.is_finished());
    }

    /// explicit timestamps pass through untouched
    #[test]
    fn emits_explicit_timestamps() {
        let mut source = TimestampedIteratorSource::new([("a", 100u64), ("b", 50)]);
        assert!(!source.is_finished());
        assert_eq!(source.poll(), Some(("a", 100)));
        assert_eq!(source.poll(), Some(("b", 50)));
        assert_eq!(source.poll(), None);
        assert!(source.is_finished());
    }
}
