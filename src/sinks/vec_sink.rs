use std::{ops::RangeBounds, sync::Arc, sync::Mutex};

use super::EventSink;

/// A helper to write records into a shared vector and take them out again.
/// This is mainly useful to extract values from a job in unit tests.
/// This struct uses an `Arc<Mutex<Vec<T>>>` internally, so it can be freely
/// cloned.
#[derive(Debug, Clone)]
pub struct VecSink<T> {
    inner: Arc<Mutex<Vec<T>>>,
}
impl<T> Default for VecSink<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> VecSink<T> {
    /// Create a new sink which collects all records into a `Vec`
    pub fn new() -> Self {
        VecSink {
            inner: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Put a value into this sink
    pub fn give(&self, value: T) {
        self.inner.lock().unwrap().push(value)
    }

    /// Take the given range out of this sink
    pub fn drain_vec<R: RangeBounds<usize>>(&self, range: R) -> Vec<T> {
        self.inner.lock().unwrap().drain(range).collect()
    }
}

impl<T> IntoIterator for VecSink<T> {
    type Item = T;

    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.drain_vec(..).into_iter()
    }
}

impl<R> EventSink<R> for VecSink<R> {
    fn sink(&mut self, record: R) {
        self.give(record);
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn clones_share_storage() {
        let sink = VecSink::new();
        let sink_a = sink.clone();

        for i in 0..5 {
            sink.give(i)
        }

        let collected = sink_a.drain_vec(..);
        assert_eq!(collected, (0..5).collect_vec())
    }
}
