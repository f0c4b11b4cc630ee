use serde::{Deserialize, Serialize};

/// A single keyed occurrence on the event timeline.
/// Events always carry a key and a timestamp; the timestamp decides which
/// window the event is counted in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event<K, T> {
    /// Key this event is counted under
    pub key: K,
    /// Event time, in the unit used for window sizes
    pub timestamp: T,
}
impl<K, T> Event<K, T> {
    /// Create a new event from a key and a timestamp
    pub fn new(key: K, timestamp: T) -> Self {
        Self { key, timestamp }
    }
}
