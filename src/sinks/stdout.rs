use std::fmt::Debug;

use crate::counter::ThresholdCrossing;

use super::EventSink;

/// Prints every threshold crossing to standard output, one per line.
pub struct StdOutSink;

impl<K, T> EventSink<ThresholdCrossing<K, T>> for StdOutSink
where
    K: Debug,
    T: Debug,
{
    fn sink(&mut self, record: ThresholdCrossing<K, T>) {
        println!(
            "{{ key: {:?}, window_start: {:?}, count: {:?} }}",
            record.key, record.window_start, record.count
        )
    }
}
