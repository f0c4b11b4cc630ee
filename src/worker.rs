//! The driver loop wiring a source through the counter into a sink.
use std::marker::PhantomData;

use thiserror::Error;
use tracing::{debug, info, span, Level};

use crate::{
    config::{ConfigError, DetectorConfig},
    counter::{ThresholdCrossing, WindowedThresholdCounter},
    sinks::EventSink,
    sources::EventSource,
    types::{Event, Key, Timestamp},
};

/// A single-threaded worker which polls an [`EventSource`], counts events
/// per key and window, and writes threshold crossings to an [`EventSink`].
///
/// The worker owns source, counter and sink exclusively, so per-key
/// increments can never race.
///
/// Window closure follows event time: the worker keeps a watermark at the
/// maximum observed timestamp and drains the counter against it after every
/// record, so a window closes as soon as some event proves time has moved
/// past its end. When the source finishes, all still-open buckets are
/// flushed. Sources which stamp records on arrival make this equivalent to
/// processing-time closure.
///
/// The key extractor maps raw source records to keys, mirroring the original
/// job's re-keying of each record by its value. Records for which it returns
/// `None` are skipped silently.
pub struct Worker<Src, Snk, F, K, V, T> {
    config: DetectorConfig<T>,
    source: Src,
    key_fn: F,
    sink: Snk,
    _types: PhantomData<(K, V)>,
}

impl<Src, Snk, F, K, V, T> Worker<Src, Snk, F, K, V, T>
where
    Src: EventSource<V, T>,
    Snk: EventSink<ThresholdCrossing<K, T>>,
    F: FnMut(V) -> Option<K>,
    K: Key,
    T: Timestamp,
{
    /// Create a worker from its parts. The key extractor decides which key
    /// a raw record is counted under, `None` meaning the record is dropped.
    pub fn new(config: DetectorConfig<T>, source: Src, key_fn: F, sink: Snk) -> Self {
        Self {
            config,
            source,
            key_fn,
            sink,
            _types: PhantomData,
        }
    }

    /// Run this worker until its source is exhausted, returning a config
    /// error before any record is processed if the configuration is unusable.
    pub fn execute(mut self) -> Result<(), ExecutionError> {
        self.config.validate()?;
        let _span = span!(Level::INFO, "worker").entered();
        let mut counter = WindowedThresholdCounter::new(self.config);
        let mut watermark: Option<T> = None;

        info!("Starting ingestion");
        while !self.source.is_finished() {
            let Some((value, timestamp)) = self.source.poll() else {
                continue;
            };
            let Some(key) = (self.key_fn)(value) else {
                debug!("Skipping record with no usable key");
                continue;
            };
            counter.observe(Event::new(key, timestamp));

            let advanced = match watermark {
                Some(w) => w.max(timestamp),
                None => timestamp,
            };
            watermark = Some(advanced);
            for crossing in counter.drain_closed_windows(advanced) {
                debug!(?crossing, "Emitting threshold crossing");
                self.sink.sink(crossing);
            }
        }

        for crossing in counter.flush() {
            debug!(?crossing, "Emitting threshold crossing at shutdown");
            self.sink.sink(crossing);
        }
        info!("Finished execution");
        Ok(())
    }
}

/// Possible errors when running a worker
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("Invalid configuration")]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use crate::{
        config::DetectorConfig,
        counter::ThresholdCrossing,
        sinks::VecSink,
        sources::TimestampedIteratorSource,
        worker::Worker,
    };

    fn run_job(records: Vec<(&'static str, u64)>) -> Vec<ThresholdCrossing<String, u64>> {
        let collector = VecSink::new();
        let worker = Worker::new(
            DetectorConfig::default(),
            TimestampedIteratorSource::new(records),
            |name: &str| (!name.is_empty()).then(|| name.to_owned()),
            collector.clone(),
        );
        worker.execute().expect("Executing worker failed");
        collector.into_iter().collect_vec()
    }

    /// the original job's scenario: alice clicks three times within a
    /// minute, bob and charlie do not
    #[test]
    fn reports_anomalous_user() {
        let out = run_job(vec![
            ("alice", 0),
            ("alice", 10),
            ("bob", 15),
            ("alice", 20),
            ("charlie", 30),
            // next window, proves the first one closed
            ("bob", 70_000),
        ]);
        assert_eq!(
            out,
            vec![ThresholdCrossing {
                key: "alice".to_owned(),
                window_start: 0,
                count: 3
            }]
        );
    }

    /// open buckets are flushed when the source runs dry
    #[test]
    fn flushes_open_windows_at_shutdown() {
        let out = run_job(vec![("alice", 0), ("alice", 10), ("alice", 20)]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].count, 3);
    }

    /// records without a usable key are skipped, not counted
    #[test]
    fn skips_keyless_records() {
        let out = run_job(vec![
            ("alice", 0),
            ("", 5),
            ("", 10),
            ("alice", 15),
            ("alice", 20),
        ]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].key, "alice");
        assert_eq!(out[0].count, 3);
    }

    /// a key crossing the threshold in two windows is reported twice
    #[test]
    fn reports_each_window_separately() {
        let mut records = vec![];
        for w in [0u64, 60_000] {
            records.extend([("alice", w), ("alice", w + 10), ("alice", w + 20)]);
        }
        let out = run_job(records);
        let starts = out.iter().map(|c| c.window_start).collect_vec();
        assert_eq!(starts, vec![0, 60_000]);
        assert!(out.iter().all(|c| c.count == 3));
    }

    /// an unusable configuration fails before ingestion
    #[test]
    fn rejects_bad_config() {
        let worker = Worker::new(
            DetectorConfig::builder().window_size(0u64).build(),
            TimestampedIteratorSource::new(vec![("alice", 0)]),
            |name: &str| Some(name.to_owned()),
            VecSink::new(),
        );
        assert!(worker.execute().is_err());
    }
}
