//! Reads usernames line by line from standard input and prints every user
//! appearing at least three times within a one-minute window, reproducing
//! the classic click-stream anomaly detection example:
//!
//! ```text
//! $ cargo run --example console_anomalies
//! alice
//! alice
//! bob
//! alice
//! ^D
//! { key: "alice", window_start: ..., count: 3 }
//! ```
use spikewatch::{
    config::DetectorConfig, errorhandling::SpikewatchFatal, sinks::StdOutSink,
    sources::StdinLineSource, worker::Worker,
};

fn main() {
    tracing_subscriber::fmt::init();

    // 60s windows, threshold 3
    let config = DetectorConfig::default();
    let worker = Worker::new(
        config,
        StdinLineSource::new(),
        |line: String| {
            let name = line.trim().to_owned();
            (!name.is_empty()).then_some(name)
        },
        StdOutSink,
    );
    worker.execute().spikewatch_fatal();
}
