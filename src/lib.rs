//! Spikewatch is a small stream-processing primitive: it counts keyed events
//! in tumbling time windows and reports every key whose per-window count
//! reaches a configurable threshold.
//!
//! The counter is an explicit component driven by method calls, not a
//! declarative pipeline: a driver loop feeds it events via
//! [`observe`](counter::WindowedThresholdCounter::observe) and collects
//! emissions via
//! [`drain_closed_windows`](counter::WindowedThresholdCounter::drain_closed_windows).
//!
//! # Example
//! ```rust
//! use spikewatch::config::DetectorConfig;
//! use spikewatch::counter::WindowedThresholdCounter;
//! use spikewatch::types::Event;
//!
//! let config = DetectorConfig::builder().window_size(60_000u64).build();
//! let mut counter = WindowedThresholdCounter::new(config);
//!
//! for ts in [0, 10, 20] {
//!     counter.observe(Event::new("alice", ts));
//! }
//! counter.observe(Event::new("bob", 30));
//!
//! // "alice" appeared three times in the window [0, 60000), "bob" only once
//! let crossings = counter.drain_closed_windows(60_000);
//! assert_eq!(crossings.len(), 1);
//! assert_eq!(crossings[0].key, "alice");
//! assert_eq!(crossings[0].count, 3);
//! ```
pub mod config;
pub mod counter;
pub mod errorhandling;
pub mod sinks;
pub mod sources;
pub mod types;
pub mod window;
pub mod worker;
