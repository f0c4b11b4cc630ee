//! Types and traits for data and time in a spikewatch stream.
mod data;
mod event;
mod time;

pub use data::Key;
pub use event::Event;
pub use time::{processing_time_millis, Timestamp};
