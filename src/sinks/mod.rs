//! Sinks for writing records out of a spikewatch job.
mod stdout;
mod vec_sink;

pub use stdout::StdOutSink;
pub use vec_sink::VecSink;

/// A sink accepting output records.
/// Downstream delivery is treated as reliable; sinks do not report errors.
pub trait EventSink<R> {
    /// Write one record to this sink
    fn sink(&mut self, record: R);
}
