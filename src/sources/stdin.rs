use std::io::{BufRead, Lines, StdinLock};

use tracing::warn;

use crate::types::processing_time_millis;

use super::EventSource;

/// A source reading one record per line from standard input, stamped with
/// processing time at arrival.
///
/// This reproduces the console-producer workflow of the original job: pipe
/// line-separated keys in and treat each line as one event. Polling blocks
/// until a line is available; the source finishes on EOF or a read error.
pub struct StdinLineSource {
    lines: Lines<StdinLock<'static>>,
    finished: bool,
}

impl StdinLineSource {
    /// Create a source reading lines from this process' standard input
    pub fn new() -> Self {
        Self {
            lines: std::io::stdin().lock().lines(),
            finished: false,
        }
    }
}

impl Default for StdinLineSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource<String, u64> for StdinLineSource {
    fn poll(&mut self) -> Option<(String, u64)> {
        match self.lines.next() {
            Some(Ok(line)) => Some((line, processing_time_millis())),
            Some(Err(e)) => {
                warn!(error = %e, "Failed reading stdin, stopping source");
                self.finished = true;
                None
            }
            None => {
                self.finished = true;
                None
            }
        }
    }

    fn is_finished(&mut self) -> bool {
        self.finished
    }
}
