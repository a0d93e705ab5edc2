//! Device-side timing from command profiling counters.
//!
//! A profiling-enabled queue stamps every submitted command with four
//! device-clock timestamps (QUEUED → SUBMIT → START → END). The sample
//! keeps the raw timestamps under their semantic names and derives the
//! interval breakdown from them.

use std::fmt;
use std::time::Duration;

/// The four device-clock timestamps of one submitted command.
///
/// All values are nanoseconds on the device clock and non-decreasing in
/// the listed order for any successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingSample {
    /// When the command entered the host-side queue.
    pub queued_ns: u64,
    /// When the command was submitted to the device.
    pub submitted_ns: u64,
    /// When execution started on the device.
    pub start_ns: u64,
    /// When execution finished on the device.
    pub end_ns: u64,
}

impl TimingSample {
    /// How long the command sat in the host queue before submission.
    pub fn queue_delay_ns(&self) -> u64 {
        self.submitted_ns.saturating_sub(self.queued_ns)
    }

    /// Latency between submission and the device picking the command up.
    pub fn submit_delay_ns(&self) -> u64 {
        self.start_ns.saturating_sub(self.submitted_ns)
    }

    /// Device-side execution time.
    pub fn exec_ns(&self) -> u64 {
        self.end_ns.saturating_sub(self.start_ns)
    }

    /// Full queued-to-finished span.
    pub fn total_ns(&self) -> u64 {
        self.end_ns.saturating_sub(self.queued_ns)
    }

    /// Execution time as a [`Duration`].
    pub fn exec_duration(&self) -> Duration {
        Duration::from_nanos(self.exec_ns())
    }

    /// Whether the four timestamps are non-decreasing.
    pub fn is_monotonic(&self) -> bool {
        self.queued_ns <= self.submitted_ns
            && self.submitted_ns <= self.start_ns
            && self.start_ns <= self.end_ns
    }
}

impl fmt::Display for TimingSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "queue={:>8.3}ms  submit={:>8.3}ms  exec={:>8.3}ms  total={:>8.3}ms",
            self.queue_delay_ns() as f64 / 1e6,
            self.submit_delay_ns() as f64 / 1e6,
            self.exec_ns() as f64 / 1e6,
            self.total_ns() as f64 / 1e6,
        )
    }
}
