//! Comparison and timing instrumentation.

use std::fmt;
use std::fmt::Display;
use std::time::{Duration, Instant};

/// Observations of a single sort or search invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Metrics {
    /// Number of key comparisons performed.
    pub comparisons: u64,
    /// Wall-clock duration of the algorithm body, measured with a monotonic clock.
    pub elapsed: Duration,
}

impl Metrics {
    /// Elapsed time in fractional milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_nanos() as f64 / 1_000_000.0
    }
}

impl Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "comparisons: {}, time: {:.4} ms", self.comparisons, self.elapsed_ms())
    }
}

/// Comparison counter paired with a stopwatch.
/// Started right before an algorithm body and finished right after it.
pub(crate) struct Probe {
    comparisons: u64,
    started: Instant,
}

impl Probe {
    pub fn start() -> Self {
        Probe {
            comparisons: 0,
            started: Instant::now(),
        }
    }

    /// Accounts for one key comparison.
    #[inline]
    pub fn compare(&mut self) {
        self.comparisons += 1;
    }

    pub fn finish(self) -> Metrics {
        Metrics {
            comparisons: self.comparisons,
            elapsed: self.started.elapsed(),
        }
    }
}
