//! Average elapsed time between consecutive events

use crate::types::EventTrace;
use chrono::Duration;

/// Average gap between consecutive records, in seconds
///
/// Returns 0 for traces with fewer than two records. Gaps are taken in trace
/// order, so an out-of-order timestamp contributes a negative gap.
pub fn average_event_duration(trace: &EventTrace) -> f64 {
    if trace.len() < 2 {
        return 0.0;
    }

    let total = event_gaps(trace).fold(Duration::zero(), |acc, gap| acc + gap);

    let intervals = (trace.len() - 1) as f64;
    duration_secs(total) / intervals
}

/// Elapsed time between each pair of consecutive records, in trace order
pub fn event_gaps(trace: &EventTrace) -> impl Iterator<Item = Duration> + '_ {
    trace
        .as_slice()
        .windows(2)
        .map(|pair| pair[1].timestamp() - pair[0].timestamp())
}

/// Convert a duration to fractional seconds
pub fn duration_secs(duration: Duration) -> f64 {
    match duration.num_nanoseconds() {
        Some(nanos) => nanos as f64 / 1_000_000_000.0,
        // Beyond ~292 years of nanoseconds
        None => duration.num_milliseconds() as f64 / 1_000.0,
    }
}
