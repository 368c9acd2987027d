//! Process discovery: event frequency counting

use crate::types::{EventTrace, FrequencyTable};

/// Count occurrences of each event label
///
/// Labels are compared by exact, case-sensitive text. An empty trace yields an
/// empty table.
pub fn process_discovery(trace: &EventTrace) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for event in trace.labels() {
        table.record(event);
    }

    log::debug!(
        "Discovered {} distinct events across {} records",
        table.len(),
        trace.len()
    );
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EventLog, Timestamp};
    use chrono::{TimeZone, Utc};

    fn at(secs: i64) -> Timestamp {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn trace_of(events: &[&str]) -> EventTrace {
        events
            .iter()
            .enumerate()
            .map(|(i, e)| EventLog::new(*e, at(i as i64)))
            .collect()
    }

    #[test]
    fn test_counts_repeated_events() {
        let table = process_discovery(&trace_of(&["A", "A", "B"]));

        assert_eq!(table.len(), 2);
        assert_eq!(table.count("A"), 2);
        assert_eq!(table.count("B"), 1);
    }

    #[test]
    fn test_empty_trace() {
        let table = process_discovery(&EventTrace::default());
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        let table = process_discovery(&trace_of(&["start", "Start", "START"]));
        assert_eq!(table.len(), 3);
        assert_eq!(table.count("Start"), 1);
    }

    #[test]
    fn test_total_matches_trace_length() {
        let trace = trace_of(&["A", "B", "C", "A", "C", "C", "D"]);
        assert_eq!(process_discovery(&trace).total(), trace.len());
    }

    #[test]
    fn test_order_independent_and_idempotent() {
        let forward = trace_of(&["A", "B", "C", "A", "B", "A"]);
        let reversed = trace_of(&["A", "B", "A", "C", "B", "A"]);

        let first = process_discovery(&forward);
        assert_eq!(first, process_discovery(&reversed));
        assert_eq!(first, process_discovery(&forward));
    }
}
