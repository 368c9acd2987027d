//! Filter-as-you-type over a loaded trace

use crate::types::{EventLog, EventTrace};

/// Records whose label contains `query`, ignoring case, in trace order
///
/// An empty query matches every record.
pub fn filter_events<'a>(trace: &'a EventTrace, query: &str) -> Vec<&'a EventLog> {
    let needle = query.to_lowercase();
    trace
        .iter()
        .filter(|record| record.event().to_lowercase().contains(&needle))
        .collect()
}
