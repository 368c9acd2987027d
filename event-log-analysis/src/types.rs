//! Core types for the event log analysis library
//!
//! This module defines the records produced by the trace loader and consumed by
//! the analysis engine. Records are immutable once created; a trace is replaced
//! wholesale whenever a new log is loaded.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Timestamp type used throughout the library
pub type Timestamp = DateTime<Utc>;

/// Result type for loader and analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors that can occur while loading or analyzing a trace
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Invalid reference process: {0}")]
    InvalidReference(String),

    #[error("Failed to parse timestamp {value:?} on line {line}")]
    TimestampParse { line: usize, value: String },

    #[error("Failed to parse log file: {0}")]
    LogParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One logged occurrence of an activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    event: String,
    timestamp: Timestamp,
}

impl EventLog {
    /// Create a new record
    pub fn new(event: impl Into<String>, timestamp: Timestamp) -> Self {
        Self {
            event: event.into(),
            timestamp,
        }
    }

    /// Activity label
    pub fn event(&self) -> &str {
        &self.event
    }

    /// Point in time the activity occurred
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}

impl fmt::Display for EventLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.event, self.timestamp.to_rfc3339())
    }
}

/// Ordered collection of records for one loaded log, in file order
///
/// Order is interpreted as occurrence order. Timestamps are not required to be
/// monotonic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventTrace {
    records: Vec<EventLog>,
}

impl EventTrace {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&EventLog> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EventLog> {
        self.records.iter()
    }

    /// Event labels in trace order
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(EventLog::event)
    }

    pub fn as_slice(&self) -> &[EventLog] {
        &self.records
    }
}

impl FromIterator<EventLog> for EventTrace {
    fn from_iter<I: IntoIterator<Item = EventLog>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a EventTrace {
    type Item = &'a EventLog;
    type IntoIter = std::slice::Iter<'a, EventLog>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Mapping from event label to occurrence count
///
/// Entry order is unspecified; use [`FrequencyTable::sorted`] for a stable view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count for a label
    pub fn record(&mut self, event: &str) {
        match self.counts.get_mut(event) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(event.to_string(), 1);
            }
        }
    }

    /// Occurrence count for a label (0 if never seen)
    pub fn count(&self, event: &str) -> usize {
        self.counts.get(event).copied().unwrap_or(0)
    }

    /// Number of distinct labels
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts.iter().map(|(event, count)| (event.as_str(), *count))
    }

    /// Entries ordered by descending count, ties broken by label
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self.iter().collect();
        entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}
