//! Analysis engine
//!
//! Pure, synchronous functions over an [`EventTrace`]. Every call receives its
//! own trace and returns a fresh result; nothing is cached between calls.

pub mod conformance;
pub mod discovery;
pub mod duration;

pub use conformance::{conformance_check, conformance_distance, conforms, ReferenceProcess};
pub use discovery::process_discovery;
pub use duration::{average_event_duration, duration_secs, event_gaps};

use crate::config::ConformanceMode;
use crate::types::{EventTrace, FrequencyTable, Result};
use serde::{Deserialize, Serialize};

/// Reference process used when none is configured
pub const DEFAULT_REFERENCE: &str = "Start,Process,End";

/// Results of running every analysis over one trace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Number of records analyzed
    pub event_count: usize,
    /// Occurrences per event label
    pub frequencies: FrequencyTable,
    /// Reference the trace was checked against
    pub reference: ReferenceProcess,
    /// Mode used for the conformance verdict
    pub mode: ConformanceMode,
    /// Conformance verdict
    pub conformant: bool,
    /// Edit distance to the reference (0 iff strictly conformant)
    pub distance: usize,
    /// Average gap between consecutive events, in seconds
    pub average_duration_secs: f64,
}

/// Entry point bundling the individual analyses
pub struct AnalysisEngine;

impl AnalysisEngine {
    /// Count occurrences of each event label
    pub fn process_discovery(trace: &EventTrace) -> FrequencyTable {
        discovery::process_discovery(trace)
    }

    /// Average gap between consecutive events, in seconds
    pub fn average_event_duration(trace: &EventTrace) -> f64 {
        duration::average_event_duration(trace)
    }

    /// Strict ordered conformance check against a delimited reference
    pub fn conformance_check(trace: &EventTrace, expected_process: &str) -> Result<bool> {
        conformance::conformance_check(trace, expected_process)
    }

    /// Run all analyses over a trace
    ///
    /// The reference is validated before anything else runs, so an invalid
    /// reference never produces a partial report.
    pub fn analyze(
        trace: &EventTrace,
        expected_process: &str,
        mode: ConformanceMode,
    ) -> Result<AnalysisReport> {
        let reference = ReferenceProcess::parse(expected_process)?;
        log::info!("Analyzing {} records", trace.len());

        let report = AnalysisReport {
            event_count: trace.len(),
            frequencies: discovery::process_discovery(trace),
            conformant: conformance::conforms(trace, &reference, mode),
            distance: conformance::conformance_distance(trace, &reference),
            average_duration_secs: duration::average_event_duration(trace),
            reference,
            mode,
        };

        log::debug!(
            "Analysis done: {} distinct events, conformant={}, avg={}s",
            report.frequencies.len(),
            report.conformant,
            report.average_duration_secs
        );
        Ok(report)
    }
}
