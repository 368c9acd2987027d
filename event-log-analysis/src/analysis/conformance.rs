//! Conformance checking against a reference sequence of event labels
//!
//! The reference process is a delimited list of labels such as
//! `"Start,Process,End"`. The default check is a strict ordered match: the
//! trace conforms iff its label sequence equals the reference exactly.
//!
//! # Extensions
//!
//! [`ConformanceMode::Subsequence`] relaxes the check so that the reference
//! labels only need to appear in order, with other events allowed in between.
//! [`conformance_distance`] reports how far a trace is from the reference as an
//! edit distance over labels.

use crate::config::ConformanceMode;
use crate::types::{AnalysisError, EventTrace, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator between labels in a reference description
pub const REFERENCE_DELIMITER: char = ',';

/// Expected ordered sequence of event labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceProcess {
    labels: Vec<String>,
}

impl ReferenceProcess {
    /// Parse a comma-delimited reference description
    ///
    /// Fails with [`AnalysisError::InvalidReference`] if the description is
    /// empty or contains an empty label (`"A,,B"`, trailing comma).
    pub fn parse(description: &str) -> Result<Self> {
        if description.trim().is_empty() {
            return Err(AnalysisError::InvalidReference(
                "reference process is empty".to_string(),
            ));
        }

        let labels = description
            .split(REFERENCE_DELIMITER)
            .map(str::trim)
            .enumerate()
            .map(|(position, label)| {
                if label.is_empty() {
                    Err(AnalysisError::InvalidReference(format!(
                        "empty label at position {} in {:?}",
                        position + 1,
                        description
                    )))
                } else {
                    Ok(label.to_string())
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { labels })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True if the reference holds no labels
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl FromStr for ReferenceProcess {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ReferenceProcess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.labels.join(","))
    }
}

/// Strict ordered check of a trace against a reference description
pub fn conformance_check(trace: &EventTrace, expected_process: &str) -> Result<bool> {
    let reference = ReferenceProcess::parse(expected_process)?;
    Ok(conforms(trace, &reference, ConformanceMode::Strict))
}

/// Check a trace against an already parsed reference
pub fn conforms(trace: &EventTrace, reference: &ReferenceProcess, mode: ConformanceMode) -> bool {
    let verdict = match mode {
        ConformanceMode::Strict => {
            trace.len() == reference.len() && trace.labels().eq(reference.labels().iter().map(String::as_str))
        }
        ConformanceMode::Subsequence => {
            let mut expected = reference.labels().iter().peekable();
            for event in trace.labels() {
                if expected.peek().is_some_and(|label| label.as_str() == event) {
                    expected.next();
                }
            }
            expected.peek().is_none()
        }
    };

    log::debug!(
        "Conformance ({}) of {} records against [{}]: {}",
        mode,
        trace.len(),
        reference,
        verdict
    );
    verdict
}

/// Edit distance between the trace's label sequence and the reference
///
/// Counts the insertions, deletions and substitutions of whole events needed to
/// turn the trace into the reference. Zero iff the trace conforms strictly.
pub fn conformance_distance(trace: &EventTrace, reference: &ReferenceProcess) -> usize {
    let observed: Vec<&str> = trace.labels().collect();
    let expected = reference.labels();

    let mut previous: Vec<usize> = (0..=expected.len()).collect();
    let mut current = vec![0; expected.len() + 1];

    for (i, event) in observed.iter().enumerate() {
        current[0] = i + 1;
        for (j, label) in expected.iter().enumerate() {
            let substitution = previous[j] + usize::from(*event != label.as_str());
            current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[expected.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EventLog;
    use chrono::{TimeZone, Utc};

    fn trace_of(events: &[&str]) -> EventTrace {
        events
            .iter()
            .enumerate()
            .map(|(i, e)| EventLog::new(*e, Utc.timestamp_opt(i as i64, 0).unwrap()))
            .collect()
    }

    #[test]
    fn test_exact_match_conforms() {
        let trace = trace_of(&["Start", "Process", "End"]);
        assert!(conformance_check(&trace, "Start,Process,End").unwrap());
    }

    #[test]
    fn test_missing_event_does_not_conform() {
        let trace = trace_of(&["Start", "End"]);
        assert!(!conformance_check(&trace, "Start,Process,End").unwrap());
    }

    #[test]
    fn test_extra_or_reordered_events_do_not_conform() {
        let reference = "Start,Process,End";
        assert!(!conformance_check(&trace_of(&["Start", "Process", "End", "End"]), reference).unwrap());
        assert!(!conformance_check(&trace_of(&["Start", "End", "Process"]), reference).unwrap());
        assert!(!conformance_check(&trace_of(&["start", "process", "end"]), reference).unwrap());
        assert!(!conformance_check(&EventTrace::default(), reference).unwrap());
    }

    #[test]
    fn test_reference_labels_are_trimmed() {
        let trace = trace_of(&["Start", "Process", "End"]);
        assert!(conformance_check(&trace, " Start , Process,End ").unwrap());
    }

    #[test]
    fn test_invalid_reference() {
        let trace = trace_of(&["Start"]);
        for bad in ["", "   ", "Start,,End", "Start,", ","] {
            assert!(
                matches!(conformance_check(&trace, bad), Err(AnalysisError::InvalidReference(_))),
                "expected InvalidReference for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_subsequence_mode_allows_interleaving() {
        let reference = ReferenceProcess::parse("Start,Process,End").unwrap();
        let trace = trace_of(&["Start", "Log", "Process", "Retry", "Process", "End"]);

        assert!(conforms(&trace, &reference, ConformanceMode::Subsequence));
        assert!(!conforms(&trace, &reference, ConformanceMode::Strict));
        assert!(!conforms(
            &trace_of(&["Start", "End", "Process"]),
            &reference,
            ConformanceMode::Subsequence
        ));
    }

    #[test]
    fn test_distance() {
        let reference = ReferenceProcess::parse("Start,Process,End").unwrap();

        assert_eq!(conformance_distance(&trace_of(&["Start", "Process", "End"]), &reference), 0);
        assert_eq!(conformance_distance(&trace_of(&["Start", "End"]), &reference), 1);
        assert_eq!(conformance_distance(&trace_of(&["Start", "Review", "End"]), &reference), 1);
        assert_eq!(conformance_distance(&EventTrace::default(), &reference), 3);
    }

    #[test]
    fn test_reference_display_round_trip() {
        let reference: ReferenceProcess = "Start, Process ,End".parse().unwrap();
        assert_eq!(reference.to_string(), "Start,Process,End");
        assert_eq!(reference.len(), 3);
        assert!(!reference.is_empty());
    }
}
