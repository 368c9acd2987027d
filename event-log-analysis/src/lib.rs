//! Event Log Analysis Library
//!
//! A stateless library for loading sequential event logs (event label +
//! timestamp pairs) and running elementary analyses over them.
//!
//! # Architecture
//!
//! This library is intentionally small:
//! - Loads `<event>,<timestamp>` text logs into an ordered trace
//! - Counts event frequencies ("process discovery")
//! - Computes the average gap between consecutive events
//! - Checks a trace against an expected reference sequence
//! - Provides a case-insensitive label filter and schematic diagram primitives
//!
//! The library does NOT:
//! - Infer process models (no Petri nets, no Alpha-miner)
//! - Render anything
//! - Generate reports
//!
//! Report formatting and input handling live in the application layer
//! (event-log-cli).
//!
//! # Example Usage
//!
//! ```no_run
//! use event_log_analysis::{AnalysisEngine, ConformanceMode, LoaderConfig, TraceLoader};
//! use std::path::Path;
//!
//! let trace = TraceLoader::load_file(Path::new("orders.txt"), &LoaderConfig::new()).unwrap();
//!
//! let report = AnalysisEngine::analyze(&trace, "Start,Process,End", ConformanceMode::Strict).unwrap();
//! for (event, count) in report.frequencies.sorted() {
//!     println!("{}: {}", event, count);
//! }
//! println!("Conformant: {}", report.conformant);
//! println!("Average Event Duration: {}", report.average_duration_secs);
//! ```

// Public modules
pub mod analysis;
pub mod config;
pub mod diagram;
pub mod filter;
pub mod loader;
pub mod types;

// Re-export main types for convenience
pub use analysis::{AnalysisEngine, AnalysisReport, ReferenceProcess, DEFAULT_REFERENCE};
pub use config::{ConformanceMode, LoaderConfig};
pub use diagram::{Fill, Shape};
pub use filter::filter_events;
pub use loader::TraceLoader;
pub use types::{AnalysisError, EventLog, EventTrace, FrequencyTable, Result, Timestamp};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_basics() {
        // Smoke test: load, analyze, filter
        let trace = TraceLoader::load_str("Start,0\nProcess,10\nEnd,30\n", &LoaderConfig::new()).unwrap();
        let report = AnalysisEngine::analyze(&trace, DEFAULT_REFERENCE, ConformanceMode::default()).unwrap();

        assert!(report.conformant);
        assert_eq!(filter_events(&trace, "end").len(), 1);
        assert_eq!(diagram::layout(&trace).len(), 14);
    }
}
