//! Standalone event log inspector
//!
//! Loads a text event log and prints the records, per-event counts and gap
//! statistics between consecutive events.
//!
//! Usage:
//!   inspect_log <log_file.txt> [--filter <text>] [--limit <count>]
//!
//! Example:
//!   inspect_log orders.txt --filter process --limit 20

use event_log_analysis::analysis::{duration_secs, event_gaps};
use event_log_analysis::{filter_events, AnalysisEngine, LoaderConfig, TraceLoader};
use std::env;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        let program = args.first().map(String::as_str).unwrap_or("inspect_log");
        eprintln!("Usage: {} <log_file> [--filter <text>] [--limit <count>]", program);
        std::process::exit(1);
    }

    let log_path = PathBuf::from(&args[1]);
    let mut filter = String::new();
    let mut limit = usize::MAX;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--filter" if i + 1 < args.len() => {
                filter = args[i + 1].clone();
                i += 2;
            }
            "--limit" if i + 1 < args.len() => {
                limit = args[i + 1].parse()?;
                i += 2;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(1);
            }
        }
    }

    let trace = TraceLoader::load_file(&log_path, &LoaderConfig::new())?;
    println!("=== {} ({} records) ===", log_path.display(), trace.len());

    for record in filter_events(&trace, &filter).into_iter().take(limit) {
        println!("  {:<24} {}", record.event(), record.timestamp().to_rfc3339());
    }

    println!("\n=== EVENT COUNTS ===");
    for (event, count) in AnalysisEngine::process_discovery(&trace).sorted() {
        println!("  {}: {} times", event, count);
    }

    let gaps: Vec<f64> = event_gaps(&trace).map(duration_secs).collect();

    println!("\n=== GAPS ===");
    println!("Average: {:.3}s", AnalysisEngine::average_event_duration(&trace));
    if let (Some(min), Some(max)) = (
        gaps.iter().copied().reduce(f64::min),
        gaps.iter().copied().reduce(f64::max),
    ) {
        println!("Shortest: {:.3}s", min);
        println!("Longest: {:.3}s", max);
    }
    let backwards = gaps.iter().filter(|gap| **gap < 0.0).count();
    if backwards > 0 {
        println!("Out-of-order steps: {}", backwards);
    }

    Ok(())
}
