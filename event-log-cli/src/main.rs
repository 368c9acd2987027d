//! Event Log Analyzer CLI Application
//!
//! This is the command-line interface for the event log analyzer.
//! It uses the event-log-analysis library and adds:
//! - Input handling (files, directories, config.toml)
//! - Parallel analysis of independent logs
//! - Report generation (TXT/JSON)

use anyhow::{Context, Result};
use clap::Parser;
use event_log_analysis::ConformanceMode;
use std::path::PathBuf;

mod config;
mod report;
mod runner;

use config::{AppConfig, OutputFormat};
use report::RunReport;
use runner::RunSettings;

/// Event Log Analyzer - Frequency, conformance and duration analysis of event logs
#[derive(Parser, Debug)]
#[command(name = "event-log-cli")]
#[command(about = "Analyze sequential event logs (<event>,<timestamp> per line)", long_about = None)]
#[command(version)]
struct Args {
    /// Event log file or directory (can be repeated)
    #[arg(short, long, value_name = "PATH")]
    log: Vec<PathBuf>,

    /// Expected process as comma-separated labels (default: Start,Process,End)
    #[arg(short, long, value_name = "LABELS")]
    reference: Option<String>,

    /// Conformance mode: strict or subsequence
    #[arg(short, long, value_name = "MODE")]
    mode: Option<ConformanceMode>,

    /// Only list events whose label contains this text (case-insensitive)
    #[arg(short, long, value_name = "TEXT")]
    filter: Option<String>,

    /// Report format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Include schematic diagram shapes in the report
    #[arg(long)]
    diagram: bool,

    /// Output file for the report (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Path to configuration file (config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Event Log Analyzer CLI v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Using analysis library v{}", event_log_analysis::VERSION);

    if args.log.is_empty() && args.config.is_none() {
        println!("Event Log Analyzer - No input specified");
        println!("\nQuick Start:");
        println!("  event-log-cli --log orders.txt");
        println!("  event-log-cli --log logs/ --reference Start,Review,End --format json");
        println!("\nWith a configuration file:");
        println!("  event-log-cli --config config.toml");
        println!("\nUse --help for more options");
        return Ok(());
    }

    let config = merge_config(&args)?;
    config.validate().context("Invalid configuration")?;
    run(&config)
}

/// Load the config file (if any) and apply command-line overrides
fn merge_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => AppConfig::default(),
    };

    config.input.files.extend(args.log.iter().cloned());
    if let Some(reference) = &args.reference {
        config.analysis.reference = reference.clone();
    }
    if let Some(mode) = args.mode {
        config.analysis.mode = mode;
    }
    if let Some(filter) = &args.filter {
        config.output.filter = Some(filter.clone());
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }
    if args.diagram {
        config.output.include_diagram = true;
    }
    if let Some(output) = &args.output {
        config.output.output_file = Some(output.clone());
    }

    Ok(config)
}

fn run(config: &AppConfig) -> Result<()> {
    let files = runner::expand_inputs(&config.input.files, &config.loader)?;
    let settings = RunSettings {
        loader: config.loader.clone(),
        reference: config.analysis.reference.clone(),
        mode: config.analysis.mode,
        filter: config.output.filter.clone(),
        include_diagram: config.output.include_diagram,
    };

    let run_report = RunReport {
        generated_at: chrono::Utc::now(),
        files: runner::analyze_files(&files, &settings)?,
    };

    let rendered = match config.output.format {
        OutputFormat::Txt => report::render_txt(&run_report),
        OutputFormat::Json => report::render_json(&run_report)?,
    };

    match &config.output.output_file {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write report: {:?}", path))?;
            log::info!("Report written to {:?}", path);
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_override_config() {
        let args = Args::parse_from([
            "event-log-cli",
            "--log",
            "a.txt",
            "--reference",
            "A,B",
            "--mode",
            "subsequence",
            "--format",
            "json",
            "--diagram",
        ]);
        let config = merge_config(&args).unwrap();

        assert_eq!(config.input.files, vec![PathBuf::from("a.txt")]);
        assert_eq!(config.analysis.reference, "A,B");
        assert_eq!(config.analysis.mode, ConformanceMode::Subsequence);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.include_diagram);
    }

    #[test]
    fn test_defaults_without_flags() {
        let args = Args::parse_from(["event-log-cli", "-l", "a.txt"]);
        let config = merge_config(&args).unwrap();

        assert_eq!(config.analysis.reference, event_log_analysis::DEFAULT_REFERENCE);
        assert_eq!(config.output.format, OutputFormat::Txt);
        assert!(config.output.filter.is_none());
    }
}
