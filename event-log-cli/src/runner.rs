//! Multi-file analysis
//!
//! Each input file is an independent trace, so files are loaded and analyzed
//! in parallel.

use crate::report::FileReport;
use anyhow::{Context, Result};
use event_log_analysis::{
    diagram, filter_events, AnalysisEngine, ConformanceMode, LoaderConfig, TraceLoader,
};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Settings shared by every file in a run
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub loader: LoaderConfig,
    pub reference: String,
    pub mode: ConformanceMode,
    pub filter: Option<String>,
    pub include_diagram: bool,
}

/// Replace directories with the log files they contain
pub fn expand_inputs(inputs: &[PathBuf], loader: &LoaderConfig) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let found = TraceLoader::discover(input, loader)
                .with_context(|| format!("Failed to scan directory: {:?}", input))?;
            if found.is_empty() {
                log::warn!("No event logs found in {:?}", input);
            }
            files.extend(found);
        } else {
            files.push(input.clone());
        }
    }
    Ok(files)
}

/// Analyze every file, preserving input order in the result
pub fn analyze_files(files: &[PathBuf], settings: &RunSettings) -> Result<Vec<FileReport>> {
    log::info!("Analyzing {} file(s)", files.len());
    files
        .par_iter()
        .map(|path| analyze_file(path, settings))
        .collect()
}

fn analyze_file(path: &Path, settings: &RunSettings) -> Result<FileReport> {
    let trace = TraceLoader::load_file(path, &settings.loader)
        .with_context(|| format!("Failed to load event log: {:?}", path))?;

    let analysis = AnalysisEngine::analyze(&trace, &settings.reference, settings.mode)
        .with_context(|| format!("Failed to analyze event log: {:?}", path))?;

    let matched = settings.filter.as_deref().map(|query| {
        filter_events(&trace, query)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    });

    let diagram = settings.include_diagram.then(|| diagram::layout(&trace));

    Ok(FileReport {
        path: path.to_path_buf(),
        analysis,
        matched,
        diagram,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn settings() -> RunSettings {
        RunSettings {
            loader: LoaderConfig::new(),
            reference: "Start,Process,End".to_string(),
            mode: ConformanceMode::Strict,
            filter: None,
            include_diagram: false,
        }
    }

    #[test]
    fn test_analyze_files_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.txt");
        let short = dir.path().join("short.txt");
        fs::write(&good, "Start,0\nProcess,10\nEnd,30\n").unwrap();
        fs::write(&short, "Start,0\nEnd,5\n").unwrap();

        let reports = analyze_files(&[good.clone(), short.clone()], &settings()).unwrap();
        assert_eq!(reports[0].path, good);
        assert!(reports[0].analysis.conformant);
        assert_eq!(reports[1].path, short);
        assert!(!reports[1].analysis.conformant);
    }

    #[test]
    fn test_filter_and_diagram() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        fs::write(&path, "Start,0\nProcess,10\nEnd,30\n").unwrap();

        let mut settings = settings();
        settings.filter = Some("PROC".to_string());
        settings.include_diagram = true;

        let reports = analyze_files(&[path], &settings).unwrap();
        let matched = reports[0].matched.as_ref().unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].event(), "Process");
        assert_eq!(reports[0].diagram.as_ref().unwrap().len(), 14);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = analyze_files(&[PathBuf::from("missing.txt")], &settings());
        assert!(result.is_err());
    }

    #[test]
    fn test_expand_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "A,0\n").unwrap();
        fs::write(dir.path().join("b.csv"), "B,0\n").unwrap();
        let explicit = PathBuf::from("explicit.txt");

        let files = expand_inputs(&[dir.path().to_path_buf(), explicit.clone()], &LoaderConfig::new())
            .unwrap();
        assert_eq!(files.len(), 3);
        assert_eq!(files[2], explicit);
    }
}
