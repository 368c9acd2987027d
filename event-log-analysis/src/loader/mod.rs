//! Trace loader for delimited text event logs
//!
//! Each line holds one record: `<event-label>,<timestamp>`. Lines that do not
//! split into exactly two non-empty fields are skipped. Timestamps are parsed
//! while loading, so the analysis engine only ever sees well-formed records.

use crate::config::LoaderConfig;
use crate::types::{AnalysisError, EventLog, EventTrace, Result, Timestamp};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

pub mod timestamp;

pub use timestamp::parse_timestamp;

/// Loader for text event logs
pub struct TraceLoader;

impl TraceLoader {
    /// Load a whole log file into a trace
    pub fn load_file(path: &Path, config: &LoaderConfig) -> Result<EventTrace> {
        log::info!("Loading event log: {:?}", path);

        let file = File::open(path)?;
        let trace = Self::records(BufReader::new(file), config).collect::<Result<EventTrace>>()?;

        log::info!("Loaded {} records from {:?}", trace.len(), path);
        Ok(trace)
    }

    /// Load a trace from in-memory text
    pub fn load_str(content: &str, config: &LoaderConfig) -> Result<EventTrace> {
        Self::records(content.as_bytes(), config).collect()
    }

    /// Lazily parse records from any buffered reader
    pub fn records<R: BufRead>(reader: R, config: &LoaderConfig) -> RecordIterator<R> {
        RecordIterator {
            lines: reader.lines(),
            config: config.clone(),
            line_no: 0,
            skipped: 0,
            last_timestamp: None,
        }
    }

    /// List log files in a directory, sorted by path
    ///
    /// Only files whose extension is accepted by the configuration are returned.
    pub fn discover(dir: &Path, config: &LoaderConfig) -> Result<Vec<PathBuf>> {
        log::debug!("Scanning {:?} for event logs", dir);

        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            let accepted = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| config.accepts_extension(ext))
                .unwrap_or(false);
            if accepted {
                files.push(path);
            }
        }

        files.sort();
        log::debug!("Found {} event logs in {:?}", files.len(), dir);
        Ok(files)
    }
}

/// Iterator over records parsed from a line-oriented reader
pub struct RecordIterator<R> {
    lines: Lines<R>,
    config: LoaderConfig,
    line_no: usize,
    skipped: usize,
    last_timestamp: Option<Timestamp>,
}

impl<R> RecordIterator<R> {
    /// Number of malformed lines skipped so far
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Split a line into label and timestamp text, `None` if malformed
    ///
    /// Trailing empty fields (`A,1,` or `A,1,,`) do not count towards the
    /// field total.
    fn split_line<'l>(&self, line: &'l str) -> Option<(&'l str, &'l str)> {
        let line = line.trim_end().trim_end_matches(self.config.delimiter);
        let mut fields = line.split(self.config.delimiter);
        let event = fields.next()?.trim();
        let timestamp = fields.next()?.trim();
        if fields.next().is_some() || event.is_empty() || timestamp.is_empty() {
            return None;
        }
        Some((event, timestamp))
    }

    fn parse_line(&mut self, line: &str) -> Option<Result<EventLog>> {
        if line.trim().is_empty() {
            return None;
        }

        let Some((event, raw_timestamp)) = self.split_line(line) else {
            if !self.config.skip_malformed {
                return Some(Err(AnalysisError::LogParseError(format!(
                    "line {}: expected `<event>{}<timestamp>`",
                    self.line_no, self.config.delimiter
                ))));
            }
            log::debug!("Skipping malformed line {}: {:?}", self.line_no, line);
            self.skipped += 1;
            return None;
        };

        let Some(timestamp) = parse_timestamp(raw_timestamp) else {
            return Some(Err(AnalysisError::TimestampParse {
                line: self.line_no,
                value: raw_timestamp.to_string(),
            }));
        };

        if let Some(previous) = self.last_timestamp {
            if timestamp < previous {
                log::warn!(
                    "Timestamp on line {} goes backwards ({} < {})",
                    self.line_no,
                    timestamp,
                    previous
                );
            }
        }
        self.last_timestamp = Some(timestamp);

        Some(Ok(EventLog::new(event, timestamp)))
    }
}

impl<R: BufRead> Iterator for RecordIterator<R> {
    type Item = Result<EventLog>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_no += 1;

            if let Some(record) = self.parse_line(&line) {
                return Some(record);
            }
        }
    }
}
