//! Report generation
//!
//! Renders per-file analysis results as plain text (same wording as the
//! analysis dialog of the desktop tool) or as JSON.

use anyhow::Result;
use chrono::{DateTime, Utc};
use event_log_analysis::{AnalysisReport, EventLog, Shape};
use serde::Serialize;
use std::fmt::{self, Write};
use std::path::PathBuf;

const CONFORMS: &str = "The process log conforms to the expected model.";
const DOES_NOT_CONFORM: &str = "The process log does not conform to the expected model.";

/// Analysis output for one input file
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub analysis: AnalysisReport,
    /// Records that matched the filter, present only when a filter was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<Vec<EventLog>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagram: Option<Vec<Shape>>,
}

/// Everything produced by one run
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub generated_at: DateTime<Utc>,
    pub files: Vec<FileReport>,
}

/// Render a run as human-readable text
pub fn render_txt(run: &RunReport) -> String {
    let mut out = String::new();
    for (i, file) in run.files.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_file_txt(&mut out, file).expect("writing to a String cannot fail");
    }
    out
}

fn render_file_txt(out: &mut String, file: &FileReport) -> fmt::Result {
    let analysis = &file.analysis;

    writeln!(out, "═══ {} ({} events) ═══", file.path.display(), analysis.event_count)?;

    out.push_str("Process Discovery Results:\n");
    for (event, count) in analysis.frequencies.sorted() {
        writeln!(out, "{}: {}", event, count)?;
    }

    out.push_str(if analysis.conformant { CONFORMS } else { DOES_NOT_CONFORM });
    out.push('\n');
    if !analysis.conformant {
        writeln!(
            out,
            "  expected [{}] ({}), distance {}",
            analysis.reference, analysis.mode, analysis.distance
        )?;
    }

    writeln!(out, "Average Event Duration: {}", analysis.average_duration_secs)?;

    if let Some(matched) = &file.matched {
        writeln!(out, "\nMatching events ({}):", matched.len())?;
        for record in matched {
            writeln!(out, "  {:<24} {}", record.event(), record.timestamp().to_rfc3339())?;
        }
    }

    if let Some(shapes) = &file.diagram {
        writeln!(out, "\nDiagram ({} shapes):", shapes.len())?;
        for shape in shapes {
            writeln!(out, "  {}", describe_shape(shape))?;
        }
    }

    Ok(())
}

fn describe_shape(shape: &Shape) -> String {
    match shape {
        Shape::Circle { cx, cy, radius, fill } => {
            format!("place      ({}, {}) r={} {:?}", cx, cy, radius, fill)
        }
        Shape::Rect { x, y, width, height, fill } => {
            format!("transition ({}, {}) {}x{} {:?}", x, y, width, height, fill)
        }
        Shape::Line { x1, y1, x2, y2 } => format!("arc        ({}, {}) -> ({}, {})", x1, y1, x2, y2),
        Shape::Label { x, y, text } => format!("label      ({}, {}) {:?}", x, y, text),
    }
}

/// Render a run as pretty-printed JSON
pub fn render_json(run: &RunReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(run)?)
}
