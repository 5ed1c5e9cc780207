#![warn(missing_docs)]
//! kernelbench Report
//!
//! The serializable record of a run and its machine-readable renderings:
//! - JSON (full report)
//! - CSV (one row per kernel/variant)
//! - Markdown (result, speedup and parity tables)
//!
//! Human-readable terminal output is produced by the CLI.

mod csv;
mod json;
mod markdown;
mod report;

pub use csv::generate_csv_report;
pub use json::generate_json_report;
pub use markdown::generate_markdown_report;
pub use report::{
    KernelReport, ParityEntry, Report, ReportMeta, ReportSummary, SpeedupEntry, SystemInfo,
};

use std::fmt;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Terminal text
    #[default]
    Human,
    /// Pretty-printed JSON
    Json,
    /// Comma-separated values
    Csv,
    /// GitHub-flavored Markdown
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "markdown" | "md" | "github" => Ok(OutputFormat::Markdown),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Human => "human",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Markdown => "markdown",
        })
    }
}
