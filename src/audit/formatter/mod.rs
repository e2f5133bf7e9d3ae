//! Output formatters for audit results.
//!
//! - **TTY**: one status line per tool, outdated tools highlighted
//! - **GitHub**: outdated tools as `::error` workflow commands
//! - **JSON**: machine-readable report
//!
//! Line-oriented formats write each result as soon as it is known and a
//! summary at the end; JSON writes nothing until the summary.

mod github;
mod json;
mod tty;

pub use github::GithubFormatter;
pub use json::JsonFormatter;
pub use tty::TtyFormatter;

use super::{AuditReport, AuditResult};
use crate::cli::OutputFormat;
use std::io::Write;

/// Trait for formatting audit results.
pub trait Formatter {
    /// Write the status of one audited tool.
    fn write_result<W: Write>(&self, result: &AuditResult, writer: &mut W) -> std::io::Result<()>;

    /// Write the closing summary for the whole report.
    fn write_summary<W: Write>(&self, report: &AuditReport, writer: &mut W) -> std::io::Result<()>;

    /// Format a complete report to a string.
    fn format_to_string(&self, report: &AuditReport) -> String {
        let mut buf = Vec::new();
        for result in &report.results {
            self.write_result(result, &mut buf).unwrap_or_default();
        }
        self.write_summary(report, &mut buf).unwrap_or_default();
        String::from_utf8(buf).unwrap_or_default()
    }
}

/// Formatter selected at runtime.
#[derive(Debug, Clone)]
pub enum AuditFormatter {
    Tty(TtyFormatter),
    Github(GithubFormatter),
    Json(JsonFormatter),
}

impl AuditFormatter {
    pub fn new(format: OutputFormat, colors: bool) -> Self {
        match format {
            OutputFormat::Tty => Self::Tty(TtyFormatter { colors }),
            OutputFormat::Github => Self::Github(GithubFormatter::new()),
            OutputFormat::Json => Self::Json(JsonFormatter::new()),
        }
    }
}

impl Formatter for AuditFormatter {
    fn write_result<W: Write>(&self, result: &AuditResult, writer: &mut W) -> std::io::Result<()> {
        match self {
            Self::Tty(f) => f.write_result(result, writer),
            Self::Github(f) => f.write_result(result, writer),
            Self::Json(f) => f.write_result(result, writer),
        }
    }

    fn write_summary<W: Write>(&self, report: &AuditReport, writer: &mut W) -> std::io::Result<()> {
        match self {
            Self::Tty(f) => f.write_summary(report, writer),
            Self::Github(f) => f.write_summary(report, writer),
            Self::Json(f) => f.write_summary(report, writer),
        }
    }
}

/// Format a report to a string using the specified output format.
pub fn format_report_to_string(report: &AuditReport, format: OutputFormat, colors: bool) -> String {
    AuditFormatter::new(format, colors).format_to_string(report)
}

/// Plain-text message for an outdated tool.
pub(crate) fn outdated_message(result: &AuditResult) -> String {
    format!(
        "{} is outdated. Current: {}, Latest: {}",
        result.tool, result.current_version, result.latest_version
    )
}

/// Plain-text message for a current tool.
pub(crate) fn up_to_date_message(result: &AuditResult) -> String {
    format!(
        "{} is up-to-date with version {}.",
        result.tool, result.current_version
    )
}

#[cfg(test)]
pub(crate) fn sample_report() -> AuditReport {
    vec![
        AuditResult {
            tool: "gosec".to_string(),
            image: "huskyci/gosec".to_string(),
            current_version: "2.18.2".to_string(),
            latest_version: "2.18.2".to_string(),
            is_outdated: false,
        },
        AuditResult {
            tool: "bandit".to_string(),
            image: "huskyci/bandit".to_string(),
            current_version: "1.7.4".to_string(),
            latest_version: "1.7.5".to_string(),
            is_outdated: true,
        },
    ]
    .into_iter()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_format_mentions_every_tool() {
        let report = sample_report();
        for format in [OutputFormat::Tty, OutputFormat::Github, OutputFormat::Json] {
            let output = format_report_to_string(&report, format, false);
            assert!(output.contains("gosec"), "{:?}: {}", format, output);
            assert!(output.contains("bandit"), "{:?}: {}", format, output);
        }
    }
}
