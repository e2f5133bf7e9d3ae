//! GitHub Actions output formatter for audit results.
//!
//! Outdated tools become `::error` workflow commands so the run surfaces them
//! as annotations; current tools are printed as plain lines.

use super::{outdated_message, up_to_date_message, Formatter};
use crate::audit::{AuditReport, AuditResult};
use crate::common::github::{annotation, Level};
use std::io::Write;

#[derive(Debug, Clone, Default)]
pub struct GithubFormatter;

impl GithubFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for GithubFormatter {
    fn write_result<W: Write>(&self, result: &AuditResult, writer: &mut W) -> std::io::Result<()> {
        if result.is_outdated {
            let title = format!("Outdated image {}", result.tool);
            writeln!(
                writer,
                "{}",
                annotation(Level::Error, None, Some(title.as_str()), &outdated_message(result))
            )
        } else {
            writeln!(writer, "{}", up_to_date_message(result))
        }
    }

    fn write_summary<W: Write>(&self, report: &AuditReport, writer: &mut W) -> std::io::Result<()> {
        let outdated = report.outdated_count();
        if outdated > 0 {
            writeln!(
                writer,
                "{} of {} tool image(s) are outdated.",
                outdated,
                report.total()
            )
        } else {
            writeln!(writer, "All {} tool image(s) are up-to-date.", report.total())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::formatter::sample_report;

    #[test]
    fn test_github_format() {
        let output = GithubFormatter::new().format_to_string(&sample_report());
        assert!(output.contains(
            "::error title=Outdated image bandit::bandit is outdated. Current: 1.7.4, Latest: 1.7.5"
        ));
        assert!(output.contains("gosec is up-to-date with version 2.18.2."));
        assert!(!output.contains("::error title=Outdated image gosec"));
        assert!(output.contains("1 of 2 tool image(s) are outdated."));
    }
}
