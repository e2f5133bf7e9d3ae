//! TTY formatter for audit results.

use super::{outdated_message, up_to_date_message, Formatter};
use crate::audit::{AuditReport, AuditResult};
use colored::Colorize;
use std::io::Write;

/// Terminal output formatter.
#[derive(Debug, Clone)]
pub struct TtyFormatter {
    /// Use colors in output.
    pub colors: bool,
}

impl Default for TtyFormatter {
    fn default() -> Self {
        Self { colors: true }
    }
}

impl TtyFormatter {
    pub fn no_color() -> Self {
        Self { colors: false }
    }

    fn warning_badge(&self) -> String {
        if self.colors {
            "[WARNING]".red().bold().to_string()
        } else {
            "[WARNING]".to_string()
        }
    }
}

impl Formatter for TtyFormatter {
    fn write_result<W: Write>(&self, result: &AuditResult, writer: &mut W) -> std::io::Result<()> {
        if result.is_outdated {
            writeln!(writer, "{} {}", self.warning_badge(), outdated_message(result))
        } else {
            writeln!(writer, "{}", up_to_date_message(result))
        }
    }

    fn write_summary<W: Write>(&self, report: &AuditReport, writer: &mut W) -> std::io::Result<()> {
        if report.total() == 0 {
            return writeln!(writer, "No tools configured.");
        }

        let outdated = report.outdated_count();
        let summary = format!(
            "{} tool(s) checked, {} outdated.",
            report.total(),
            outdated
        );

        writeln!(writer)?;
        if !self.colors {
            writeln!(writer, "{}", summary)
        } else if outdated > 0 {
            writeln!(writer, "{}", summary.red().bold())
        } else {
            writeln!(writer, "{}", summary.green())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::formatter::sample_report;

    #[test]
    fn test_tty_lines() {
        let output = TtyFormatter::no_color().format_to_string(&sample_report());
        assert!(output.contains("gosec is up-to-date with version 2.18.2."));
        assert!(output.contains("[WARNING] bandit is outdated. Current: 1.7.4, Latest: 1.7.5"));
        assert!(output.contains("2 tool(s) checked, 1 outdated."));
    }

    #[test]
    fn test_tty_no_color_has_no_escapes() {
        let output = TtyFormatter::no_color().format_to_string(&sample_report());
        assert!(!output.contains('\x1b'));
    }

    #[test]
    fn test_tty_empty_report() {
        let output = TtyFormatter::no_color().format_to_string(&AuditReport::new());
        assert_eq!(output, "No tools configured.\n");
    }
}
