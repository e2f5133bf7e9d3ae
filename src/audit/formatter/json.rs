//! JSON output formatter for audit results.

use super::Formatter;
use crate::audit::{AuditReport, AuditResult};
use std::io::Write;

#[derive(Debug, Clone, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for JsonFormatter {
    fn write_result<W: Write>(&self, _result: &AuditResult, _writer: &mut W) -> std::io::Result<()> {
        Ok(())
    }

    fn write_summary<W: Write>(&self, report: &AuditReport, writer: &mut W) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(report).map_err(std::io::Error::other)?;
        writeln!(writer, "{}", json)
    }
}
