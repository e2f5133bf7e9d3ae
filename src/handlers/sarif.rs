use crate::{
    cli::OutputFormat,
    sarif::{self, formatter, SarifSummary},
};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::Outcome;

pub fn handle_sarif(
    path: PathBuf,
    format: OutputFormat,
    output: Option<PathBuf>,
    colors: bool,
) -> crate::Result<Outcome> {
    let summary = read_summary(&path)?;
    log::info!(
        "{} result(s) read from {}",
        summary.parsed_results.len(),
        path.display()
    );

    // Files never get escape codes.
    let output_string = formatter::format(&summary, format, colors && output.is_none());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Some(output_path) = output {
        std::fs::write(&output_path, output_string)?;
        writeln!(out, "SARIF summary saved to: {}", output_path.display())?;
    } else {
        write_report(&mut out, &output_string)?;
    }

    Ok(Outcome::Success)
}

/// Write the rendered report, surfacing a closed pipe as an error.
fn write_report<W: Write>(out: &mut W, report: &str) -> std::io::Result<()> {
    out.write_all(report.as_bytes())?;
    out.flush()
}

fn read_summary(path: &Path) -> crate::Result<SarifSummary> {
    let summary = if path == Path::new("-") {
        sarif::parse_sarif_reader(std::io::stdin().lock())?
    } else {
        sarif::parse_sarif_file(path)?
    };
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_report_written_to_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("gosec.sarif");
        let report = dir.path().join("summary.json");
        std::fs::write(
            &input,
            r#"{"version": "2.1.0", "runs": [{"results": [{"ruleId": "G104", "message": {"text": "Errors unhandled."}}]}]}"#,
        )
        .unwrap();

        let outcome = handle_sarif(input, OutputFormat::Json, Some(report.clone()), true).unwrap();
        assert_eq!(outcome, Outcome::Success);

        let written: SarifSummary =
            serde_json::from_str(&std::fs::read_to_string(report).unwrap()).unwrap();
        assert_eq!(written.parsed_results[0].rule_id, "G104");
        assert_eq!(written.parsed_results[0].message, "Errors unhandled.");
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_closed_stdout_is_an_error() {
        let err = write_report(&mut ClosedPipe, "{}\n").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);

        let mut buf = Vec::new();
        write_report(&mut buf, "{}\n").unwrap();
        assert_eq!(buf, b"{}\n");
    }
}
