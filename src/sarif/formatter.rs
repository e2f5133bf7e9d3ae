//! Output formatters for flattened SARIF results.

use super::SarifSummary;
use crate::cli::OutputFormat;
use crate::common::github::{annotation, Level};
use colored::Colorize;

/// Format a summary using the specified output format.
pub fn format(summary: &SarifSummary, format: OutputFormat, colors: bool) -> String {
    match format {
        OutputFormat::Json => format_json(summary),
        OutputFormat::Tty => format_tty(summary, colors),
        OutputFormat::Github => format_github(summary),
    }
}

fn format_json(summary: &SarifSummary) -> String {
    let mut output = serde_json::to_string_pretty(summary).unwrap_or_else(|_| "{}".to_string());
    output.push('\n');
    output
}

fn format_tty(summary: &SarifSummary, colors: bool) -> String {
    let mut output = String::new();

    for result in &summary.parsed_results {
        let location = if result.location.is_empty() { "-" } else { result.location.as_str() };
        if colors {
            output.push_str(&format!(
                "{}  {}  {}\n",
                location.bold(),
                result.rule_id.as_str().yellow(),
                result.message
            ));
        } else {
            output.push_str(&format!("{}  {}  {}\n", location, result.rule_id, result.message));
        }
    }

    let version = if summary.sarif_version.is_empty() {
        "unknown"
    } else {
        summary.sarif_version.as_str()
    };
    output.push_str(&format!(
        "{} result(s) (SARIF {})\n",
        summary.parsed_results.len(),
        version
    ));
    output
}

fn format_github(summary: &SarifSummary) -> String {
    let mut output = String::new();
    for result in &summary.parsed_results {
        let title = (!result.rule_id.is_empty()).then_some(result.rule_id.as_str());
        output.push_str(&annotation(
            Level::Warning,
            Some(result.location.as_str()),
            title,
            &result.message,
        ));
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sarif::ParsedResult;

    fn summary() -> SarifSummary {
        SarifSummary {
            sarif_version: "2.1.0".to_string(),
            parsed_results: vec![
                ParsedResult {
                    rule_id: "G101".to_string(),
                    message: "Potential hardcoded credentials".to_string(),
                    location: "api/auth.go".to_string(),
                },
                ParsedResult {
                    rule_id: "B105".to_string(),
                    message: "Possible hardcoded password".to_string(),
                    location: String::new(),
                },
            ],
        }
    }

    #[test]
    fn test_json_format() {
        let output = format(&summary(), OutputFormat::Json, false);
        let parsed: SarifSummary = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, summary());
    }

    #[test]
    fn test_tty_format() {
        let output = format(&summary(), OutputFormat::Tty, false);
        assert!(output.contains("api/auth.go  G101  Potential hardcoded credentials"));
        assert!(output.contains("-  B105  Possible hardcoded password"));
        assert!(output.contains("2 result(s) (SARIF 2.1.0)"));
    }

    #[test]
    fn test_github_format() {
        let output = format(&summary(), OutputFormat::Github, false);
        assert!(output.contains("::warning file=api/auth.go,title=G101::Potential hardcoded credentials"));
        assert!(output.contains("::warning title=B105::Possible hardcoded password"));
    }
}
