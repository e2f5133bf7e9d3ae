//! SARIF reader
//!
//! Flattens a Static Analysis Results Interchange Format document into a list
//! of `{ruleId, message, location}` records. Only the first run is read and no
//! schema conformance is checked beyond the field shapes in [`types`].

pub mod formatter;
pub mod types;

pub use types::{ParsedResult, SarifLog, SarifSummary};

use log::debug;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Errors raised while reading a SARIF document.
#[derive(Debug, Error)]
pub enum SarifError {
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid SARIF document: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Parse and flatten a SARIF document held in memory.
pub fn parse_sarif_str(content: &str) -> Result<SarifSummary, SarifError> {
    let log: SarifLog = serde_json::from_str(content)?;
    Ok(log.summarize())
}

/// Parse and flatten a SARIF document from a reader.
pub fn parse_sarif_reader<R: Read>(reader: R) -> Result<SarifSummary, SarifError> {
    let log: SarifLog = serde_json::from_reader(reader)?;
    Ok(log.summarize())
}

/// Parse and flatten a SARIF file.
pub fn parse_sarif_file(path: &Path) -> Result<SarifSummary, SarifError> {
    debug!("Reading SARIF document {}", path.display());
    let file = std::fs::File::open(path).map_err(|source| SarifError::ReadFailed {
        path: path.display().to_string(),
        source,
    })?;
    parse_sarif_reader(std::io::BufReader::new(file))
}
