//! SARIF document shape, reduced to the fields the reader projects.
//!
//! Every field is optional: a missing (or `null`) field falls back to an
//! empty value instead of failing the parse.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SarifLog {
    pub version: Option<String>,
    pub runs: Option<Vec<SarifRun>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SarifRun {
    pub results: Option<Vec<SarifResult>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SarifResult {
    pub rule_id: Option<String>,
    pub message: Option<SarifMessage>,
    pub locations: Option<Vec<SarifLocation>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SarifMessage {
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SarifLocation {
    pub physical_location: Option<PhysicalLocation>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhysicalLocation {
    pub artifact_location: Option<ArtifactLocation>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ArtifactLocation {
    pub uri: Option<String>,
}

/// One flattened finding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResult {
    #[serde(rename = "ruleId")]
    pub rule_id: String,
    pub message: String,
    pub location: String,
}

/// Flattened view of a SARIF document's first run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SarifSummary {
    pub sarif_version: String,
    pub parsed_results: Vec<ParsedResult>,
}

impl SarifResult {
    /// Project into `{ruleId, message, location}`, where location is the
    /// artifact URI of the first location.
    pub fn flatten(&self) -> ParsedResult {
        let location = self
            .locations
            .as_deref()
            .and_then(|locations| locations.first())
            .and_then(|l| l.physical_location.as_ref())
            .and_then(|p| p.artifact_location.as_ref())
            .and_then(|a| a.uri.clone())
            .unwrap_or_default();

        ParsedResult {
            rule_id: self.rule_id.clone().unwrap_or_default(),
            message: self
                .message
                .as_ref()
                .and_then(|m| m.text.clone())
                .unwrap_or_default(),
            location,
        }
    }
}

impl SarifLog {
    /// Flatten the results of the first run. Later runs are not read.
    pub fn summarize(&self) -> SarifSummary {
        let parsed_results = self
            .runs
            .as_deref()
            .and_then(|runs| runs.first())
            .and_then(|run| run.results.as_deref())
            .map(|results| results.iter().map(SarifResult::flatten).collect())
            .unwrap_or_default();

        SarifSummary {
            sarif_version: self.version.clone().unwrap_or_default(),
            parsed_results,
        }
    }
}
