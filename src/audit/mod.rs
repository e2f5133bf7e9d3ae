//! Version auditing
//!
//! Compares each tool's pinned image tag against the latest tag the registry
//! reports. A mismatch is a finding, not an error: every tool is evaluated and
//! the findings accumulate into a single "any outdated" flag. Lookup failures
//! abort the whole audit.

pub mod formatter;

use crate::config::ToolConfig;
use crate::registry::{self, TagLookup};
use log::{debug, error};
use rayon::prelude::*;
use serde::Serialize;

/// Outcome of auditing one tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    pub tool: String,
    pub image: String,
    pub current_version: String,
    pub latest_version: String,
    pub is_outdated: bool,
}

impl AuditResult {
    /// Compare the pinned tag with the registry's latest tag.
    pub fn compare(tool: &ToolConfig, latest_version: String) -> Self {
        let is_outdated = tool.image_tag != latest_version;
        Self {
            tool: tool.name.clone(),
            image: tool.image.clone(),
            current_version: tool.image_tag.clone(),
            latest_version,
            is_outdated,
        }
    }
}

/// Ordered audit results plus the aggregate outdated flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    pub outdated: bool,
    pub results: Vec<AuditResult>,
}

impl AuditReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a result. Once set, the outdated flag stays set.
    pub fn push(&mut self, result: AuditResult) {
        self.outdated |= result.is_outdated;
        self.results.push(result);
    }

    /// True if any audited tool is outdated.
    pub fn any_outdated(&self) -> bool {
        self.outdated
    }

    pub fn outdated_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_outdated).count()
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }
}

impl FromIterator<AuditResult> for AuditReport {
    fn from_iter<I: IntoIterator<Item = AuditResult>>(iter: I) -> Self {
        let mut report = AuditReport::new();
        for result in iter {
            report.push(result);
        }
        report
    }
}

/// Audit a single tool with exactly one lookup.
pub fn audit_tool(tool: &ToolConfig, lookup: &dyn TagLookup) -> registry::Result<AuditResult> {
    let repo_name = tool.repo_name();
    debug!("Checking {} ({} -> {})", tool.name, tool.image, repo_name);

    let latest = lookup.latest_tag(repo_name)?;
    let result = AuditResult::compare(tool, latest);
    if result.is_outdated {
        error!(
            "{} is outdated: {} != {}",
            result.tool, result.current_version, result.latest_version
        );
    }
    Ok(result)
}

/// Audit tools sequentially in configuration order.
pub fn audit_tools(tools: &[ToolConfig], lookup: &dyn TagLookup) -> registry::Result<AuditReport> {
    audit_tools_with(tools, lookup, |_| {})
}

/// Audit tools sequentially, handing each result to `on_result` as soon as it
/// is known so callers can stream output. The first lookup failure stops the
/// audit; results already reported stay reported.
pub fn audit_tools_with<F>(
    tools: &[ToolConfig],
    lookup: &dyn TagLookup,
    mut on_result: F,
) -> registry::Result<AuditReport>
where
    F: FnMut(&AuditResult),
{
    let mut report = AuditReport::new();
    for tool in tools {
        let result = audit_tool(tool, lookup)?;
        on_result(&result);
        report.push(result);
    }
    Ok(report)
}

/// Audit tools concurrently. Results keep configuration order; any lookup
/// failure fails the whole audit.
pub fn audit_tools_parallel(
    tools: &[ToolConfig],
    lookup: &dyn TagLookup,
) -> registry::Result<AuditReport> {
    let results = tools
        .par_iter()
        .map(|tool| audit_tool(tool, lookup))
        .collect::<registry::Result<Vec<_>>>()?;

    Ok(results.into_iter().collect())
}


#[cfg(test)]
mod tests {
    use super::test_support::FakeRegistry;
    use super::*;
    use crate::registry::RegistryError;

    fn tools() -> Vec<ToolConfig> {
        vec![
            ToolConfig::new("gosec", "huskyci/gosec", "2.18.2"),
            ToolConfig::new("bandit", "huskyci/bandit", "1.7.4"),
            ToolConfig::new("enry", "enry", "latest"),
        ]
    }

    fn registry() -> FakeRegistry {
        FakeRegistry::default()
            .with("gosec", &["2.18.2", "2.18.1"])
            .with("bandit", &["1.7.5", "1.7.4"])
            .with("enry", &["latest"])
    }

    #[test]
    fn test_equal_tags_are_up_to_date() {
        let registry = registry();
        let result = audit_tool(&tools()[0], &registry).unwrap();
        assert!(!result.is_outdated);
        assert_eq!(result.current_version, "2.18.2");
        assert_eq!(result.latest_version, "2.18.2");
    }

    #[test]
    fn test_different_tags_are_outdated() {
        let registry = registry();
        let result = audit_tool(&tools()[1], &registry).unwrap();
        assert!(result.is_outdated);
        assert_eq!(result.current_version, "1.7.4");
        assert_eq!(result.latest_version, "1.7.5");
    }

    #[test]
    fn test_lookup_uses_repo_name() {
        let registry = registry();
        audit_tools(&tools(), &registry).unwrap();
        assert_eq!(registry.calls(), vec!["gosec", "bandit", "enry"]);
    }

    #[test]
    fn test_outdated_flag_is_monotonic() {
        let registry = registry();
        let report = audit_tools(&tools(), &registry).unwrap();
        assert!(report.any_outdated());
        assert_eq!(report.outdated_count(), 1);
        assert_eq!(report.total(), 3);
        // The outdated tool is second; the up-to-date one after it must not clear the flag.
        assert!(!report.results[2].is_outdated);
    }

    #[test]
    fn test_all_current() {
        let registry = registry();
        let current = vec![tools()[0].clone(), tools()[2].clone()];
        let report = audit_tools(&current, &registry).unwrap();
        assert!(!report.any_outdated());
    }

    #[test]
    fn test_empty_configuration_performs_no_lookups() {
        let registry = registry();
        let report = audit_tools(&[], &registry).unwrap();
        assert!(!report.any_outdated());
        assert!(report.results.is_empty());
        assert!(registry.calls().is_empty());
    }

    #[test]
    fn test_lookup_failure_aborts() {
        let registry = FakeRegistry::default().with("gosec", &["2.18.2"]);
        let mut seen = Vec::new();
        let err = audit_tools_with(&tools(), &registry, |r| seen.push(r.tool.clone())).unwrap_err();
        assert!(matches!(err, RegistryError::NoTags(ref repo) if repo == "bandit"));
        assert_eq!(seen, vec!["gosec"]);
        assert_eq!(registry.calls(), vec!["gosec", "bandit"]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let sequential = audit_tools(&tools(), &registry()).unwrap();
        let parallel = audit_tools_parallel(&tools(), &registry()).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_parallel_propagates_lookup_failure() {
        let registry = FakeRegistry::default().with("gosec", &["2.18.2"]);
        assert!(audit_tools_parallel(&tools(), &registry).is_err());
    }
}
