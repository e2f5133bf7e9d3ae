use crate::{
    audit::{
        self,
        formatter::{AuditFormatter, Formatter},
    },
    cli::OutputFormat,
    config::{self, types::RegistrySettings, Settings},
    error::ConfigError,
    registry::{DockerHubClient, TagLookup},
};
use log::debug;
use std::io::Write;
use std::path::PathBuf;

use super::Outcome;

/// Options of the `check` command.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub config: PathBuf,
    pub registry_url: Option<String>,
    pub namespace: Option<String>,
    pub only: Vec<String>,
    pub format: Option<OutputFormat>,
    pub parallel: bool,
    pub colors: bool,
}

pub fn handle_check(options: CheckOptions, settings: &Settings) -> crate::Result<Outcome> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_check(options, settings, &mut out)
}

/// Load the configuration, build the registry client and audit every tool,
/// writing status lines to `out`.
pub fn run_check<W: Write>(
    options: CheckOptions,
    settings: &Settings,
    out: &mut W,
) -> crate::Result<Outcome> {
    if let Ok(cwd) = std::env::current_dir() {
        debug!("Working directory: {}", cwd.display());
    }

    let format = resolve_format(options.format, settings)?;
    let tools = config::load_tools(&options.config)?;
    let tools = config::select_tools(tools, &options.only)?;
    debug!("{} tool(s) to check", tools.len());

    let registry = RegistrySettings {
        base_url: options
            .registry_url
            .unwrap_or_else(|| settings.registry.base_url.clone()),
        namespace: options
            .namespace
            .unwrap_or_else(|| settings.registry.namespace.clone()),
        user_agent: settings.registry.user_agent.clone(),
    };
    let client = DockerHubClient::from_settings(&registry)?;

    let formatter = AuditFormatter::new(format, options.colors);
    run_audit(&tools, &client, &formatter, options.parallel, out)
}

/// Audit `tools` against `lookup` and render the results.
///
/// Sequential audits stream each line as soon as its lookup finishes; parallel
/// audits print once every lookup has returned. Either way lines follow
/// configuration order.
pub fn run_audit<W: Write>(
    tools: &[config::ToolConfig],
    lookup: &dyn TagLookup,
    formatter: &AuditFormatter,
    parallel: bool,
    out: &mut W,
) -> crate::Result<Outcome> {
    let report = if parallel {
        let report = audit::audit_tools_parallel(tools, lookup)?;
        for result in &report.results {
            formatter.write_result(result, out)?;
        }
        report
    } else {
        let mut write_error = None;
        let report = audit::audit_tools_with(tools, lookup, |result| {
            if write_error.is_none() {
                if let Err(e) = formatter.write_result(result, out) {
                    write_error = Some(e);
                }
            }
        })?;
        if let Some(e) = write_error {
            return Err(e.into());
        }
        report
    };

    formatter.write_summary(&report, out)?;
    out.flush()?;

    Ok(if report.any_outdated() {
        Outcome::Outdated
    } else {
        Outcome::Success
    })
}

fn resolve_format(requested: Option<OutputFormat>, settings: &Settings) -> crate::Result<OutputFormat> {
    if let Some(format) = requested {
        return Ok(format);
    }

    match settings.output.format.as_deref() {
        Some(name) => OutputFormat::parse_name(name).ok_or_else(|| {
            ConfigError::ParsingFailed(format!(
                "unknown output format '{}', expected one of: {}",
                name,
                OutputFormat::all_names().join(", ")
            ))
            .into()
        }),
        None => Ok(OutputFormat::detect()),
    }
}
