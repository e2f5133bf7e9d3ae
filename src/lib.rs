//! # tag-ctl
//!
//! A command-line tool for CI pipelines around container-based security tools.
//!
//! ## Features
//!
//! - **Tag auditing**: compares the image tags pinned in a tool configuration
//!   against the latest tags on the registry and exits non-zero when any tool
//!   is outdated
//! - **SARIF flattening**: projects a SARIF report into `{ruleId, message, location}` records
//! - **CI-friendly output**: terminal, GitHub Actions annotations or JSON
//!
//! ## Example
//!
//! ```rust,no_run
//! use tag_ctl::{audit, config, registry::DockerHubClient};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tools = config::load_tools(Path::new("config.yaml"))?;
//! let client = DockerHubClient::new("https://registry.hub.docker.com", "huskyci")?;
//! let report = audit::audit_tools(&tools, &client)?;
//! if report.any_outdated() {
//!     std::process::exit(1);
//! }
//! # Ok(())
//! # }
//! ```

pub mod audit;
pub mod cli;
pub mod common;
pub mod config;
pub mod error;
pub mod handlers;
pub mod registry;
pub mod sarif;

// Re-export commonly used types and functions
pub use audit::{audit_tools, AuditReport, AuditResult};
pub use error::{ConfigError, Result, TagCtlError};
pub use handlers::Outcome;
pub use sarif::{parse_sarif_file, parse_sarif_str, SarifSummary};

use cli::{Cli, Commands};

pub fn run_command(cli: Cli) -> Result<Outcome> {
    let settings = match &cli.settings {
        Some(path) => config::load_settings_file(path)?,
        None => {
            let cwd = std::env::current_dir()?;
            config::load_settings(Some(cwd.as_path()))?
        }
    };

    let colors = !cli.no_color
        && !settings.output.no_color
        && std::env::var_os("NO_COLOR").is_none();

    match cli.command {
        Commands::Check {
            config,
            registry_url,
            namespace,
            only,
            format,
            parallel,
        } => handlers::handle_check(
            handlers::CheckOptions {
                config,
                registry_url,
                namespace,
                only,
                format,
                parallel,
                colors,
            },
            &settings,
        ),
        Commands::Sarif {
            path,
            format,
            output,
        } => handlers::handle_sarif(path, format, output, colors),
    }
}
