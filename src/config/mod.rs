pub mod types;

pub use types::{repo_name, Settings, ToolConfig};

use crate::error::ConfigError;
use log::debug;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE_NAME: &str = ".tag-ctl.toml";

/// Default tool configuration file, relative to the working directory.
pub const DEFAULT_TOOLS_FILE: &str = "config.yaml";

/// Get the global settings file path (~/.tag-ctl.toml)
pub fn global_settings_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(SETTINGS_FILE_NAME))
}

/// Get the local settings file path (dir/.tag-ctl.toml)
pub fn local_settings_path(dir: &Path) -> PathBuf {
    dir.join(SETTINGS_FILE_NAME)
}

/// Load settings from file or use defaults.
/// Checks the local file first, then the global one. A file that exists but
/// does not parse is an error rather than a silent fallback.
pub fn load_settings(dir: Option<&Path>) -> Result<Settings, ConfigError> {
    let candidates = dir
        .map(local_settings_path)
        .into_iter()
        .chain(global_settings_path());

    for path in candidates {
        if path.exists() {
            debug!("Loading settings from {}", path.display());
            let content = read(&path)?;
            return parse_settings(&content);
        }
    }

    Ok(Settings::default())
}

/// Load settings from an explicitly named file, which must exist.
pub fn load_settings_file(path: &Path) -> Result<Settings, ConfigError> {
    debug!("Loading settings from {}", path.display());
    parse_settings(&read(path)?)
}

/// Parse a settings document.
pub fn parse_settings(content: &str) -> Result<Settings, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParsingFailed(e.to_string()))
}

/// Load the tool configuration from a YAML file.
pub fn load_tools(path: &Path) -> Result<Vec<ToolConfig>, ConfigError> {
    debug!("Loading tool configuration from {}", path.display());
    let content = read(path)?;
    parse_tools(&content)
}

/// Parse a tool configuration document.
///
/// Tools come back in document order. An empty document declares zero tools.
pub fn parse_tools(yaml: &str) -> Result<Vec<ToolConfig>, ConfigError> {
    if yaml.trim().is_empty() {
        return Ok(Vec::new());
    }

    let value: Value =
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParsingFailed(e.to_string()))?;

    let mapping = match value {
        Value::Null => return Ok(Vec::new()),
        Value::Mapping(mapping) => mapping,
        _ => return Err(ConfigError::NotAMapping),
    };

    let mut tools = Vec::with_capacity(mapping.len());
    for (key, entry) in &mapping {
        let name = key
            .as_str()
            .ok_or_else(|| ConfigError::InvalidEntry(format!("{:?}", key)))?;
        let entry = entry
            .as_mapping()
            .ok_or_else(|| ConfigError::InvalidEntry(name.to_string()))?;

        tools.push(ToolConfig {
            name: name.to_string(),
            image: required_str(name, entry, "image")?,
            image_tag: required_str(name, entry, "imageTag")?,
        });
    }

    Ok(tools)
}

/// Restrict `tools` to the names in `only`, keeping configuration order.
/// An empty filter keeps every tool.
pub fn select_tools(tools: Vec<ToolConfig>, only: &[String]) -> Result<Vec<ToolConfig>, ConfigError> {
    if only.is_empty() {
        return Ok(tools);
    }

    if let Some(unknown) = only.iter().find(|name| !tools.iter().any(|t| &t.name == *name)) {
        return Err(ConfigError::UnknownTool(unknown.clone()));
    }

    Ok(tools.into_iter().filter(|t| only.contains(&t.name)).collect())
}

fn required_str(tool: &str, entry: &Mapping, field: &'static str) -> Result<String, ConfigError> {
    match entry.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        None | Some(Value::Null) => Err(ConfigError::MissingField {
            tool: tool.to_string(),
            field,
        }),
        Some(_) => Err(ConfigError::InvalidField {
            tool: tool.to_string(),
            field,
        }),
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
        path: path.display().to_string(),
        source,
    })
}
