//! Error types for tag-ctl
//!
//! Each concern owns its error enum; `TagCtlError` unifies them so handlers
//! can propagate with `?` all the way to `main`.

use thiserror::Error;

pub use crate::registry::RegistryError;
pub use crate::sarif::SarifError;

/// Errors raised while loading the tool configuration or settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read configuration file {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid YAML/TOML.
    #[error("Failed to parse configuration: {0}")]
    ParsingFailed(String),

    /// The top-level YAML value is not a mapping of tool name to tool entry.
    #[error("Configuration must be a mapping of tool name to tool entry")]
    NotAMapping,

    /// A tool entry lacks a required string field.
    #[error("Tool '{tool}' is missing required field '{field}'")]
    MissingField { tool: String, field: &'static str },

    /// A required field is present but is not a string.
    #[error("Tool '{tool}' field '{field}' must be a string (quote numeric tags)")]
    InvalidField { tool: String, field: &'static str },

    /// A tool entry is not a mapping, or its key is not a string.
    #[error("Invalid entry for tool '{0}'")]
    InvalidEntry(String),

    /// `--only` named a tool the configuration does not declare.
    #[error("Unknown tool '{0}' - it is not declared in the configuration")]
    UnknownTool(String),
}

/// Top-level error for every tag-ctl operation.
#[derive(Debug, Error)]
pub enum TagCtlError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Registry lookup failed: {0}")]
    Registry(#[from] RegistryError),

    #[error("SARIF error: {0}")]
    Sarif(#[from] SarifError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TagCtlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message_names_tool_and_field() {
        let err = ConfigError::MissingField {
            tool: "gosec".to_string(),
            field: "imageTag",
        };
        assert_eq!(
            err.to_string(),
            "Tool 'gosec' is missing required field 'imageTag'"
        );
    }

    #[test]
    fn test_config_error_is_transparent() {
        let err: TagCtlError = ConfigError::NotAMapping.into();
        assert_eq!(
            err.to_string(),
            "Configuration must be a mapping of tool name to tool entry"
        );
    }
}
