use serde::{Deserialize, Serialize};

/// Default registry API host.
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.hub.docker.com";

/// Default repository namespace the tool images are published under.
pub const DEFAULT_NAMESPACE: &str = "huskyci";

/// Main settings structure (`.tag-ctl.toml`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub registry: RegistrySettings,
    pub output: OutputSettings,
}

/// Registry lookup settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrySettings {
    pub base_url: String,
    pub namespace: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_REGISTRY_URL.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            user_agent: None,
        }
    }
}

/// Output settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Preferred audit output format (`tty`, `github`, `json`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Disable colored terminal output.
    pub no_color: bool,
}

/// A declared tool whose container image tag is pinned in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolConfig {
    pub name: String,
    pub image: String,
    #[serde(rename = "imageTag")]
    pub image_tag: String,
}

impl ToolConfig {
    pub fn new(name: impl Into<String>, image: impl Into<String>, image_tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            image_tag: image_tag.into(),
        }
    }

    /// The registry lookup key: the final path segment of `image`.
    pub fn repo_name(&self) -> &str {
        repo_name(&self.image)
    }
}

/// Strip any namespace prefix from an image reference.
///
/// `"huskyci/gosec"` becomes `"gosec"`; a reference without `/` is returned as is.
pub fn repo_name(image: &str) -> &str {
    image.rsplit('/').next().unwrap_or(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_name_strips_namespace() {
        assert_eq!(repo_name("huskyci/gosec"), "gosec");
        assert_eq!(repo_name("docker.io/huskyci/bandit"), "bandit");
    }

    #[test]
    fn test_repo_name_without_slash_is_identity() {
        assert_eq!(repo_name("gosec"), "gosec");
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.registry.base_url, DEFAULT_REGISTRY_URL);
        assert_eq!(settings.registry.namespace, DEFAULT_NAMESPACE);
        assert!(settings.output.format.is_none());
        assert!(!settings.output.no_color);
    }
}
