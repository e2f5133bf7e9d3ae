//! Blocking Docker Hub client

use super::{RegistryError, Result, TagList, TagLookup};
use crate::config::types::RegistrySettings;
use log::{debug, info};
use reqwest::blocking::Client;

/// Docker Hub v2 repositories API client.
///
/// One GET per lookup; no retries, no caching, and the HTTP client's own
/// default timeouts.
#[derive(Debug, Clone)]
pub struct DockerHubClient {
    client: Client,
    base_url: String,
    namespace: String,
}

impl DockerHubClient {
    /// Create a client for `namespace` on the registry at `base_url`.
    pub fn new(base_url: impl Into<String>, namespace: impl Into<String>) -> Result<Self> {
        Self::build(base_url.into(), namespace.into(), None)
    }

    /// Create a client from the `[registry]` settings section.
    pub fn from_settings(settings: &RegistrySettings) -> Result<Self> {
        Self::build(
            settings.base_url.clone(),
            settings.namespace.clone(),
            settings.user_agent.clone(),
        )
    }

    fn build(base_url: String, namespace: String, user_agent: Option<String>) -> Result<Self> {
        let user_agent = user_agent.unwrap_or_else(|| {
            format!(
                "tag-ctl/{} ({})",
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_REPOSITORY")
            )
        });
        let client = Client::builder().user_agent(user_agent).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            namespace,
        })
    }

    /// URL of the tag listing for `repo_name`.
    pub fn tags_url(&self, repo_name: &str) -> String {
        format!(
            "{}/v2/repositories/{}/{}/tags",
            self.base_url, self.namespace, repo_name
        )
    }

    /// Fetch the tag list for `repo_name` as the registry orders it.
    pub fn list_tags(&self, repo_name: &str) -> Result<TagList> {
        let url = self.tags_url(repo_name);
        debug!("GET {}", url);

        let response = self.client.get(&url).send()?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(RegistryError::ApiError {
                status: status.as_u16(),
                url,
                message: body,
            });
        }

        serde_json::from_str(&body).map_err(|e| RegistryError::ParseError {
            repo: repo_name.to_string(),
            message: e.to_string(),
        })
    }
}

impl TagLookup for DockerHubClient {
    fn latest_tag(&self, repo_name: &str) -> Result<String> {
        let tags = self.list_tags(repo_name)?;
        let latest = tags
            .first_name()
            .ok_or_else(|| RegistryError::NoTags(repo_name.to_string()))?;

        info!("{}/{} latest tag: {}", self.namespace, repo_name, latest);
        Ok(latest.to_string())
    }
}
