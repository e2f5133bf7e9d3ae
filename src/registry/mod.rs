//! Container registry lookups
//!
//! The auditor only needs one question answered per tool: "what is the newest
//! tag of this image?". `TagLookup` is that seam; `DockerHubClient` answers it
//! over the Docker Hub v2 repositories API.

mod client;
mod error;

pub use client::DockerHubClient;
pub use error::{RegistryError, Result};

use serde::{Deserialize, Serialize};

/// Tag list returned by `/v2/repositories/{namespace}/{repo}/tags`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TagList {
    #[serde(default)]
    pub results: Vec<TagRecord>,
}

/// One published tag.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TagRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

impl TagList {
    /// Name of the first tag in the list.
    pub fn first_name(&self) -> Option<&str> {
        self.results.first().map(|t| t.name.as_str())
    }
}

/// Resolves the latest published tag for an image.
///
/// Implementations return the tag the registry lists first and must not
/// reorder it: the registry is trusted to list tags newest-first.
pub trait TagLookup: Sync {
    /// Latest tag for `repo_name` (the image name with its namespace stripped).
    fn latest_tag(&self, repo_name: &str) -> Result<String>;
}
