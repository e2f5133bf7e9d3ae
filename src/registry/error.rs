//! Error types for registry lookups

use thiserror::Error;

/// Errors that can occur when asking the registry for an image's tags
#[derive(Debug, Error)]
pub enum RegistryError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Registry answered with a non-success status
    #[error("Registry returned {status} for {url}: {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
        /// Response body, if any
        message: String,
    },

    /// Failed to parse the tag list
    #[error("Failed to parse tag list for '{repo}': {message}")]
    ParseError { repo: String, message: String },

    /// The registry returned an empty tag list
    #[error("Registry returned no tags for '{0}'")]
    NoTags(String),
}

/// Result type alias for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;
