//! Provider configuration
//!
//! Loaded from YAML; every key is optional and falls back to the values the
//! Readwise API expects.

use crate::error::{Error, Result};
use crate::http::HttpClientConfig;
use crate::types::Collection;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://readwise.io/api/v2/";

/// Records fetched when the query carries no limit
pub const DEFAULT_LIMIT: i64 = 10_000;

/// Largest page size the API accepts
pub const MAX_PAGE_SIZE: i64 = 1000;

/// Name of the secret holding the API token
pub const DEFAULT_SECRET_NAME: &str = "readwiseToken";

/// Runtime configuration for `ReadwiseProvider`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// API root; collection paths are joined onto it
    pub base_url: String,

    /// Limit used when the query has no limit clause
    pub default_limit: i64,

    /// Per-request page size cap
    pub max_page_size: i64,

    /// Secret store key for the API token
    pub secret_name: String,

    /// Optional per-request timeout in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_limit: DEFAULT_LIMIT,
            max_page_size: MAX_PAGE_SIZE,
            secret_name: DEFAULT_SECRET_NAME.to_string(),
            timeout_secs: None,
            user_agent: format!("readwise-provider/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ProviderConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config file {}: {e}", path.display()))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Use a different API root
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Check that the configuration is usable
    pub fn validate(&self) -> Result<()> {
        self.base_url()?;
        if self.max_page_size < 1 {
            return Err(Error::config(format!(
                "max_page_size must be at least 1, got {}",
                self.max_page_size
            )));
        }
        if self.secret_name.trim().is_empty() {
            return Err(Error::config("secret_name must not be empty"));
        }
        Ok(())
    }

    /// Parsed API root, always ending in `/`
    pub fn base_url(&self) -> Result<Url> {
        let raw = if self.base_url.ends_with('/') {
            self.base_url.clone()
        } else {
            format!("{}/", self.base_url)
        };
        let url = Url::parse(&raw)
            .map_err(|e| Error::config(format!("Invalid base_url '{}': {e}", self.base_url)))?;
        if url.cannot_be_a_base() {
            return Err(Error::config(format!(
                "Invalid base_url '{}': not a hierarchical URL",
                self.base_url
            )));
        }
        Ok(url)
    }

    /// Root endpoint of a collection
    pub fn collection_url(&self, collection: Collection) -> Result<Url> {
        Ok(self.base_url()?.join(collection.path())?)
    }

    /// HTTP client settings derived from this config
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder().user_agent(&self.user_agent);
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build()
    }
}
