//! Client configuration
//!
//! Endpoint, API key and transport settings. Values set explicitly on the
//! builder win over the `UNSTRUCTURED_API_URL` / `UNSTRUCTURED_API_KEY`
//! environment variables, which win over the built-in defaults.

use crate::error::{Error, Result};
use std::time::Duration;
use tracing::warn;
use url::Url;

/// Default API endpoint, including the version prefix
pub const DEFAULT_ENDPOINT: &str = "https://platform.unstructuredapp.io/api/v1";

/// Environment variable holding the API endpoint
pub const ENV_API_URL: &str = "UNSTRUCTURED_API_URL";

/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "UNSTRUCTURED_API_KEY";

/// Header carrying the API key on every request
pub const API_KEY_HEADER: &str = "Unstructured-API-Key";

/// Configuration for the API client
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL for all requests, e.g. `https://platform.unstructuredapp.io/api/v1`
    pub endpoint: Url,
    /// API key sent in the `Unstructured-API-Key` header
    pub api_key: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
            timeout: Duration::from_secs(60),
            user_agent: format!("unstructured-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint.as_str())
            .field("has_api_key", &self.api_key.is_some())
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    /// Create a new config builder, seeded from the environment
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Defaults overlaid with the environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_API_URL).filter(|v| !v.is_empty()) {
            match parse_endpoint(&raw) {
                Ok(url) => config.endpoint = url,
                Err(e) => warn!("Ignoring {ENV_API_URL}={raw}: {e}"),
            }
        }

        if let Some(key) = lookup(ENV_API_KEY).filter(|v| !v.is_empty()) {
            config.api_key = Some(key);
        }

        config
    }
}

/// Builder for client config
pub struct ClientConfigBuilder {
    config: ClientConfig,
    endpoint: Option<String>,
}

impl Default for ClientConfigBuilder {
    fn default() -> Self {
        Self {
            config: ClientConfig::from_env(),
            endpoint: None,
        }
    }
}

impl ClientConfigBuilder {
    /// Start from an explicit config instead of the environment
    pub fn from_config(config: ClientConfig) -> Self {
        Self {
            config,
            endpoint: None,
        }
    }

    /// Set the API endpoint
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the API key
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config, validating the endpoint
    pub fn build(self) -> Result<ClientConfig> {
        let mut config = self.config;
        if let Some(endpoint) = self.endpoint {
            config.endpoint = parse_endpoint(&endpoint)?;
        }
        Ok(config)
    }
}

fn default_endpoint() -> Url {
    Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL")
}

/// Parse an endpoint URL, requiring an http(s) scheme
pub fn parse_endpoint(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::config(format!(
            "Unsupported endpoint scheme '{other}' in {raw}"
        ))),
    }
}
