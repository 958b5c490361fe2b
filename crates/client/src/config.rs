//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CATALOGO_API_URL` - Base URL of the catalog server
//!   (default: `http://localhost:3001`)

use thiserror::Error;
use url::Url;

/// Default base endpoint of the catalog server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Catalog client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the catalog server.
    pub base_url: Url,
}

impl ClientConfig {
    /// Load configuration from the environment, falling back to
    /// [`DEFAULT_BASE_URL`] when `CATALOGO_API_URL` is unset or empty.
    ///
    /// # Errors
    ///
    /// Returns an error if `CATALOGO_API_URL` is set but not a valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = get_optional_env("CATALOGO_API_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::with_base_url(&raw)
    }

    /// Build a configuration for an explicit base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid URL.
    pub fn with_base_url(base_url: &str) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("CATALOGO_API_URL".to_string(), e.to_string())
        })?;
        Ok(Self { base_url })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            // The default endpoint is a compile-time constant; parsing it
            // cannot fail.
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
        }
    }
}

/// Get an optional environment variable, treating empty values as unset.
fn get_optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url.as_str(), "http://localhost:3001/");
    }

    #[test]
    fn test_with_base_url_rejects_garbage() {
        assert!(ClientConfig::with_base_url("not a url").is_err());
    }

    #[test]
    fn test_with_base_url_accepts_custom_endpoint() {
        let config =
            ClientConfig::with_base_url("http://catalog.internal:8080").expect("valid URL");
        assert_eq!(config.base_url.host_str(), Some("catalog.internal"));
    }
}
