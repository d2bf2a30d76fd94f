//! Client configuration
//!
//! Loaded from the `[api]` table of the settings file, with the base URL
//! overridable through `BHP_API_BASE_URL`.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Base URL used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "BHP_API_BASE_URL";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// File is not valid TOML for this schema
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Base URL unusable
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
}

/// Prediction API client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API root, e.g. `http://localhost:5000/api`
    pub base_url: String,
}

impl ClientConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With base URL
    #[inline]
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Parse from TOML text
    ///
    /// # Errors
    /// Returns error if the text is not valid TOML
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load from a TOML file
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Apply `BHP_API_BASE_URL` if set and non-empty
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => self.with_base_url(url.trim()),
            _ => self,
        }
    }

    /// Check the base URL is an http(s) URL
    ///
    /// # Errors
    /// Returns error for any other scheme or an empty host
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.base_url.trim();
        let rest = url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"))
            .ok_or_else(|| ConfigError::InvalidBaseUrl(self.base_url.clone()))?;
        if rest.is_empty() || rest.starts_with('/') {
            return Err(ConfigError::InvalidBaseUrl(self.base_url.clone()));
        }
        Ok(())
    }

    /// Full URL of an endpoint under the base URL
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_points_at_local_api() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint("predict"), "http://localhost:5000/api/predict");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn endpoint_joins_slashes() {
        let config = ClientConfig::new().with_base_url("http://host:8080/api/");
        assert_eq!(config.endpoint("/locations"), "http://host:8080/api/locations");
    }

    #[test]
    fn from_toml_fills_defaults() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());

        let config = ClientConfig::from_toml(r#"base_url = "https://bhp.example/api""#).unwrap();
        assert_eq!(config.base_url, "https://bhp.example/api");
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"base_url = "http://10.0.0.2:5000/api""#).unwrap();

        let config = ClientConfig::load(file.path()).unwrap();
        assert_eq!(config.base_url, "http://10.0.0.2:5000/api");
    }

    #[test]
    fn load_missing_file() {
        let err = ClientConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn validate_rejects_non_http() {
        for url in ["ftp://host/api", "localhost:5000", "http://", "https:///api"] {
            let config = ClientConfig::new().with_base_url(url);
            assert!(config.validate().is_err(), "{url} should be rejected");
        }
    }
}
