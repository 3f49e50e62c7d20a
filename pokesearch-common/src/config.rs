//! Card API client configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "https://api.pokemontcg.io/v2";

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API base URL must be http(s), got {0:?}")]
    InvalidBaseUrl(String),
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

/// Where and how to reach the card API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL without trailing slash, e.g. `https://api.pokemontcg.io/v2`
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Sent as `X-Api-Key` when present. The API works without one at a lower rate limit.
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            api_key: None,
        }
    }
}

impl ApiConfig {
    /// Build a config from optional overrides, falling back to defaults.
    ///
    /// Blank values count as unset.
    pub fn from_values(
        api_base_url: Option<&str>,
        api_key: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(url) = api_base_url.map(str::trim).filter(|s| !s.is_empty()) {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        config.api_key = api_key
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = &self.api_base_url;
        if url.starts_with("https://") || url.starts_with("http://") {
            Ok(())
        } else {
            Err(ConfigError::InvalidBaseUrl(url.clone()))
        }
    }

    /// Endpoint for card searches
    pub fn cards_endpoint(&self) -> String {
        format!("{}/cards", self.api_base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_api() {
        let config = ApiConfig::from_values(None, None).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.api_key, None);
        assert_eq!(config.cards_endpoint(), "https://api.pokemontcg.io/v2/cards");
    }

    #[test]
    fn overrides_are_trimmed() {
        let config = ApiConfig::from_values(Some(" http://localhost:8080/v2/ "), Some("  key-123 "))
            .unwrap();
        assert_eq!(config.cards_endpoint(), "http://localhost:8080/v2/cards");
        assert_eq!(config.api_key.as_deref(), Some("key-123"));
    }

    #[test]
    fn blank_overrides_fall_back() {
        let config = ApiConfig::from_values(Some(""), Some("   ")).unwrap();
        assert_eq!(config, ApiConfig::default());
    }

    #[test]
    fn rejects_non_http_url() {
        let err = ApiConfig::from_values(Some("ftp://cards"), None).unwrap_err();
        assert_eq!(err, ConfigError::InvalidBaseUrl("ftp://cards".to_string()));
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: ApiConfig = serde_json::from_str(r#"{ "api_key": "abc" }"#).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.api_key.as_deref(), Some("abc"));
    }
}
