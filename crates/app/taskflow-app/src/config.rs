//! Client configuration.

use std::time::Duration;

use bon::Builder;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const EMBEDDED_CONFIG: &str = include_str!("../taskflow.toml");

const DEFAULT_SERVER_URL: &str = "http://localhost:3000";
const DEFAULT_API_BASE_PATH: &str = "/api/v1";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Where the client finds its collaborators and how it behaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(default)]
pub struct AppConfig {
    /// Origin of the task REST API
    #[builder(default = DEFAULT_SERVER_URL.to_string())]
    pub api_base_url: String,

    /// Path prefix of the task endpoints
    #[builder(default = DEFAULT_API_BASE_PATH.to_string())]
    pub api_base_path: String,

    /// Origin of the auth provider
    #[builder(default = DEFAULT_SERVER_URL.to_string())]
    pub auth_base_url: String,

    /// Per-request timeout, ignored in the browser
    #[builder(default = 30)]
    pub request_timeout_secs: u64,

    /// How long a toast stays on screen
    #[builder(default = 5000)]
    pub notice_timeout_ms: u32,

    /// Target of the "View Documentation" link on the landing page
    pub docs_url: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl AppConfig {
    /// Embedded defaults plus build-time URL overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_toml_str(EMBEDDED_CONFIG)?;
        config.apply_overrides(option_env!("TASKFLOW_API_URL"), option_env!("TASKFLOW_AUTH_URL"));
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn apply_overrides(&mut self, api_url: Option<&str>, auth_url: Option<&str>) {
        if let Some(url) = api_url.filter(|url| !url.trim().is_empty()) {
            self.api_base_url = url.trim().to_string();
        }
        if let Some(url) = auth_url.filter(|url| !url.trim().is_empty()) {
            self.auth_base_url = url.trim().to_string();
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, url) in [
            ("api_base_url", &self.api_base_url),
            ("auth_base_url", &self.auth_base_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be an http(s) URL, got '{url}'"
                )));
            }
        }
        if self.notice_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "notice_timeout_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_is_valid() {
        let config = AppConfig::from_toml_str(EMBEDDED_CONFIG).unwrap();
        config.validate().unwrap();
        assert_eq!(config.api_base_path, "/api/v1");
        assert_eq!(config.notice_timeout_ms, 5000);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = AppConfig::from_toml_str(r#"api_base_url = "https://api.example.com""#).unwrap();
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.auth_base_url, DEFAULT_SERVER_URL);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.docs_url, None);
    }

    #[test]
    fn overrides_replace_urls() {
        let mut config = AppConfig::default();
        config.apply_overrides(Some("https://tasks.example.com"), Some("  "));
        assert_eq!(config.api_base_url, "https://tasks.example.com");
        assert_eq!(config.auth_base_url, DEFAULT_SERVER_URL);
    }

    #[test]
    fn rejects_non_http_urls() {
        let config = AppConfig::builder()
            .auth_base_url("ftp://auth".to_string())
            .build();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(matches!(
            AppConfig::from_toml_str("request_timeout_secs = \"soon\""),
            Err(ConfigError::Parse(_))
        ));
    }
}
