//! Backend address configuration, resolved once at startup.

use reqwest::Url;
use thiserror::Error;

/// Environment variable overriding the backend base address.
pub const API_URL_ENV: &str = "CHAINPULSE_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {API_URL_ENV} value {value:?}: {source}")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("base URL {0} cannot carry a path")]
    NotHierarchical(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: Url,
}

impl ApiConfig {
    pub fn new(base: &str) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base).map_err(|source| ConfigError::InvalidBaseUrl {
            value: base.to_string(),
            source,
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::NotHierarchical(base.to_string()));
        }
        Ok(Self { base_url })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves the base address through `lookup`, falling back to the local
    /// development backend when the override is absent or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(API_URL_ENV) {
            Some(value) if !value.trim().is_empty() => Self::new(value.trim()),
            _ => Ok(Self::default()),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_override_uses_local_backend() {
        let config = ApiConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:8000/");
    }

    #[test]
    fn blank_override_is_ignored() {
        let config = ApiConfig::from_lookup(|_| Some("   ".to_string())).unwrap();
        assert_eq!(config, ApiConfig::default());
    }

    #[test]
    fn override_is_read_from_the_named_variable() {
        let config = ApiConfig::from_lookup(|key| {
            (key == API_URL_ENV).then(|| "https://backend.example.com/v1".to_string())
        })
        .unwrap();
        assert_eq!(config.base_url.as_str(), "https://backend.example.com/v1");
    }

    #[test]
    fn unparsable_override_is_rejected() {
        let err = ApiConfig::from_lookup(|_| Some("not a url".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn opaque_url_is_rejected() {
        let err = ApiConfig::new("mailto:ops@example.com").unwrap_err();
        assert!(matches!(err, ConfigError::NotHierarchical(_)));
    }
}
