//! Service endpoint configuration.
//!
//! # Environment Variables
//!
//! - `ECORP_ML_SERVICE_URL` - overrides the build default base URL
//!
//! Without the override, debug builds talk to the development host and
//! release builds to the deployed service.

use reqwest::Url;
use thiserror::Error;

/// Development service (LAN address of the machine running the service).
pub const DEV_SERVICE_URL: &str = "http://192.168.1.226:5001";

/// Deployed service.
pub const PROD_SERVICE_URL: &str = "https://your-ml-service.com";

/// Environment variable overriding the base URL.
pub const SERVICE_URL_ENV: &str = "ECORP_ML_SERVICE_URL";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("service URL is empty")]
    Empty,
    #[error("invalid service URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("unsupported URL scheme {0:?} (expected http or https)")]
    UnsupportedScheme(String),
}

/// Where the prediction service lives. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    base_url: String,
}

impl ServiceConfig {
    /// Validate and normalize a base URL (trailing slashes are dropped).
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, ConfigError> {
        let raw = base_url.as_ref().trim();
        if raw.is_empty() {
            return Err(ConfigError::Empty);
        }

        let parsed = Url::parse(raw).map_err(|e| ConfigError::InvalidUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => return Err(ConfigError::UnsupportedScheme(other.to_string())),
        }

        Ok(Self {
            base_url: raw.trim_end_matches('/').to_string(),
        })
    }

    /// The base URL chosen by build profile.
    pub fn for_build() -> Self {
        let base_url = if cfg!(debug_assertions) {
            DEV_SERVICE_URL
        } else {
            PROD_SERVICE_URL
        };
        Self {
            base_url: base_url.to_string(),
        }
    }

    /// Build default, overridden by `ECORP_ML_SERVICE_URL` when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::with_override(std::env::var(SERVICE_URL_ENV).ok())
    }

    fn with_override(value: Option<String>) -> Result<Self, ConfigError> {
        match value {
            Some(url) => Self::new(url),
            None => Ok(Self::for_build()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a service path such as `/api/sales`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::for_build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = ServiceConfig::new("http://localhost:5001//").unwrap();
        assert_eq!(config.base_url(), "http://localhost:5001");
        assert_eq!(config.endpoint("/health"), "http://localhost:5001/health");
    }

    #[test]
    fn build_default_depends_on_profile() {
        let expected = if cfg!(debug_assertions) {
            DEV_SERVICE_URL
        } else {
            PROD_SERVICE_URL
        };
        assert_eq!(ServiceConfig::for_build().base_url(), expected);
        assert_eq!(ServiceConfig::with_override(None).unwrap().base_url(), expected);
    }

    #[test]
    fn override_replaces_build_default() {
        let config = ServiceConfig::with_override(Some("https://ml.example.com/".into())).unwrap();
        assert_eq!(config.base_url(), "https://ml.example.com");
    }

    #[test]
    fn empty_override_is_rejected() {
        assert_eq!(
            ServiceConfig::with_override(Some("  ".into())),
            Err(ConfigError::Empty)
        );
    }

    #[test]
    fn non_http_schemes_are_rejected() {
        assert_eq!(
            ServiceConfig::new("ftp://files.example.com"),
            Err(ConfigError::UnsupportedScheme("ftp".into()))
        );
    }

    #[test]
    fn relative_urls_are_rejected() {
        assert!(matches!(
            ServiceConfig::new("localhost/api"),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }
}
