//! Vocabulary service client configuration.
//!
//! Override via environment variables or explicit construction for tests.

use url::Url;

/// Base URL used when neither the environment nor a settings file gives one.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:9999";

/// Request timeout used when `ESGVOC_TIMEOUT_SECS` is unset.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for connecting to the vocabulary service.
#[derive(Debug, Clone)]
pub struct VocabApiConfig {
    /// Base URL of the service.
    pub api_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl VocabApiConfig {
    pub fn new(api_url: Url) -> Self {
        Self {
            api_url,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `ESGVOC_API_URL` (default: [`DEFAULT_API_URL`])
    /// - `ESGVOC_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_or(DEFAULT_API_URL)
    }

    /// Like [`from_env`](Self::from_env), with a caller-supplied fallback
    /// URL (typically the one recorded in the settings file).
    pub fn from_env_or(default_url: &str) -> Result<Self, ConfigError> {
        let timeout_secs = match std::env::var("ESGVOC_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };
        Ok(Self {
            api_url: env_url("ESGVOC_API_URL", default_url)?,
            timeout_secs,
        })
    }

    /// Configuration pointing at a local mock server.
    pub fn local_mock(port: u16) -> Result<Self, ConfigError> {
        let raw = format!("http://127.0.0.1:{port}");
        let api_url =
            Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(raw.clone(), e.to_string()))?;
        Ok(Self {
            api_url,
            timeout_secs: 5,
        })
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("ESGVOC_TIMEOUT_SECS must be a whole number of seconds, got '{0}'")]
    InvalidTimeout(String),
}
