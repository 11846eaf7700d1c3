//! Configuration for the Storefront API client
//!
//! Supports environment-based configuration with sensible defaults.

use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Default API root of a locally running backend
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Environment variable holding the API base URL
pub const API_URL_VAR: &str = "STOREFRONT_API_URL";

/// Environment variable holding the request timeout in seconds
pub const TIMEOUT_VAR: &str = "STOREFRONT_TIMEOUT_SECS";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to
    pub base_url: String,
    /// Request timeout; `None` keeps the transport default
    #[serde(default, with = "optional_secs")]
    pub timeout: Option<Duration>,
}

mod optional_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(
        duration: &Option<Duration>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        duration.map(|d| d.as_secs()).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Duration>, D::Error> {
        let secs = Option::<u64>::deserialize(deserializer)?;
        Ok(secs.map(Duration::from_secs))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `STOREFRONT_API_URL`: Base URL (defaults to `http://localhost:8000/api`)
    /// - `STOREFRONT_TIMEOUT_SECS`: Request timeout in seconds
    pub fn from_env() -> ApiResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> ApiResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(API_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = match lookup(TIMEOUT_VAR) {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    ApiError::config(format!("{TIMEOUT_VAR} must be a whole number, got {raw:?}"))
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let config = Self { base_url, timeout };
        config.validate()?;
        Ok(config)
    }

    /// Builder-style method to set base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builder-style method to set timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> ApiResult<()> {
        if self.base_url.is_empty() {
            return Err(ApiError::config("base_url cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ApiError::config("base_url must start with http:// or https://"));
        }

        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(ApiError::config("timeout cannot be zero"));
        }

        Ok(())
    }
}
