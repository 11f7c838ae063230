//! Configuration management for lnr
//!
//! Everything comes from the environment. The API key is required before any
//! client can be built; the remaining variables override the client settings
//! and exist mostly so tests can point the CLI at a local server.

use std::time::Duration;

use crate::error::{ConfigError, Result};

/// Environment variable holding the Linear personal API key
pub const ENV_API_KEY: &str = "LINEAR_API_KEY";

/// Environment variable overriding the GraphQL endpoint
pub const ENV_API_URL: &str = "LINEAR_API_URL";

/// Environment variable overriding the rate-limit retry count
pub const ENV_MAX_RETRIES: &str = "LNR_MAX_RETRIES";

/// Environment variable overriding the per-request deadline (seconds)
pub const ENV_TIMEOUT_SECS: &str = "LNR_TIMEOUT_SECS";

/// Linear GraphQL API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.linear.app/graphql";

/// Retries after a 429 before the rate-limited response is handed back
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// First backoff step; doubles on every retry
pub const DEFAULT_BASE_BACKOFF: Duration = Duration::from_secs(1);

/// Overall deadline for one logical request, retries included
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings injected into the API client at construction time.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSettings {
    /// GraphQL endpoint URL
    pub endpoint: String,

    /// Maximum retries on "too many requests" (0 disables retrying)
    pub max_retries: u32,

    /// Backoff before the first retry
    pub base_backoff: Duration,

    /// Deadline for a whole request including retries
    pub timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
            base_backoff: DEFAULT_BASE_BACKOFF,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientSettings {
    /// Point the client at a different endpoint.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the retry count.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the first backoff step.
    #[cfg(test)]
    pub fn base_backoff(mut self, backoff: Duration) -> Self {
        self.base_backoff = backoff;
        self
    }

    /// Set the overall request deadline.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    /// Linear API key, sent verbatim in the Authorization header
    pub api_key: String,

    /// Client settings
    pub settings: ClientSettings,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("settings", &self.settings)
            .finish()
    }
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get(ENV_API_KEY).ok_or(ConfigError::MissingApiKey)?;

        let mut settings = ClientSettings::default();

        if let Some(endpoint) = get(ENV_API_URL) {
            settings = settings.endpoint(endpoint);
        }

        if let Some(raw) = get(ENV_MAX_RETRIES) {
            let retries = raw.trim().parse().map_err(|_| {
                ConfigError::Invalid(format!("{} must be a whole number, got '{}'", ENV_MAX_RETRIES, raw))
            })?;
            settings = settings.max_retries(retries);
        }

        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                ConfigError::Invalid(format!("{} must be a whole number, got '{}'", ENV_TIMEOUT_SECS, raw))
            })?;
            if secs == 0 {
                return Err(ConfigError::Invalid(format!("{} must be greater than zero", ENV_TIMEOUT_SECS)).into());
            }
            settings = settings.timeout(Duration::from_secs(secs));
        }

        Ok(Self { api_key, settings })
    }
}
