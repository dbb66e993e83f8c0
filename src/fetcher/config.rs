//! Fetcher configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Environment variable overriding the API base URL.
pub const ENV_BASE_URL: &str = "USERFETCH_BASE_URL";
/// Environment variable overriding the response body limit in bytes.
pub const ENV_MAX_BODY_SIZE: &str = "USERFETCH_MAX_BODY_SIZE";
/// Environment variable selecting the default fetch mode.
pub const ENV_MODE: &str = "USERFETCH_MODE";

/// Which contract [`UserFetcher::fetch`](crate::fetcher::UserFetcher::fetch) follows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchMode {
    /// No input, status or shape checks.
    Permissive,
    /// Reject empty IDs, non-200 statuses and records without `id`/`name`.
    #[default]
    Validating,
}

impl fmt::Display for FetchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchMode::Permissive => write!(f, "permissive"),
            FetchMode::Validating => write!(f, "validating"),
        }
    }
}

impl FromStr for FetchMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(FetchMode::Permissive),
            "validating" => Ok(FetchMode::Validating),
            other => Err(ConfigError::new(ENV_MODE, format!("unknown mode '{}'", other))),
        }
    }
}

/// Configuration for the user fetcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// Scheme and authority of the users API, e.g. `http://127.0.0.1:8080`.
    pub base_url: String,
    /// Path prefix under which users live.
    pub users_path: String,
    /// Maximum response body size in bytes.
    pub max_body_size: usize,
    /// Contract used by `fetch`.
    pub mode: FetchMode,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            users_path: "/api/users".to_string(),
            max_body_size: 10 * 1024 * 1024, // 10MB
            mode: FetchMode::default(),
        }
    }
}

impl FetcherConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load defaults overridden by `USERFETCH_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load defaults overridden by whatever `lookup` returns for each
    /// `USERFETCH_*` key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base_url) = lookup(ENV_BASE_URL) {
            config.base_url = base_url;
        }

        if let Some(size) = lookup(ENV_MAX_BODY_SIZE) {
            config.max_body_size = size.trim().parse().map_err(|_| {
                ConfigError::new(ENV_MAX_BODY_SIZE, format!("'{}' is not a byte count", size))
            })?;
        }

        if let Some(mode) = lookup(ENV_MODE) {
            config.mode = mode.parse()?;
        }

        Ok(config)
    }

    /// Set the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the users path prefix.
    pub fn users_path(mut self, users_path: impl Into<String>) -> Self {
        self.users_path = users_path.into();
        self
    }

    /// Set the maximum response body size.
    pub fn max_body_size(mut self, max_body_size: usize) -> Self {
        self.max_body_size = max_body_size;
        self
    }

    /// Set the fetch mode.
    pub fn mode(mut self, mode: FetchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Build the URL of a single user.
    ///
    /// The ID is inserted verbatim, so a `?` or `#` in it starts a query or
    /// fragment.
    pub fn user_url(&self, user_id: &str) -> String {
        format!(
            "{}{}/{}",
            self.base_url.trim_end_matches('/'),
            self.users_path.trim_end_matches('/'),
            user_id
        )
    }
}

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The setting that was rejected.
    pub key: &'static str,
    /// Error message.
    pub message: String,
}

impl ConfigError {
    fn new(key: &'static str, message: impl Into<String>) -> Self {
        Self {
            key,
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.key, self.message)
    }
}

impl std::error::Error for ConfigError {}
