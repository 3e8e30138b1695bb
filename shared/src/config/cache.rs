//! Cache configuration module

use serde::{Deserialize, Serialize};

/// Redis configuration for the ephemeral passcode store
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis connection URL
    pub url: String,

    /// Connection timeout in seconds
    pub connection_timeout: u64,

    /// Key prefix prepended to every stored key
    #[serde(default)]
    pub key_prefix: Option<String>,

    /// Maximum retry attempts for a failed command
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Base delay between retries in milliseconds
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: String::from("redis://localhost:6379"),
            connection_timeout: 5,
            key_prefix: None,
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl CacheConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let url = std::env::var("REDIS_URL")
            .unwrap_or_else(|_| "redis://localhost:6379".to_string());
        let key_prefix = std::env::var("REDIS_KEY_PREFIX").ok();

        Self {
            url,
            key_prefix,
            ..Default::default()
        }
    }

    /// Create a new cache configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Apply the configured prefix to a key
    pub fn prefixed(&self, key: &str) -> String {
        match &self.key_prefix {
            Some(prefix) => format!("{}:{}", prefix, key),
            None => key.to_string(),
        }
    }
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    100
}
