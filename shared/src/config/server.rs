//! Server configuration module

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8080,
            workers: 0,
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("SERVER_HOST").unwrap_or(defaults.host),
            port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            workers: std::env::var("SERVER_WORKERS")
                .ok()
                .and_then(|w| w.parse().ok())
                .unwrap_or(defaults.workers),
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// CORS configuration for the admin dashboard and storefront origins
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Allowed origins; empty allows any origin (development only)
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Preflight cache max age in seconds
    #[serde(default = "default_max_age")]
    pub max_age: usize,
}

impl CorsConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let allowed_origins = std::env::var("ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();
        let max_age = std::env::var("CORS_MAX_AGE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_max_age);

        Self {
            allowed_origins,
            max_age,
        }
    }
}

fn default_max_age() -> usize {
    3600
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address() {
        let config = ServerConfig::new("0.0.0.0", 9000);
        assert_eq!(config.bind_address(), "0.0.0.0:9000");
    }
}
