//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Storegate backend.
//! It provides concrete implementations of the collaborator traits declared
//! in `sg_core`.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: MySQL account stores using SQLx
//! - **Cache**: Redis client and the one-time passcode store
//! - **Notification**: Email delivery of passcodes
//! - **Security**: bcrypt password verification
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)
//! - `redis-cache`: Enable Redis caching support (default)
//! - `mock-services`: Use the mock email channel regardless of configuration

use sg_core::errors::DomainError;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Cache module - Redis client and passcode store
pub mod cache;

/// Notification module - passcode delivery channels
pub mod notification;

/// Security module - password hashing
pub mod security;

/// Configuration module for infrastructure services
pub mod config {
    //! Configuration management for infrastructure services

    use serde::{Deserialize, Serialize};

    pub use sg_shared::config::{CacheConfig, DatabaseConfig};

    /// Email provider configuration
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct EmailConfig {
        /// Email provider ("http" or "mock")
        pub provider: String,
        /// Provider send endpoint
        pub api_url: String,
        /// Provider API key, sent as a bearer token
        pub api_key: String,
        /// Sender address
        pub from_address: String,
        /// Request timeout in seconds
        pub timeout_seconds: u64,
    }

    impl Default for EmailConfig {
        fn default() -> Self {
            Self {
                provider: "mock".to_string(),
                api_url: String::new(),
                api_key: String::new(),
                from_address: "no-reply@storegate.local".to_string(),
                timeout_seconds: 10,
            }
        }
    }

    impl EmailConfig {
        /// Load email configuration from environment variables
        pub fn from_env() -> Self {
            let defaults = Self::default();
            Self {
                provider: std::env::var("EMAIL_PROVIDER").unwrap_or(defaults.provider),
                api_url: std::env::var("EMAIL_API_URL").unwrap_or(defaults.api_url),
                api_key: std::env::var("EMAIL_API_KEY").unwrap_or(defaults.api_key),
                from_address: std::env::var("EMAIL_FROM").unwrap_or(defaults.from_address),
                timeout_seconds: std::env::var("EMAIL_TIMEOUT_SECONDS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.timeout_seconds),
            }
        }

        pub fn is_mock(&self) -> bool {
            cfg!(feature = "mock-services") || self.provider.eq_ignore_ascii_case("mock")
        }
    }
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Email delivery error
    #[error("Email service error: {0}")]
    Email(String),

    /// Password hashing error
    #[error("Password hashing error: {0}")]
    Hashing(#[from] bcrypt::BcryptError),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        DomainError::Internal {
            message: error.to_string(),
        }
    }
}
