//! Shared configuration and common types for the Storegate server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - The JSON error body returned by every endpoint

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CacheConfig, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    LoggingConfig, OtpConfig, ServerConfig, SessionCookieConfig,
};
pub use errors::{error_codes, ErrorResponse};
