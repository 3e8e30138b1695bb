//! Configuration module with business-specific sub-modules
//!
//! - `auth` - Token signing, session cookie and passcode settings
//! - `cache` - Redis configuration for the passcode store
//! - `database` - Account database connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server and CORS configuration

pub mod auth;
pub mod cache;
pub mod database;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};

pub use auth::{AuthConfig, JwtConfig, OtpConfig, SessionCookieConfig};
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use environment::{Environment, LoggingConfig};
pub use server::{CorsConfig, ServerConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub environment: Environment,

    pub server: ServerConfig,

    pub database: DatabaseConfig,

    pub cache: CacheConfig,

    pub auth: AuthConfig,

    #[serde(default)]
    pub cors: CorsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            cache: CacheConfig::default(),
            auth: AuthConfig::for_environment(env),
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// The session cookie's `Secure` flag follows the detected environment.
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            cache: CacheConfig::from_env(),
            auth: AuthConfig::from_env(environment),
            cors: CorsConfig::from_env(),
            logging: LoggingConfig::for_environment(environment),
        }
    }
}
