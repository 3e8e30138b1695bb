//! Authentication configuration: token signing, admin session cookie, passcodes

use serde::{Deserialize, Serialize};

use super::environment::Environment;

const DEFAULT_SECRET: &str = "development-secret-please-change-in-production";

/// JWT signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Process-wide signing secret
    pub secret: String,

    /// HMAC algorithm name (HS256, HS384, HS512)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim
    pub audience: String,

    /// Administrator token lifetime in seconds
    pub admin_token_lifetime: i64,

    /// Customer token lifetime in seconds
    pub customer_token_lifetime: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            algorithm: default_algorithm(),
            issuer: String::from("storegate"),
            audience: String::from("storegate-api"),
            admin_token_lifetime: 86_400,
            customer_token_lifetime: 2_592_000,
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

/// Cookie settings for the administrator session token
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionCookieConfig {
    /// Cookie carrying the admin token
    pub cookie_name: String,

    /// HTTPS-only flag
    pub secure: bool,

    /// SameSite attribute
    pub same_site: String,

    #[serde(default = "default_http_only")]
    pub http_only: bool,
}

impl Default for SessionCookieConfig {
    fn default() -> Self {
        Self {
            cookie_name: String::from("admin_token"),
            secure: false,
            same_site: String::from("Strict"),
            http_only: default_http_only(),
        }
    }
}

/// One-time passcode settings for customer sign-in
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Passcode time-to-live in the ephemeral store
    pub ttl_seconds: u64,

    /// Number of decimal digits
    pub length: usize,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: 600,
            length: 6,
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    pub jwt: JwtConfig,

    #[serde(default)]
    pub cookie: SessionCookieConfig,

    #[serde(default)]
    pub otp: OtpConfig,
}

impl AuthConfig {
    /// Defaults for an environment; production sets the Secure cookie flag
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            jwt: JwtConfig::default(),
            cookie: SessionCookieConfig {
                secure: environment.is_production(),
                ..Default::default()
            },
            otp: OtpConfig::default(),
        }
    }

    /// Create from environment variables
    pub fn from_env(environment: Environment) -> Self {
        let defaults = Self::for_environment(environment);

        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET").unwrap_or(defaults.jwt.secret),
            algorithm: std::env::var("JWT_ALGORITHM").unwrap_or(defaults.jwt.algorithm),
            issuer: std::env::var("JWT_ISSUER").unwrap_or(defaults.jwt.issuer),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or(defaults.jwt.audience),
            ..defaults.jwt
        };

        let cookie = SessionCookieConfig {
            cookie_name: std::env::var("ADMIN_COOKIE_NAME").unwrap_or(defaults.cookie.cookie_name),
            ..defaults.cookie
        };

        Self {
            jwt,
            cookie,
            otp: defaults.otp,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

fn default_algorithm() -> String {
    String::from("HS256")
}

fn default_http_only() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.admin_token_lifetime, 86_400);
        assert_eq!(config.customer_token_lifetime, 2_592_000);
        assert_eq!(config.algorithm, "HS256");
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_jwt_config_with_secret() {
        let config = JwtConfig::new("my-secret");
        assert!(!config.is_using_default_secret());
        assert_eq!(config.issuer, "storegate");
    }

    #[test]
    fn test_cookie_is_secure_only_in_production() {
        let dev = AuthConfig::for_environment(Environment::Development);
        assert!(!dev.cookie.secure);
        assert!(dev.cookie.http_only);
        assert_eq!(dev.cookie.same_site, "Strict");

        let prod = AuthConfig::for_environment(Environment::Production);
        assert!(prod.cookie.secure);
    }
}
