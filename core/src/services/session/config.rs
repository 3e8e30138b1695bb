//! Configuration for the session service

use sg_shared::config::auth::AuthConfig;

use crate::domain::entities::otp::{OTP_LENGTH, OTP_TTL_SECONDS};
use crate::domain::entities::token::{ADMIN_TOKEN_LIFETIME_SECS, CUSTOMER_TOKEN_LIFETIME_SECS};

/// Lifetimes and passcode settings used when issuing sessions
#[derive(Debug, Clone)]
pub struct SessionServiceConfig {
    /// Administrator token lifetime in seconds
    pub admin_token_lifetime: i64,
    /// Customer token lifetime in seconds
    pub customer_token_lifetime: i64,
    /// Passcode time-to-live in seconds
    pub otp_ttl_seconds: u64,
    /// Passcode length in digits
    pub otp_length: usize,
}

impl Default for SessionServiceConfig {
    fn default() -> Self {
        Self {
            admin_token_lifetime: ADMIN_TOKEN_LIFETIME_SECS,
            customer_token_lifetime: CUSTOMER_TOKEN_LIFETIME_SECS,
            otp_ttl_seconds: OTP_TTL_SECONDS,
            otp_length: OTP_LENGTH,
        }
    }
}

impl From<&AuthConfig> for SessionServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            admin_token_lifetime: config.jwt.admin_token_lifetime,
            customer_token_lifetime: config.jwt.customer_token_lifetime,
            otp_ttl_seconds: config.otp.ttl_seconds,
            otp_length: config.otp.length,
        }
    }
}
