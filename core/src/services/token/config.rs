//! Configuration for the token service

use jsonwebtoken::Algorithm;
use sg_shared::config::auth::JwtConfig;

use crate::domain::entities::token::{JWT_AUDIENCE, JWT_ISSUER};
use crate::errors::DomainError;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm (HMAC family only)
    pub algorithm: Algorithm,
    /// Expected `iss` claim
    pub issuer: String,
    /// Expected `aud` claim
    pub audience: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            algorithm: Algorithm::HS256,
            issuer: JWT_ISSUER.to_string(),
            audience: JWT_AUDIENCE.to_string(),
        }
    }
}

impl TokenServiceConfig {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            ..Default::default()
        }
    }

    /// Build from the shared JWT configuration
    ///
    /// # Errors
    ///
    /// `DomainError::Internal` if the algorithm name is not HS256, HS384 or HS512
    pub fn from_jwt_config(config: &JwtConfig) -> Result<Self, DomainError> {
        let algorithm = match config.algorithm.to_ascii_uppercase().as_str() {
            "HS256" => Algorithm::HS256,
            "HS384" => Algorithm::HS384,
            "HS512" => Algorithm::HS512,
            other => {
                return Err(DomainError::internal(format!(
                    "unsupported JWT algorithm: {}",
                    other
                )))
            }
        };

        Ok(Self {
            jwt_secret: config.secret.clone(),
            algorithm,
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
        })
    }
}
