//! Main token service implementation

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::principal::PrincipalSnapshot;
use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Signs and verifies session tokens with a process-wide HMAC secret
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration
    ///
    /// # Returns
    ///
    /// A new `TokenService`, or `DomainError::Internal` if the secret is
    /// empty or the algorithm is not an HMAC algorithm
    pub fn new(config: TokenServiceConfig) -> Result<Self, DomainError> {
        if config.jwt_secret.is_empty() {
            return Err(DomainError::internal("JWT secret must not be empty"));
        }
        if !matches!(
            config.algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(DomainError::internal(format!(
                "unsupported JWT algorithm: {:?}",
                config.algorithm
            )));
        }

        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_audience(&[config.audience.as_str()]);
        validation.set_required_spec_claims(&["exp", "sub", "iss", "aud"]);
        validation.validate_exp = true;
        validation.validate_nbf = false;
        // Expiry is exact; no clock-skew allowance
        validation.leeway = 0;

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Signs a token for a principal
    ///
    /// Pure with respect to the account stores: the generation embedded is
    /// whatever the snapshot carries.
    ///
    /// # Arguments
    ///
    /// * `principal` - Principal snapshot (id, role, generation, authority)
    /// * `lifetime_seconds` - Seconds until the token expires, must be positive
    pub fn issue(
        &self,
        principal: &PrincipalSnapshot,
        lifetime_seconds: i64,
    ) -> Result<String, DomainError> {
        if lifetime_seconds <= 0 {
            return Err(DomainError::Validation {
                message: "token lifetime must be positive".to_string(),
            });
        }

        let claims = Claims::for_principal(
            principal,
            lifetime_seconds,
            &self.config.issuer,
            &self.config.audience,
        );
        self.encode_claims(&claims)
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_claims(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "Failed to sign session token");
            DomainError::Token(TokenError::TokenGenerationFailed)
        })
    }

    /// Verifies a token and returns its claims
    ///
    /// The signature is checked before expiry, so a tampered token that is
    /// also past its expiry reports `InvalidToken`.
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - Signature, issuer, audience and expiry all valid
    /// * `Err(TokenError::TokenExpired)` - Authentic but expired
    /// * `Err(TokenError::InvalidToken)` - Anything else
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                kind => {
                    tracing::debug!(reason = ?kind, "Rejected session token");
                    TokenError::InvalidToken
                }
            })
    }
}
