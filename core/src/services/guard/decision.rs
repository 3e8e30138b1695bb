//! Authorization outcomes produced by the access guard.

use serde::Serialize;
use sg_shared::errors::error_codes;
use thiserror::Error;

use crate::domain::entities::principal::Role;
use crate::domain::entities::token::Claims;

/// Authenticated principal attached to an allowed request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthContext {
    pub principal_id: String,
    pub role: Role,
    pub generation: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authority: Option<String>,
    /// Token expiry as a UNIX timestamp
    pub expires_at: i64,
}

impl From<Claims> for AuthContext {
    fn from(claims: Claims) -> Self {
        Self {
            principal_id: claims.sub,
            role: claims.role,
            generation: claims.generation,
            authority: claims.authority,
            expires_at: claims.exp,
        }
    }
}

/// Why a request was refused
///
/// Variants are listed in evaluation order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Denial {
    #[error("No token provided")]
    NoCredential,

    #[error("Token has expired")]
    CredentialExpired,

    /// Forged, malformed or otherwise unverifiable token
    #[error("Token verification failed")]
    VerificationFailed,

    #[error("Access denied")]
    RoleMismatch { required: Role, presented: Role },

    #[error("{} not found", .0.display_name())]
    PrincipalNotFound(Role),

    #[error("Token is obsolete")]
    StaleCredential,

    #[error("Account has been disabled")]
    PrincipalDisabled,

    /// Account store failure while checking freshness
    #[error("Account lookup failed")]
    Internal,
}

impl Denial {
    /// HTTP status for this denial
    pub fn status_code(&self) -> u16 {
        match self {
            Denial::NoCredential | Denial::CredentialExpired => 401,
            Denial::RoleMismatch { .. } | Denial::StaleCredential | Denial::PrincipalDisabled => 403,
            Denial::PrincipalNotFound(_) => 404,
            Denial::VerificationFailed | Denial::Internal => 500,
        }
    }

    /// Message safe to return to the client
    pub fn message(&self) -> String {
        match self {
            Denial::VerificationFailed | Denial::Internal => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }

    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            Denial::NoCredential => error_codes::NO_TOKEN,
            Denial::CredentialExpired => error_codes::TOKEN_EXPIRED,
            Denial::RoleMismatch { .. } => error_codes::ACCESS_DENIED,
            Denial::PrincipalNotFound(_) => error_codes::NOT_FOUND,
            Denial::StaleCredential => error_codes::TOKEN_OBSOLETE,
            Denial::PrincipalDisabled => error_codes::ACCOUNT_DISABLED,
            Denial::VerificationFailed | Denial::Internal => error_codes::INTERNAL_ERROR,
        }
    }
}

/// Result of authorizing one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow(AuthContext),
    Deny(Denial),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow(_))
    }

    pub fn denial(&self) -> Option<&Denial> {
        match self {
            Decision::Allow(_) => None,
            Decision::Deny(denial) => Some(denial),
        }
    }

    pub fn into_result(self) -> Result<AuthContext, Denial> {
        match self {
            Decision::Allow(context) => Ok(context),
            Decision::Deny(denial) => Err(denial),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_table() {
        assert_eq!(Denial::NoCredential.status_code(), 401);
        assert_eq!(Denial::CredentialExpired.status_code(), 401);
        assert_eq!(Denial::VerificationFailed.status_code(), 500);
        assert_eq!(
            Denial::RoleMismatch {
                required: Role::Admin,
                presented: Role::Customer
            }
            .status_code(),
            403
        );
        assert_eq!(Denial::PrincipalNotFound(Role::Admin).status_code(), 404);
        assert_eq!(Denial::StaleCredential.status_code(), 403);
        assert_eq!(Denial::PrincipalDisabled.status_code(), 403);
        assert_eq!(Denial::Internal.status_code(), 500);
    }

    #[test]
    fn test_public_messages() {
        assert_eq!(Denial::NoCredential.message(), "No token provided");
        assert_eq!(Denial::CredentialExpired.message(), "Token has expired");
        assert_eq!(
            Denial::RoleMismatch {
                required: Role::Customer,
                presented: Role::Admin
            }
            .message(),
            "Access denied"
        );
        assert_eq!(
            Denial::PrincipalNotFound(Role::Customer).message(),
            "Customer not found"
        );
        assert_eq!(Denial::StaleCredential.message(), "Token is obsolete");
        assert_eq!(
            Denial::PrincipalDisabled.message(),
            "Account has been disabled"
        );
        assert_eq!(
            Denial::VerificationFailed.message(),
            "Internal server error"
        );
    }
}
