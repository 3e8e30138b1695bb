//! Domain-specific error types for session issuance and token handling
//!
//! Messages here are the client-facing text; the presentation layer maps
//! each variant to an HTTP status.

use thiserror::Error;

use crate::domain::entities::principal::Role;

/// Authentication-related errors raised while issuing a session
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("{} not found", .role.display_name())]
    PrincipalNotFound { role: Role },

    #[error("Account has been disabled")]
    AccountDisabled,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email is already registered")]
    DuplicateEmail,

    #[error("OTP already sent, please check your email")]
    OtpAlreadyPending,

    #[error("OTP not found or expired")]
    OtpNotFound,

    #[error("Invalid OTP")]
    OtpMismatch,

    #[error("Failed to deliver OTP")]
    NotificationFailed,
}

impl AuthError {
    pub fn missing(field: impl Into<String>) -> Self {
        AuthError::MissingField {
            field: field.into(),
        }
    }

    pub fn not_found(role: Role) -> Self {
        AuthError::PrincipalNotFound { role }
    }
}

/// Token verification and signing errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// Signature and claims are valid but the expiry instant has passed
    #[error("Token has expired")]
    TokenExpired,

    /// Malformed, tampered, wrong key, wrong issuer or audience
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_role() {
        assert_eq!(AuthError::not_found(Role::Admin).to_string(), "Admin not found");
        assert_eq!(AuthError::not_found(Role::Customer).to_string(), "Customer not found");
    }

    #[test]
    fn test_missing_field_message() {
        assert_eq!(
            AuthError::missing("email").to_string(),
            "Missing required field: email"
        );
    }

    #[test]
    fn test_token_error_messages() {
        assert_eq!(TokenError::TokenExpired.to_string(), "Token has expired");
        assert_eq!(TokenError::InvalidToken.to_string(), "Invalid token");
    }
}
