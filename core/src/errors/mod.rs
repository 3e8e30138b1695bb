//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, TokenError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Store or collaborator failure; never shown to clients verbatim
    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
