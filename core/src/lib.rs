//! # Storegate Core
//!
//! Session issuance and access control for the Storegate backend.
//! This crate contains the principal entities, token claims, the account
//! store interfaces, and the services that issue and check session tokens.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    Administrator, Claims, Customer, Freshness, OtpIntent, PrincipalSnapshot, Role,
};
pub use domain::value_objects::{IssuedSession, OtpDispatch};
pub use errors::{AuthError, DomainError, DomainResult, TokenError};
pub use repositories::{
    AccountDirectory, AdminRepository, CustomerRepository, InMemoryAdminRepository,
    InMemoryCustomerRepository, PrincipalStore,
};
pub use services::{
    AccessGuard, AuthContext, Decision, Denial, InMemoryOtpStore, NotificationChannel, OtpStore,
    PasswordVerifier, SessionService, SessionServiceConfig, TokenService, TokenServiceConfig,
};
