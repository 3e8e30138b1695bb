//! Session service module
//!
//! Credential verification followed by token issuance:
//! - Administrator email and password login
//! - Customer one-time passcode request and verification (login or signup)

mod config;
mod email;
mod memory;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use config::SessionServiceConfig;
pub use email::{mask_email, normalize_email};
pub use memory::InMemoryOtpStore;
pub use service::SessionService;
pub use traits::{NotificationChannel, OtpStore, PasswordVerifier};
