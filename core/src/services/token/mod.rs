//! Token service module for JWT management
//!
//! Issues and verifies the stateless session tokens shared by administrators
//! and customers. Nothing about an issued token is stored; revocation happens
//! through the principal's generation counter.

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
