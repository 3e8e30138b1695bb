//! Database module - MySQL implementations using SQLx
//!
//! This module provides the account stores behind session issuance:
//! - Connection pool management
//! - Administrator and customer repositories
//! - Transactional generation increments

pub mod connection;
pub mod mysql;

// Re-export commonly used types
pub use connection::DatabasePool;
pub use mysql::{MySqlAdminRepository, MySqlCustomerRepository};
