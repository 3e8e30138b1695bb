//! MySQL account stores
//!
//! Expected schema:
//!
//! ```sql
//! CREATE TABLE admins (
//!     id            VARCHAR(36)     NOT NULL PRIMARY KEY,
//!     email         VARCHAR(255)    NOT NULL UNIQUE,
//!     password_hash VARCHAR(255)    NOT NULL,
//!     authority     VARCHAR(64)     NULL,
//!     last_login    BIGINT UNSIGNED NOT NULL DEFAULT 0,
//!     is_active     BOOLEAN         NOT NULL DEFAULT TRUE,
//!     created_at    TIMESTAMP       NOT NULL DEFAULT CURRENT_TIMESTAMP
//! );
//!
//! CREATE TABLE customers (
//!     id          VARCHAR(36)     NOT NULL PRIMARY KEY,
//!     email       VARCHAR(255)    NOT NULL UNIQUE,
//!     name        VARCHAR(255)    NOT NULL,
//!     last_login  BIGINT UNSIGNED NOT NULL DEFAULT 0,
//!     is_active   BOOLEAN         NOT NULL DEFAULT TRUE,
//!     created_at  TIMESTAMP       NOT NULL DEFAULT CURRENT_TIMESTAMP
//! );
//! ```
//!
//! The `last_login` column holds the session generation.

mod admin_repository_impl;
mod customer_repository_impl;
mod generation;

pub use admin_repository_impl::MySqlAdminRepository;
pub use customer_repository_impl::MySqlCustomerRepository;
