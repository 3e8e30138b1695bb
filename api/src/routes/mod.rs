//! Route handlers
//!
//! - `admin` - Password login, logout and session introspection for the dashboard
//! - `customer` - Passcode request and verification for the storefront

pub mod admin;
pub mod customer;

use std::sync::Arc;

use sg_core::repositories::{AdminRepository, CustomerRepository};
use sg_core::services::session::{NotificationChannel, OtpStore, PasswordVerifier, SessionService};
use sg_shared::config::{CorsConfig, Environment, SessionCookieConfig};

use crate::middleware::auth::SessionGuard;

/// Application state that holds shared services
pub struct AppState<A, C, P, O, N>
where
    A: AdminRepository,
    C: CustomerRepository,
    P: PasswordVerifier,
    O: OtpStore,
    N: NotificationChannel,
{
    pub session_service: Arc<SessionService<A, C, P, O, N>>,
    /// Access guard shared with the session extractors
    pub guard: Arc<dyn SessionGuard>,
    pub cookie: SessionCookieConfig,
    pub cors: CorsConfig,
    pub environment: Environment,
}
