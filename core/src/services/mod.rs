//! Business services containing domain logic and use cases.

pub mod guard;
pub mod session;
pub mod token;

// Re-export commonly used types
pub use guard::{AccessGuard, AuthContext, Decision, Denial};
pub use session::{
    InMemoryOtpStore, NotificationChannel, OtpStore, PasswordVerifier, SessionService,
    SessionServiceConfig,
};
pub use token::{TokenService, TokenServiceConfig};
