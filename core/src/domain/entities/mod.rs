//! Domain entities representing core business objects.

pub mod otp;
pub mod principal;
pub mod token;

// Re-export commonly used types
pub use otp::{generate_otp, OtpIntent, OTP_LENGTH, OTP_TTL_SECONDS};
pub use principal::{Administrator, Customer, Freshness, PrincipalSnapshot, Role};
pub use token::{
    Claims, ADMIN_TOKEN_LIFETIME_SECS, CUSTOMER_TOKEN_LIFETIME_SECS, JWT_AUDIENCE, JWT_ISSUER,
};
