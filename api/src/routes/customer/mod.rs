//! Customer passcode sign-in endpoints
//!
//! Customer tokens are returned in the response body and presented back
//! with `Authorization: Bearer <token>`.

pub mod me;
pub mod request_otp;
pub mod verify_otp;

pub use me::customer_me;
pub use request_otp::request_otp;
pub use verify_otp::verify_otp;
