//! Administrator session endpoints
//!
//! The token never appears in a response body; it is delivered and cleared
//! through the session cookie.

pub mod login;
pub mod logout;
pub mod me;

pub use login::admin_login;
pub use logout::admin_logout;
pub use me::admin_me;
