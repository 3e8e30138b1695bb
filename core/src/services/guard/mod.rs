//! Access guard module
//!
//! Turns a raw session token plus an optional required role into an
//! allow/deny decision the HTTP layer can map directly to a response.

mod decision;
mod service;

#[cfg(test)]
mod tests;

pub use decision::{AuthContext, Decision, Denial};
pub use service::AccessGuard;
