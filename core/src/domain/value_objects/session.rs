//! Session value objects returned by the session service.

use serde::{Deserialize, Serialize};

use crate::domain::entities::principal::Role;

/// A freshly issued session token and the principal it belongs to
///
/// Returned after a successful admin password login or customer passcode
/// verification. The token embeds the generation recorded here; any later
/// login for the same principal makes it obsolete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedSession {
    /// Signed JWT
    pub token: String,

    /// Lifetime of the token in seconds
    pub expires_in: i64,

    pub principal_id: String,

    pub role: Role,

    /// Generation embedded in the token
    pub generation: u64,

    /// Administrator authority embedded in the token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authority: Option<String>,

    /// Whether the principal was created by this issuance (customer signup)
    pub created: bool,
}

impl IssuedSession {
    /// Creates a new issued session
    ///
    /// # Arguments
    ///
    /// * `token` - Signed JWT
    /// * `expires_in` - Token lifetime in seconds
    /// * `principal_id` - Subject of the token
    /// * `role` - Principal kind
    /// * `generation` - Generation embedded in the token
    pub fn new(
        token: String,
        expires_in: i64,
        principal_id: String,
        role: Role,
        generation: u64,
    ) -> Self {
        Self {
            token,
            expires_in,
            principal_id,
            role,
            generation,
            authority: None,
            created: false,
        }
    }

    pub fn with_authority(mut self, authority: Option<String>) -> Self {
        self.authority = authority;
        self
    }

    /// Marks the session as the result of an account creation
    pub fn with_created(mut self, created: bool) -> Self {
        self.created = created;
        self
    }
}

/// Outcome of a passcode request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpDispatch {
    /// Seconds until the passcode expires
    pub expires_in: u64,

    /// Identifier returned by the delivery channel
    pub message_id: String,
}
