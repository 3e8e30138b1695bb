//! Token claims for the stateless session tokens.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::principal::{PrincipalSnapshot, Role};

/// Administrator session lifetime (24 hours)
pub const ADMIN_TOKEN_LIFETIME_SECS: i64 = 86_400;

/// Customer session lifetime (30 days)
pub const CUSTOMER_TOKEN_LIFETIME_SECS: i64 = 2_592_000;

/// JWT issuer
pub const JWT_ISSUER: &str = "storegate";

/// JWT audience
pub const JWT_AUDIENCE: &str = "storegate-api";

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (principal ID)
    pub sub: String,

    /// Principal kind
    pub role: Role,

    /// Principal generation at issuance time
    pub generation: u64,

    /// Authority label, administrators only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authority: Option<String>,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,
}

impl Claims {
    /// Builds claims for a principal, valid for `lifetime_seconds` from now
    ///
    /// # Arguments
    ///
    /// * `principal` - Snapshot of the principal at issuance time
    /// * `lifetime_seconds` - Seconds until the token expires
    /// * `issuer` - Value for the `iss` claim
    /// * `audience` - Value for the `aud` claim
    pub fn for_principal(
        principal: &PrincipalSnapshot,
        lifetime_seconds: i64,
        issuer: &str,
        audience: &str,
    ) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: principal.id.clone(),
            role: principal.role,
            generation: principal.generation,
            authority: principal.authority.clone(),
            iat: now,
            exp: now + lifetime_seconds,
            iss: issuer.to_string(),
            aud: audience.to_string(),
        }
    }

    pub fn principal_id(&self) -> &str {
        &self.sub
    }
}
