//! Principal entities: the administrator and customer accounts a session can belong to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of principal a session token is issued to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Store administrator using the dashboard
    Admin,
    /// Storefront customer
    Customer,
}

impl Role {
    /// Wire representation carried in token claims
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Customer => "customer",
        }
    }

    /// Capitalized name used in client-facing messages
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Customer => "Customer",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "customer" => Ok(Role::Customer),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// The two fields the access guard reads on every authorization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Freshness {
    /// Session generation counter
    pub generation: u64,
    /// Whether the account may still sign in
    pub active: bool,
}

/// Store administrator account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Administrator {
    pub id: String,

    /// Normalized (trimmed, lower-cased) email address
    pub email: String,

    /// bcrypt hash of the administrator password
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Optional authority label embedded into issued tokens
    pub authority: Option<String>,

    /// Session generation; every successful login increments it
    pub generation: u64,

    pub active: bool,

    pub created_at: DateTime<Utc>,
}

impl Administrator {
    /// Creates a new active administrator with generation zero
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: email.into(),
            password_hash: password_hash.into(),
            authority: None,
            generation: 0,
            active: true,
            created_at: Utc::now(),
        }
    }

    pub fn with_authority(mut self, authority: impl Into<String>) -> Self {
        self.authority = Some(authority.into());
        self
    }

    pub fn freshness(&self) -> Freshness {
        Freshness {
            generation: self.generation,
            active: self.active,
        }
    }

    /// Claims-relevant view of this administrator at its current generation
    pub fn snapshot(&self) -> PrincipalSnapshot {
        PrincipalSnapshot::new(self.id.clone(), Role::Admin, self.generation)
            .with_authority(self.authority.clone())
    }
}

/// Storefront customer account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,

    /// Normalized (trimmed, lower-cased) email address
    pub email: String,

    pub name: String,

    /// Session generation; every OTP login increments it
    pub generation: u64,

    pub active: bool,

    pub created_at: DateTime<Utc>,
}

impl Customer {
    /// Creates a new active customer with generation zero
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: email.into(),
            name: name.into(),
            generation: 0,
            active: true,
            created_at: Utc::now(),
        }
    }

    pub fn freshness(&self) -> Freshness {
        Freshness {
            generation: self.generation,
            active: self.active,
        }
    }

    /// Claims-relevant view of this customer at its current generation
    pub fn snapshot(&self) -> PrincipalSnapshot {
        PrincipalSnapshot::new(self.id.clone(), Role::Customer, self.generation)
    }
}

/// What the token service needs to know about a principal to sign a token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalSnapshot {
    pub id: String,
    pub role: Role,
    pub generation: u64,
    pub authority: Option<String>,
}

impl PrincipalSnapshot {
    pub fn new(id: impl Into<String>, role: Role, generation: u64) -> Self {
        Self {
            id: id.into(),
            role,
            generation,
            authority: None,
        }
    }

    /// Attaches an authority label; empty labels are dropped
    pub fn with_authority(mut self, authority: Option<String>) -> Self {
        self.authority = authority.filter(|a| !a.trim().is_empty());
        self
    }
}
