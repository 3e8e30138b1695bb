//! Shared error response structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Standard error response structure used across all API endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client identification
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Additional error details (field errors, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Add a detail field to the error response
    pub fn add_detail(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let details = self.details.get_or_insert_with(HashMap::new);
        if let Ok(json_value) = serde_json::to_value(value) {
            details.insert(key.into(), json_value);
        }
        self
    }
}

/// Common error codes used across the application
pub mod error_codes {
    pub const NO_TOKEN: &str = "NO_TOKEN";
    pub const TOKEN_EXPIRED: &str = "TOKEN_EXPIRED";
    pub const TOKEN_OBSOLETE: &str = "TOKEN_OBSOLETE";
    pub const ACCESS_DENIED: &str = "ACCESS_DENIED";
    pub const ACCOUNT_DISABLED: &str = "ACCOUNT_DISABLED";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const INVALID_CREDENTIALS: &str = "INVALID_CREDENTIALS";
    pub const DUPLICATE_EMAIL: &str = "DUPLICATE_EMAIL";
    pub const OTP_PENDING: &str = "OTP_PENDING";
    pub const OTP_INVALID: &str = "OTP_INVALID";
    pub const OTP_EXPIRED: &str = "OTP_EXPIRED";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}
