//! Traits for the collaborators of session issuance

use async_trait::async_trait;

/// Checks a candidate password against a stored hash
#[async_trait]
pub trait PasswordVerifier: Send + Sync {
    /// Returns `Ok(false)` on mismatch and `Err` only when the hash is unusable
    async fn verify(&self, candidate: &str, stored_hash: &str) -> Result<bool, String>;
}

/// Ephemeral passcode storage keyed by normalized email
#[async_trait]
pub trait OtpStore: Send + Sync {
    /// Store a passcode unless one is already pending; returns whether it was stored
    async fn store_if_absent(&self, email: &str, code: &str, ttl_seconds: u64) -> Result<bool, String>;
    /// Fetch the pending passcode, if it has not expired
    async fn fetch(&self, email: &str) -> Result<Option<String>, String>;
    /// Remove any pending passcode
    async fn remove(&self, email: &str) -> Result<(), String>;
    /// Atomically remove the pending passcode only if it still equals `code`
    ///
    /// Returns whether this call removed it. Of several concurrent callers
    /// presenting the same passcode, exactly one sees `true`.
    async fn consume(&self, email: &str, code: &str) -> Result<bool, String>;
}

/// Delivers passcodes to customers
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    /// Send a passcode, returning the channel's message ID
    async fn send_otp(&self, email: &str, code: &str) -> Result<String, String>;
}
