//! bcrypt password verification for administrator logins

use async_trait::async_trait;

use sg_core::services::session::PasswordVerifier;

use crate::InfrastructureError;

/// Hash a password with the given bcrypt cost
///
/// Used when provisioning administrator accounts.
pub fn hash_password(password: &str, cost: u32) -> Result<String, InfrastructureError> {
    Ok(bcrypt::hash(password, cost)?)
}

/// Verifies passwords against bcrypt hashes on the blocking thread pool
#[derive(Debug, Clone, Copy, Default)]
pub struct BcryptPasswordVerifier;

impl BcryptPasswordVerifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PasswordVerifier for BcryptPasswordVerifier {
    async fn verify(&self, candidate: &str, stored_hash: &str) -> Result<bool, String> {
        let candidate = candidate.to_string();
        let stored_hash = stored_hash.to_string();

        tokio::task::spawn_blocking(move || bcrypt::verify(candidate, &stored_hash))
            .await
            .map_err(|e| format!("password verification task failed: {}", e))?
            .map_err(|e| e.to_string())
    }
}
