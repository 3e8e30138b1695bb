//! Redis-backed passcode store
//!
//! One key per normalized email, written with `SET NX EX` so a second
//! request while a passcode is pending never overwrites it. Redemption is a
//! server-side compare-and-delete, so a passcode is consumed at most once.

use async_trait::async_trait;

use sg_core::services::session::OtpStore;

use super::redis_client::RedisClient;

/// Redis key namespace for pending passcodes
const OTP_KEY_PREFIX: &str = "otp";

/// Passcode store backed by Redis
#[derive(Clone)]
pub struct RedisOtpStore {
    client: RedisClient,
}

impl RedisOtpStore {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    /// Full Redis key for an email, including the configured prefix
    pub fn key_for(&self, email: &str) -> String {
        otp_key(&self.client.config().prefixed(OTP_KEY_PREFIX), email)
    }
}

fn otp_key(namespace: &str, email: &str) -> String {
    format!("{}:{}", namespace, email)
}

#[async_trait]
impl OtpStore for RedisOtpStore {
    async fn store_if_absent(&self, email: &str, code: &str, ttl_seconds: u64) -> Result<bool, String> {
        self.client
            .set_nx_with_expiry(&self.key_for(email), code, ttl_seconds)
            .await
            .map_err(|e| e.to_string())
    }

    async fn fetch(&self, email: &str) -> Result<Option<String>, String> {
        self.client
            .get(&self.key_for(email))
            .await
            .map_err(|e| e.to_string())
    }

    async fn remove(&self, email: &str) -> Result<(), String> {
        self.client
            .delete(&self.key_for(email))
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }

    async fn consume(&self, email: &str, code: &str) -> Result<bool, String> {
        self.client
            .delete_if_equals(&self.key_for(email), code)
            .await
            .map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sg_shared::config::CacheConfig;

    #[test]
    fn test_otp_key_layout() {
        let plain = CacheConfig::new("redis://localhost:6379");
        assert_eq!(
            otp_key(&plain.prefixed(OTP_KEY_PREFIX), "jo@example.com"),
            "otp:jo@example.com"
        );

        let mut prefixed = plain.clone();
        prefixed.key_prefix = Some("storegate".to_string());
        assert_eq!(
            otp_key(&prefixed.prefixed(OTP_KEY_PREFIX), "jo@example.com"),
            "storegate:otp:jo@example.com"
        );
    }
}
