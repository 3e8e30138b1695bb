//! In-memory passcode store for development and testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

use super::traits::OtpStore;

/// Passcode store with per-entry expiry, mirroring `SET NX EX` semantics
#[derive(Default)]
pub struct InMemoryOtpStore {
    entries: Mutex<HashMap<String, (String, Instant)>>,
}

impl InMemoryOtpStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop a pending passcode as if its TTL had elapsed
    pub async fn expire(&self, email: &str) {
        self.entries.lock().await.remove(email);
    }

    /// Number of unexpired passcodes
    pub async fn pending_count(&self) -> usize {
        let now = Instant::now();
        self.entries
            .lock()
            .await
            .values()
            .filter(|(_, expires_at)| *expires_at > now)
            .count()
    }
}

#[async_trait]
impl OtpStore for InMemoryOtpStore {
    async fn store_if_absent(&self, email: &str, code: &str, ttl_seconds: u64) -> Result<bool, String> {
        let mut entries = self.entries.lock().await;
        let now = Instant::now();

        if let Some((_, expires_at)) = entries.get(email) {
            if *expires_at > now {
                return Ok(false);
            }
        }

        entries.insert(
            email.to_string(),
            (code.to_string(), now + Duration::from_secs(ttl_seconds)),
        );
        Ok(true)
    }

    async fn fetch(&self, email: &str) -> Result<Option<String>, String> {
        let mut entries = self.entries.lock().await;
        match entries.get(email) {
            Some((code, expires_at)) if *expires_at > Instant::now() => Ok(Some(code.clone())),
            Some(_) => {
                entries.remove(email);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn remove(&self, email: &str) -> Result<(), String> {
        self.entries.lock().await.remove(email);
        Ok(())
    }

    async fn consume(&self, email: &str, code: &str) -> Result<bool, String> {
        let mut entries = self.entries.lock().await;
        match entries.get(email) {
            Some((stored, expires_at)) if stored == code && *expires_at > Instant::now() => {
                entries.remove(email);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_if_absent_refuses_pending_code() {
        let store = InMemoryOtpStore::new();

        assert!(store.store_if_absent("jo@example.com", "123456", 600).await.unwrap());
        assert!(!store.store_if_absent("jo@example.com", "654321", 600).await.unwrap());
        assert_eq!(
            store.fetch("jo@example.com").await.unwrap().as_deref(),
            Some("123456")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_code_expires_after_ttl() {
        let store = InMemoryOtpStore::new();
        store.store_if_absent("jo@example.com", "123456", 600).await.unwrap();

        tokio::time::advance(Duration::from_secs(599)).await;
        assert!(store.fetch("jo@example.com").await.unwrap().is_some());

        tokio::time::advance(Duration::from_secs(2)).await;
        assert!(store.fetch("jo@example.com").await.unwrap().is_none());
        assert!(store.store_if_absent("jo@example.com", "000000", 600).await.unwrap());
    }

    #[tokio::test]
    async fn test_remove() {
        let store = InMemoryOtpStore::new();
        store.store_if_absent("jo@example.com", "123456", 600).await.unwrap();
        store.remove("jo@example.com").await.unwrap();

        assert_eq!(store.pending_count().await, 0);
    }

    #[tokio::test]
    async fn test_consume_only_once_and_only_matching() {
        let store = InMemoryOtpStore::new();
        store.store_if_absent("jo@example.com", "123456", 600).await.unwrap();

        assert!(!store.consume("jo@example.com", "000000").await.unwrap());
        assert_eq!(store.pending_count().await, 1);

        assert!(store.consume("jo@example.com", "123456").await.unwrap());
        assert!(!store.consume("jo@example.com", "123456").await.unwrap());
        assert_eq!(store.pending_count().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_consume_expired_code() {
        let store = InMemoryOtpStore::new();
        store.store_if_absent("jo@example.com", "123456", 600).await.unwrap();

        tokio::time::advance(Duration::from_secs(601)).await;
        assert!(!store.consume("jo@example.com", "123456").await.unwrap());
    }
}
