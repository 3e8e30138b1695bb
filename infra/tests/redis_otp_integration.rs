//! Integration tests for the Redis passcode store
//!
//! These tests require a running Redis instance to execute.
//! Run with: cargo test -p sg_infra --test redis_otp_integration -- --ignored

use sg_core::services::session::OtpStore;
use sg_infra::cache::{CacheConfig, RedisClient, RedisOtpStore};

fn test_config() -> CacheConfig {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("sg_infra=debug")
        .with_test_writer()
        .try_init();

    let mut config = CacheConfig::new(
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string()),
    );
    config.key_prefix = Some("storegate-test".to_string());
    config
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_redis_connection() {
    let client = RedisClient::new(test_config()).await.unwrap();
    assert!(client.health_check().await.unwrap());
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_store_if_absent_keeps_first_code() {
    let client = RedisClient::new(test_config()).await.unwrap();
    let store = RedisOtpStore::new(client.clone());
    let email = "pending@example.com";
    store.remove(email).await.unwrap();

    assert!(store.store_if_absent(email, "111111", 600).await.unwrap());
    assert!(!store.store_if_absent(email, "222222", 600).await.unwrap());
    assert_eq!(store.fetch(email).await.unwrap().as_deref(), Some("111111"));

    let ttl = client.ttl(&store.key_for(email)).await.unwrap().unwrap();
    assert!(ttl > 590 && ttl <= 600);

    store.remove(email).await.unwrap();
    assert!(store.fetch(email).await.unwrap().is_none());
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_code_expires() {
    let client = RedisClient::new(test_config()).await.unwrap();
    let store = RedisOtpStore::new(client);
    let email = "expiring@example.com";
    store.remove(email).await.unwrap();

    store.store_if_absent(email, "333333", 1).await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(1500)).await;

    assert!(store.fetch(email).await.unwrap().is_none());
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_consume_is_single_use() {
    let client = RedisClient::new(test_config()).await.unwrap();
    let store = RedisOtpStore::new(client);
    let email = "consume@example.com";
    store.remove(email).await.unwrap();
    store.store_if_absent(email, "444444", 600).await.unwrap();

    assert!(!store.consume(email, "000000").await.unwrap());
    assert!(store.fetch(email).await.unwrap().is_some());

    let (first, second) = tokio::join!(store.consume(email, "444444"), store.consume(email, "444444"));
    assert!(first.unwrap() ^ second.unwrap());
    assert!(store.fetch(email).await.unwrap().is_none());
}
