//! Cache module for Redis-based caching
//!
//! Connection handling with retry logic and the passcode store used by
//! customer sign-in.

pub mod otp_store;
pub mod redis_client;

pub use otp_store::RedisOtpStore;
pub use redis_client::RedisClient;

// Re-export commonly used types
pub use sg_shared::config::CacheConfig;
