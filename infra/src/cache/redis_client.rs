//! Redis cache client implementation
//!
//! A multiplexed Redis connection with retry logic, exposing the handful of
//! commands the passcode store needs.

use redis::{aio::MultiplexedConnection, AsyncCommands, Client, RedisError, RedisResult};
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use crate::config::CacheConfig;
use crate::InfrastructureError;

type RedisFuture<T> = Pin<Box<dyn Future<Output = RedisResult<T>> + Send>>;

/// Deletes KEYS[1] only while it still holds ARGV[1]; returns the number of keys deleted
const DELETE_IF_EQUALS_SCRIPT: &str = r#"
if redis.call('GET', KEYS[1]) == ARGV[1] then
    return redis.call('DEL', KEYS[1])
end
return 0
"#;

/// Redis cache client with retry logic
#[derive(Clone)]
pub struct RedisClient {
    /// Redis multiplexed connection for async operations
    connection: MultiplexedConnection,
    /// Configuration used to create this client
    config: CacheConfig,
}

impl RedisClient {
    /// Create a new Redis client
    ///
    /// # Arguments
    /// * `config` - Cache configuration settings
    ///
    /// # Returns
    /// * `Result<Self, InfrastructureError>` - Redis client or error
    ///
    /// # Example
    /// ```no_run
    /// use sg_infra::cache::RedisClient;
    /// use sg_infra::config::CacheConfig;
    ///
    /// async fn create_client() -> Result<RedisClient, Box<dyn std::error::Error>> {
    ///     let client = RedisClient::new(CacheConfig::new("redis://localhost:6379")).await?;
    ///     Ok(client)
    /// }
    /// ```
    pub async fn new(config: CacheConfig) -> Result<Self, InfrastructureError> {
        info!("Creating Redis client with URL: {}", mask_url(&config.url));

        let client = Client::open(config.url.as_str()).map_err(|e| {
            error!("Failed to parse Redis URL: {}", e);
            InfrastructureError::Config(format!("Invalid Redis URL: {}", e))
        })?;

        let connection =
            Self::create_connection_with_retry(client, config.max_retries, config.retry_delay_ms)
                .await?;

        info!("Redis client created successfully");

        Ok(Self { connection, config })
    }

    /// Create multiplexed connection with retry logic
    async fn create_connection_with_retry(
        client: Client,
        max_retries: u32,
        retry_delay_ms: u64,
    ) -> Result<MultiplexedConnection, InfrastructureError> {
        let mut attempts = 0;
        let mut delay = retry_delay_ms;

        loop {
            attempts += 1;
            debug!("Attempting to connect to Redis (attempt {})", attempts);

            match client.get_multiplexed_async_connection().await {
                Ok(connection) => return Ok(connection),
                Err(e) if attempts < max_retries => {
                    warn!(
                        "Failed to connect to Redis (attempt {}/{}): {}. Retrying in {}ms...",
                        attempts, max_retries, e, delay
                    );
                    sleep(Duration::from_millis(delay)).await;
                    delay = (delay * 2).min(5000);
                }
                Err(e) => {
                    error!("Failed to connect to Redis after {} attempts: {}", attempts, e);
                    return Err(InfrastructureError::Cache(e));
                }
            }
        }
    }

    /// Configuration this client was created with
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Set a value with expiry only if the key does not exist (`SET NX EX`)
    ///
    /// # Returns
    /// * `Ok(true)` - Value stored
    /// * `Ok(false)` - Key already present, nothing written
    pub async fn set_nx_with_expiry(
        &self,
        key: &str,
        value: &str,
        expiry_seconds: u64,
    ) -> Result<bool, InfrastructureError> {
        debug!("Setting key '{}' (NX) with expiry {}s", key, expiry_seconds);

        let result = self
            .execute_with_retry(|mut conn| {
                let key = key.to_string();
                let value = value.to_string();
                let expiry = expiry_seconds;

                Box::pin(async move {
                    redis::cmd("SET")
                        .arg(key)
                        .arg(value)
                        .arg("NX")
                        .arg("EX")
                        .arg(expiry)
                        .query_async::<_, Option<String>>(&mut conn)
                        .await
                })
            })
            .await;

        match result {
            Ok(reply) => Ok(reply.is_some()),
            Err(e) => {
                error!("Failed to set key '{}': {}", key, e);
                Err(InfrastructureError::Cache(e))
            }
        }
    }

    /// Get a value from cache
    ///
    /// # Returns
    /// * `Result<Option<String>, InfrastructureError>` - Cached value or None if not found
    pub async fn get(&self, key: &str) -> Result<Option<String>, InfrastructureError> {
        debug!("Getting key '{}'", key);

        self.execute_with_retry(|mut conn| {
            let key = key.to_string();
            Box::pin(async move { conn.get::<_, Option<String>>(key).await })
        })
        .await
        .map_err(|e| {
            error!("Failed to get key '{}': {}", key, e);
            InfrastructureError::Cache(e)
        })
    }

    /// Delete a key from cache
    ///
    /// # Returns
    /// * `Result<bool, InfrastructureError>` - True if key was deleted, false if not found
    pub async fn delete(&self, key: &str) -> Result<bool, InfrastructureError> {
        debug!("Deleting key '{}'", key);

        self.execute_with_retry(|mut conn| {
            let key = key.to_string();
            Box::pin(async move { conn.del::<_, u32>(key).await })
        })
        .await
        .map(|deleted| deleted > 0)
        .map_err(|e| {
            error!("Failed to delete key '{}': {}", key, e);
            InfrastructureError::Cache(e)
        })
    }

    /// Delete a key only if it currently holds `value`, in one atomic step
    ///
    /// # Returns
    /// * `Result<bool, InfrastructureError>` - True if this call deleted the key
    pub async fn delete_if_equals(&self, key: &str, value: &str) -> Result<bool, InfrastructureError> {
        debug!("Deleting key '{}' if unchanged", key);

        self.execute_with_retry(|mut conn| {
            let key = key.to_string();
            let value = value.to_string();
            Box::pin(async move {
                let script = redis::Script::new(DELETE_IF_EQUALS_SCRIPT);
                let mut invocation = script.key(key);
                invocation.arg(value);
                let deleted = invocation.invoke_async::<_, i64>(&mut conn).await;
                deleted
            })
        })
        .await
        .map(|deleted| deleted > 0)
        .map_err(|e| {
            error!("Failed to delete key '{}': {}", key, e);
            InfrastructureError::Cache(e)
        })
    }

    /// Get time-to-live for a key
    ///
    /// # Returns
    /// * `Result<Option<i64>, InfrastructureError>` - TTL in seconds, None if key doesn't exist or has no expiry
    pub async fn ttl(&self, key: &str) -> Result<Option<i64>, InfrastructureError> {
        let result = self
            .execute_with_retry(|mut conn| {
                let key = key.to_string();
                Box::pin(async move { conn.ttl::<_, i64>(key).await })
            })
            .await;

        match result {
            Ok(ttl) if ttl >= 0 => Ok(Some(ttl)),
            Ok(_) => Ok(None),
            Err(e) => {
                error!("Failed to get TTL for key '{}': {}", key, e);
                Err(InfrastructureError::Cache(e))
            }
        }
    }

    /// Check if the Redis connection is healthy
    ///
    /// Performs a PING command to verify connectivity.
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        let result = self
            .execute_with_retry(|mut conn| {
                Box::pin(async move { redis::cmd("PING").query_async::<_, String>(&mut conn).await })
            })
            .await;

        match result {
            Ok(response) => Ok(response == "PONG"),
            Err(e) => {
                error!("Redis health check failed: {}", e);
                Err(InfrastructureError::Cache(e))
            }
        }
    }

    /// Execute a Redis operation with exponential backoff on transient errors
    async fn execute_with_retry<F, T>(&self, operation: F) -> RedisResult<T>
    where
        F: Fn(MultiplexedConnection) -> RedisFuture<T>,
    {
        let mut attempts = 0;
        let mut delay = self.config.retry_delay_ms;

        loop {
            attempts += 1;
            let conn = self.connection.clone();

            match operation(conn).await {
                Ok(result) => return Ok(result),
                Err(e) if attempts < self.config.max_retries && is_retriable_error(&e) => {
                    warn!(
                        "Redis operation failed (attempt {}/{}): {}. Retrying in {}ms...",
                        attempts, self.config.max_retries, e, delay
                    );
                    sleep(Duration::from_millis(delay)).await;
                    delay = (delay * 2).min(5000);
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Check if a Redis error is transient and the operation should be retried
pub(crate) fn is_retriable_error(error: &RedisError) -> bool {
    matches!(
        error.kind(),
        redis::ErrorKind::IoError
            | redis::ErrorKind::ClientError
            | redis::ErrorKind::BusyLoadingError
            | redis::ErrorKind::TryAgain
    )
}

/// Hide credentials in a Redis URL for logging
pub(crate) fn mask_url(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}://***{}", &url[..scheme_end], &url[at..])
        }
        _ => url.to_string(),
    }
}
