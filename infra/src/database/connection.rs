//! Database connection pool management

use sqlx::{
    mysql::{MySqlConnectOptions, MySqlPoolOptions},
    ConnectOptions, MySqlPool,
};
use std::str::FromStr;
use std::time::Duration;
use tracing::log::LevelFilter;

use crate::config::DatabaseConfig;
use crate::InfrastructureError;

/// Database connection pool wrapper
#[derive(Clone)]
pub struct DatabasePool {
    /// SQLx MySQL connection pool
    pool: MySqlPool,
}

impl DatabasePool {
    /// Create a new database connection pool
    ///
    /// # Arguments
    /// * `config` - Database configuration settings
    ///
    /// # Returns
    /// * `Result<Self, InfrastructureError>` - Database pool or error
    pub async fn new(config: &DatabaseConfig) -> Result<Self, InfrastructureError> {
        tracing::info!(
            max_connections = config.max_connections,
            "Creating database connection pool"
        );

        let connect_options = MySqlConnectOptions::from_str(&config.url)
            .map_err(|e| InfrastructureError::Config(format!("Invalid database URL: {}", e)))?
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_secs(1));

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Duration::from_secs(config.idle_timeout))
            .max_lifetime(Duration::from_secs(1800))
            .test_before_acquire(true)
            .connect_with(connect_options)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create database pool: {}", e);
                InfrastructureError::Database(e)
            })?;

        tracing::info!("Database connection pool created successfully");

        Ok(Self { pool })
    }

    /// Get a clone of the underlying SQLx pool
    pub fn pool(&self) -> MySqlPool {
        self.pool.clone()
    }

    /// Check if the database connection is healthy
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        let row = sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Database health check failed: {}", e);
                InfrastructureError::Database(e)
            })?;

        let value: i64 = sqlx::Row::try_get(&row, 0).unwrap_or(0);
        Ok(value == 1)
    }

    /// Close all connections in the pool
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
