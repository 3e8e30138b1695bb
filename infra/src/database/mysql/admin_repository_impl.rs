//! MySQL implementation of the administrator store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use sg_core::domain::entities::principal::{Administrator, Freshness};
use sg_core::errors::DomainError;
use sg_core::repositories::{AdminRepository, PrincipalStore};

use super::generation::{self, db_error, AccountTable};

/// MySQL implementation of AdminRepository
pub struct MySqlAdminRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlAdminRepository {
    /// Create a new MySQL administrator repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Administrator entity
    fn row_to_admin(row: &sqlx::mysql::MySqlRow) -> Result<Administrator, DomainError> {
        Ok(Administrator {
            id: row.try_get("id").map_err(|e| db_error("Failed to get id", e))?,
            email: row
                .try_get("email")
                .map_err(|e| db_error("Failed to get email", e))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| db_error("Failed to get password_hash", e))?,
            authority: row
                .try_get("authority")
                .map_err(|e| db_error("Failed to get authority", e))?,
            generation: row
                .try_get("last_login")
                .map_err(|e| db_error("Failed to get last_login", e))?,
            active: row
                .try_get("is_active")
                .map_err(|e| db_error("Failed to get is_active", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error("Failed to get created_at", e))?,
        })
    }
}

#[async_trait]
impl PrincipalStore for MySqlAdminRepository {
    async fn find_freshness(&self, id: &str) -> Result<Option<Freshness>, DomainError> {
        generation::find_freshness(&self.pool, AccountTable::Admins, id).await
    }

    async fn increment_generation(&self, id: &str) -> Result<Option<u64>, DomainError> {
        generation::increment_generation(&self.pool, AccountTable::Admins, id).await
    }
}

#[async_trait]
impl AdminRepository for MySqlAdminRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Administrator>, DomainError> {
        let query = r#"
            SELECT id, email, password_hash, authority,
                   last_login, is_active, created_at
            FROM admins
            WHERE email = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Admin lookup failed", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_admin(&row)?)),
            None => Ok(None),
        }
    }
}
