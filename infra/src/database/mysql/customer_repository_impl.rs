//! MySQL implementation of the customer store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use sg_core::domain::entities::principal::{Customer, Freshness};
use sg_core::errors::{AuthError, DomainError};
use sg_core::repositories::{CustomerRepository, PrincipalStore};

use super::generation::{self, db_error, AccountTable};

/// MySQL implementation of CustomerRepository
pub struct MySqlCustomerRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlCustomerRepository {
    /// Create a new MySQL customer repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Customer entity
    fn row_to_customer(row: &sqlx::mysql::MySqlRow) -> Result<Customer, DomainError> {
        Ok(Customer {
            id: row.try_get("id").map_err(|e| db_error("Failed to get id", e))?,
            email: row
                .try_get("email")
                .map_err(|e| db_error("Failed to get email", e))?,
            name: row
                .try_get("name")
                .map_err(|e| db_error("Failed to get name", e))?,
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
impl PrincipalStore for MySqlCustomerRepository {
    async fn find_freshness(&self, id: &str) -> Result<Option<Freshness>, DomainError> {
        generation::find_freshness(&self.pool, AccountTable::Customers, id).await
    }

    async fn increment_generation(&self, id: &str) -> Result<Option<u64>, DomainError> {
        generation::increment_generation(&self.pool, AccountTable::Customers, id).await
    }
}

#[async_trait]
impl CustomerRepository for MySqlCustomerRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DomainError> {
        let query = r#"
            SELECT id, email, name, last_login, is_active, created_at
            FROM customers
            WHERE email = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Customer lookup failed", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_customer(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, customer: Customer) -> Result<Customer, DomainError> {
        let query = r#"
            INSERT INTO customers (id, email, name, last_login, is_active, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&customer.id)
            .bind(&customer.email)
            .bind(&customer.name)
            .bind(customer.generation)
            .bind(customer.active)
            .bind(customer.created_at)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(customer),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(AuthError::DuplicateEmail.into())
            }
            Err(e) => Err(db_error("Customer insert failed", e)),
        }
    }
}
