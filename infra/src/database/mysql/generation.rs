//! Generation counter queries shared by both account tables

use sqlx::{MySqlPool, Row};

use sg_core::domain::entities::principal::Freshness;
use sg_core::errors::DomainError;

/// Account table holding a generation counter
#[derive(Debug, Clone, Copy)]
pub(super) enum AccountTable {
    Admins,
    Customers,
}

impl AccountTable {
    fn name(self) -> &'static str {
        match self {
            AccountTable::Admins => "admins",
            AccountTable::Customers => "customers",
        }
    }
}

pub(super) fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    tracing::error!(error = %e, "{}", context);
    DomainError::Internal {
        message: format!("{}: {}", context, e),
    }
}

/// Fetch only the generation and active flag of one row
pub(super) async fn find_freshness(
    pool: &MySqlPool,
    table: AccountTable,
    id: &str,
) -> Result<Option<Freshness>, DomainError> {
    let query = format!(
        "SELECT last_login, is_active FROM {} WHERE id = ? LIMIT 1",
        table.name()
    );

    let row = sqlx::query(&query)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| db_error("Freshness lookup failed", e))?;

    match row {
        Some(row) => Ok(Some(Freshness {
            generation: row
                .try_get("last_login")
                .map_err(|e| db_error("Failed to get last_login", e))?,
            active: row
                .try_get("is_active")
                .map_err(|e| db_error("Failed to get is_active", e))?,
        })),
        None => Ok(None),
    }
}

/// Increment the generation and read it back inside one transaction
///
/// The UPDATE takes a row lock that is held until commit, so concurrent
/// callers are serialized and each reads its own increment.
pub(super) async fn increment_generation(
    pool: &MySqlPool,
    table: AccountTable,
    id: &str,
) -> Result<Option<u64>, DomainError> {
    let mut tx = pool
        .begin()
        .await
        .map_err(|e| db_error("Failed to begin transaction", e))?;

    let update = format!(
        "UPDATE {} SET last_login = last_login + 1 WHERE id = ?",
        table.name()
    );
    let updated = sqlx::query(&update)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| db_error("Generation increment failed", e))?;

    if updated.rows_affected() == 0 {
        tx.rollback()
            .await
            .map_err(|e| db_error("Failed to roll back transaction", e))?;
        return Ok(None);
    }

    let select = format!("SELECT last_login FROM {} WHERE id = ?", table.name());
    let generation: u64 = sqlx::query_scalar(&select)
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| db_error("Failed to read generation", e))?;

    tx.commit()
        .await
        .map_err(|e| db_error("Failed to commit transaction", e))?;

    Ok(Some(generation))
}
