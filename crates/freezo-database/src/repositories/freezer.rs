//! Freezer repository implementation.

use chrono::{DateTime, Utc};
use sqlx::{SqliteConnection, SqlitePool};

use freezo_core::result::AppResult;
use freezo_entity::freezer::Freezer;

use super::map_db_error;

/// Repository for freezer rows.
#[derive(Debug, Clone)]
pub struct FreezerRepository {
    pool: SqlitePool,
}

impl FreezerRepository {
    /// Create a new freezer repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all freezers in creation order.
    pub async fn find_all(&self) -> AppResult<Vec<Freezer>> {
        sqlx::query_as::<_, Freezer>("SELECT * FROM freezers ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to list freezers", e))
    }

    /// Find a freezer by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Freezer>> {
        sqlx::query_as::<_, Freezer>("SELECT * FROM freezers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to find freezer", e))
    }

    /// Check whether a freezer exists.
    pub async fn exists(&self, conn: &mut SqliteConnection, id: i64) -> AppResult<bool> {
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM freezers WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| map_db_error("Failed to look up freezer", e))?;
        Ok(found.is_some())
    }

    /// Insert a new freezer.
    pub async fn insert(
        &self,
        conn: &mut SqliteConnection,
        name: &str,
        now: DateTime<Utc>,
    ) -> AppResult<Freezer> {
        sqlx::query_as::<_, Freezer>(
            "INSERT INTO freezers (name, created_at, updated_at) VALUES ($1, $2, $2) RETURNING *",
        )
        .bind(name)
        .bind(now)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| map_db_error("Failed to create freezer", e))
    }

    /// Delete a freezer. Returns `true` if a row was removed.
    pub async fn delete(&self, conn: &mut SqliteConnection, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM freezers WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| map_db_error("Failed to delete freezer", e))?;
        Ok(result.rows_affected() > 0)
    }
}
