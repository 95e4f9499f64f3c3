//! Item repository implementation.

use chrono::{DateTime, Utc};
use sqlx::{SqliteConnection, SqlitePool};

use freezo_core::result::AppResult;
use freezo_entity::item::{Item, NewItem};

use super::map_db_error;

/// Repository for item rows. One row is one physical unit.
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: SqlitePool,
}

impl ItemRepository {
    /// Create a new item repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all items in ascending id order.
    ///
    /// The planners take "the first N" of a bucket, so this order must be
    /// stable across calls.
    pub async fn find_all(&self) -> AppResult<Vec<Item>> {
        sqlx::query_as::<_, Item>("SELECT * FROM items ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to list items", e))
    }

    /// Find an item by ID within a connection.
    pub async fn find_by_id(&self, conn: &mut SqliteConnection, id: i64) -> AppResult<Option<Item>> {
        sqlx::query_as::<_, Item>("SELECT * FROM items WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| map_db_error("Failed to find item", e))
    }

    /// Count items assigned to a freezer.
    pub async fn count_by_freezer(
        &self,
        conn: &mut SqliteConnection,
        freezer_id: i64,
    ) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM items WHERE freezer_id = $1")
            .bind(freezer_id)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| map_db_error("Failed to count items", e))
    }

    /// Insert one item record.
    pub async fn insert(
        &self,
        conn: &mut SqliteConnection,
        data: &NewItem,
        now: DateTime<Utc>,
    ) -> AppResult<Item> {
        sqlx::query_as::<_, Item>(
            "INSERT INTO items (name, category_id, freezer_id, weight, frozen_date, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $6) RETURNING *",
        )
        .bind(&data.name)
        .bind(data.category_id)
        .bind(data.freezer_id)
        .bind(&data.weight)
        .bind(&data.frozen_date)
        .bind(now)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| map_db_error("Failed to create item", e))
    }

    /// Overwrite every mutable column of an item.
    pub async fn update(&self, conn: &mut SqliteConnection, item: &Item) -> AppResult<Item> {
        sqlx::query_as::<_, Item>(
            "UPDATE items SET name = $2, category_id = $3, freezer_id = $4, weight = $5, \
             frozen_date = $6, updated_at = $7 WHERE id = $1 RETURNING *",
        )
        .bind(item.id)
        .bind(&item.name)
        .bind(item.category_id)
        .bind(item.freezer_id)
        .bind(&item.weight)
        .bind(&item.frozen_date)
        .bind(item.updated_at)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| map_db_error("Failed to update item", e))
    }

    /// Delete an item. Returns `true` if a row was removed.
    pub async fn delete(&self, conn: &mut SqliteConnection, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| map_db_error("Failed to delete item", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Point an item at another freezer. Returns `true` if a row was updated.
    pub async fn reassign(
        &self,
        conn: &mut SqliteConnection,
        id: i64,
        freezer_id: i64,
        now: DateTime<Utc>,
    ) -> AppResult<bool> {
        let result = sqlx::query("UPDATE items SET freezer_id = $2, updated_at = $3 WHERE id = $1")
            .bind(id)
            .bind(freezer_id)
            .bind(now)
            .execute(&mut *conn)
            .await
            .map_err(|e| map_db_error("Failed to move item", e))?;
        Ok(result.rows_affected() > 0)
    }
}
