//! Category repository implementation.

use sqlx::{SqliteConnection, SqlitePool};

use freezo_core::result::AppResult;
use freezo_entity::category::Category;

use super::map_db_error;

/// Repository for item categories.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: SqlitePool,
}

impl CategoryRepository {
    /// Create a new category repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all categories.
    pub async fn find_all(&self) -> AppResult<Vec<Category>> {
        sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to list categories", e))
    }

    /// Insert a category. Duplicate names surface as a conflict.
    pub async fn insert(&self, conn: &mut SqliteConnection, name: &str) -> AppResult<Category> {
        sqlx::query_as::<_, Category>("INSERT INTO categories (name) VALUES ($1) RETURNING id, name")
            .bind(name)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| map_db_error("Failed to create category", e))
    }
}
