//! Database migration runner.

use sqlx::SqlitePool;
use tracing::info;

use freezo_core::error::{AppError, ErrorKind};

/// Run all pending database migrations.
///
/// Migrations are embedded at compile time from the workspace
/// `migrations/` directory and seed the default category.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    info!("Running database migrations...");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to run migrations: {e}"),
                e,
            )
        })?;

    info!("Database migrations completed successfully");
    Ok(())
}

/// One embedded migration and whether it has been applied.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MigrationStatus {
    /// Migration version (timestamp prefix of the file name).
    pub version: i64,
    /// Description taken from the file name.
    pub description: String,
    /// Whether the migration ran successfully on this database.
    pub applied: bool,
}

/// Report every embedded migration against the database's history table.
pub async fn migration_status(pool: &SqlitePool) -> Result<Vec<MigrationStatus>, AppError> {
    let map_err = |e: sqlx::Error| {
        AppError::with_source(ErrorKind::Database, "Failed to read migration history", e)
    };

    let has_history: Option<String> = sqlx::query_scalar(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name = '_sqlx_migrations'",
    )
    .fetch_optional(pool)
    .await
    .map_err(map_err)?;

    let applied: Vec<i64> = match has_history {
        Some(_) => sqlx::query_scalar("SELECT version FROM _sqlx_migrations WHERE success = 1")
            .fetch_all(pool)
            .await
            .map_err(map_err)?,
        None => Vec::new(),
    };

    Ok(sqlx::migrate!("../../migrations")
        .iter()
        .filter(|m| !m.migration_type.is_down_migration())
        .map(|m| MigrationStatus {
            version: m.version,
            description: m.description.to_string(),
            applied: applied.contains(&m.version),
        })
        .collect())
}
