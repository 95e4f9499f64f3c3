//! Database migration management commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use freezo_core::error::AppError;
use freezo_database::DatabasePool;
use freezo_database::migration::{MigrationStatus, migration_status, run_migrations};

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
    /// Show migration status
    Status,
}

/// Migration display row
#[derive(Debug, Serialize, Tabled)]
struct MigrationRow {
    /// Version
    version: i64,
    /// Description
    description: String,
    /// Applied or pending
    status: &'static str,
}

impl From<&MigrationStatus> for MigrationRow {
    fn from(status: &MigrationStatus) -> Self {
        Self {
            version: status.version,
            description: status.description.clone(),
            status: if status.applied { "applied" } else { "pending" },
        }
    }
}

/// Execute migration commands
pub async fn execute(
    args: &MigrateArgs,
    config_path: Option<&str>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let db = DatabasePool::connect(&config.database).await?;

    match &args.command {
        MigrateCommand::Run => {
            println!("Running database migrations...");
            run_migrations(db.pool()).await?;
            output::print_success("All migrations applied successfully.");
        }
        MigrateCommand::Status => {
            let rows: Vec<MigrationRow> = migration_status(db.pool())
                .await?
                .iter()
                .map(MigrationRow::from)
                .collect();
            output::print_list(&rows, format);
        }
    }

    db.close().await;
    Ok(())
}
