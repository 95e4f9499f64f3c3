//! CLI command definitions and dispatch.

pub mod config;
pub mod consume;
pub mod freezer;
pub mod inventory;
pub mod item;
pub mod migrate;
pub mod relocate;
pub mod serve;
pub mod weight;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use freezo_core::config::AppConfig;
use freezo_core::error::AppError;
use freezo_database::migration::run_migrations;
use freezo_database::{DatabasePool, RecordStore, SqliteRecordStore};
use freezo_service::{FreezerService, InventoryService};

/// Freezo: freezer inventory tracking
#[derive(Debug, Parser)]
#[command(name = "freezo", version, about, long_about = None)]
pub struct Cli {
    /// Path to a configuration file (defaults to config/{FREEZO_ENV}.toml layering)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the Freezo HTTP server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Freezer management
    Freezer(freezer::FreezerArgs),
    /// Item records
    Item(item::ItemArgs),
    /// Show the grouped inventory
    Inventory(inventory::InventoryArgs),
    /// Consume items from a date/freezer group
    Consume(consume::ConsumeArgs),
    /// Move items to another freezer
    Move(relocate::MoveArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config_path = self.config.as_deref();
        match &self.command {
            Commands::Serve(args) => serve::execute(args, config_path).await,
            Commands::Migrate(args) => migrate::execute(args, config_path, self.format).await,
            Commands::Freezer(args) => freezer::execute(args, config_path, self.format).await,
            Commands::Item(args) => item::execute(args, config_path, self.format).await,
            Commands::Inventory(args) => inventory::execute(args, config_path, self.format).await,
            Commands::Consume(args) => consume::execute(args, config_path).await,
            Commands::Move(args) => relocate::execute(args, config_path).await,
            Commands::Config(args) => config::execute(args, config_path, self.format).await,
        }
    }
}

/// Helper: load configuration from an explicit file or the `FREEZO_ENV` layering
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig, AppError> {
    let mut config = match config_path {
        Some(path) => AppConfig::load_file(path)?,
        None => {
            let env = std::env::var("FREEZO_ENV").unwrap_or_else(|_| "development".to_string());
            AppConfig::load(&env)?
        }
    };
    config.apply_legacy_overrides(
        std::env::var("DB_PATH").ok().as_deref(),
        std::env::var("PORT").ok().as_deref(),
    )?;
    Ok(config)
}

/// Helper: open the migrated database behind a command
pub async fn create_db_pool(config: &AppConfig) -> Result<DatabasePool, AppError> {
    let db = DatabasePool::connect(&config.database).await?;
    run_migrations(db.pool()).await?;
    Ok(db)
}

/// Services over the configured record store.
pub struct Context {
    /// Freezer management.
    pub freezers: FreezerService,
    /// Inventory views and mutations.
    pub inventory: InventoryService,
    db: DatabasePool,
}

impl Context {
    /// Load configuration and connect the services to the database.
    pub async fn open(config_path: Option<&str>) -> Result<Self, AppError> {
        let config = load_config(config_path)?;
        let db = create_db_pool(&config).await?;
        let store: Arc<dyn RecordStore> = Arc::new(SqliteRecordStore::new(&db));
        Ok(Self {
            freezers: FreezerService::new(Arc::clone(&store)),
            inventory: InventoryService::new(store, config.inventory),
            db,
        })
    }

    /// Close the database pool.
    pub async fn close(self) {
        self.db.close().await;
    }
}
