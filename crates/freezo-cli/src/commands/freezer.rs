//! Freezer management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use freezo_core::error::AppError;
use freezo_service::FreezerSummary;

/// Arguments for freezer commands
#[derive(Debug, Args)]
pub struct FreezerArgs {
    /// Freezer subcommand
    #[command(subcommand)]
    pub command: FreezerCommand,
}

/// Freezer subcommands
#[derive(Debug, Subcommand)]
pub enum FreezerCommand {
    /// List freezers with their item counts
    List,
    /// Add a freezer
    Create {
        /// Freezer name
        #[arg(short, long)]
        name: String,
    },
    /// Remove an empty freezer
    Delete {
        /// Freezer ID
        #[arg(long)]
        id: i64,
    },
}

/// Freezer display row
#[derive(Debug, Serialize, Tabled)]
struct FreezerRow {
    /// Freezer ID
    id: i64,
    /// Name
    name: String,
    /// Items stored
    items: usize,
    /// Created at
    created_at: String,
}

impl From<&FreezerSummary> for FreezerRow {
    fn from(summary: &FreezerSummary) -> Self {
        Self {
            id: summary.freezer.id,
            name: summary.freezer.name.clone(),
            items: summary.item_count,
            created_at: summary.freezer.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute freezer commands
pub async fn execute(
    args: &FreezerArgs,
    config_path: Option<&str>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let ctx = super::Context::open(config_path).await?;

    match &args.command {
        FreezerCommand::List => {
            let rows: Vec<FreezerRow> = ctx
                .freezers
                .item_counts()
                .await?
                .iter()
                .map(FreezerRow::from)
                .collect();
            output::print_list(&rows, format);
        }
        FreezerCommand::Create { name } => {
            let freezer = ctx.freezers.create(name).await?;
            output::print_success(&format!(
                "Freezer '{}' created (id {})",
                freezer.name, freezer.id
            ));
        }
        FreezerCommand::Delete { id } => {
            let freezer = ctx.freezers.get(*id).await?;
            ctx.freezers.delete(*id).await?;
            output::print_success(&format!("Freezer '{}' removed", freezer.name));
        }
    }

    ctx.close().await;
    Ok(())
}
