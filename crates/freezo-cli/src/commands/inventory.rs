//! Grouped inventory view.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use freezo_core::error::AppError;
use freezo_entity::freezer::{Freezer, freezer_name};
use freezo_entity::inventory::ItemGroup;
use freezo_service::inventory::weight_options;

/// Arguments for the inventory command
#[derive(Debug, Args)]
pub struct InventoryArgs {
    /// Only show records in this freezer
    #[arg(long)]
    pub freezer: Option<i64>,
}

/// One date/freezer group as a table row
#[derive(Debug, Serialize, Tabled)]
struct GroupRow {
    /// Item name
    name: String,
    /// Frozen date
    date: String,
    /// Freezer ID
    freezer_id: i64,
    /// Freezer name
    freezer: String,
    /// Records in the group
    quantity: usize,
    /// Weight buckets with counts
    weights: String,
}

fn rows(groups: &[ItemGroup], freezers: &[Freezer]) -> Vec<GroupRow> {
    groups
        .iter()
        .flat_map(|group| {
            group.date_groups.iter().map(move |dg| GroupRow {
                name: group.name.clone(),
                date: dg.date.to_string(),
                freezer_id: dg.freezer_id,
                freezer: freezer_name(freezers, dg.freezer_id).to_string(),
                quantity: dg.total_quantity,
                weights: weight_options(&dg.items)
                    .iter()
                    .map(|o| format!("{} x{}", o.label(), o.count))
                    .collect::<Vec<_>>()
                    .join(", "),
            })
        })
        .collect()
}

/// Execute the inventory command
pub async fn execute(
    args: &InventoryArgs,
    config_path: Option<&str>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let ctx = super::Context::open(config_path).await?;

    let snapshot = ctx.inventory.snapshot().await?;
    let groups = snapshot.grouped(args.freezer);

    match format {
        OutputFormat::Table => output::print_list(&rows(&groups, &snapshot.freezers), format),
        OutputFormat::Json => output::print_item(&groups, format),
    }

    ctx.close().await;
    Ok(())
}
