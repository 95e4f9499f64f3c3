//! Consume records from one date/freezer group.

use clap::Args;

use super::weight::SelectionArgs;
use crate::output;
use freezo_core::error::AppError;
use freezo_entity::inventory::DateKey;

/// Arguments for the consume command
#[derive(Debug, Args)]
pub struct ConsumeArgs {
    /// Item name
    #[arg(short, long)]
    pub name: String,

    /// Frozen date (YYYY-MM-DD or "No Date")
    #[arg(short, long)]
    pub date: DateKey,

    /// Freezer holding the records
    #[arg(long)]
    pub freezer: i64,

    /// Weight and quantity
    #[command(flatten)]
    pub selection: SelectionArgs,
}

/// Execute the consume command
pub async fn execute(args: &ConsumeArgs, config_path: Option<&str>) -> Result<(), AppError> {
    let ctx = super::Context::open(config_path).await?;

    let mut plan = ctx
        .inventory
        .open_consume(&args.name, &args.date, args.freezer)
        .await?;
    args.selection.apply(plan.selection_mut())?;

    let consumed = ctx.inventory.consume(&plan).await?;
    output::print_success(&format!(
        "Consumed {} x {} ({}, freezer {})",
        consumed,
        plan.name(),
        plan.date(),
        plan.freezer_id()
    ));

    ctx.close().await;
    Ok(())
}
