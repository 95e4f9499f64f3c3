//! Move records to another freezer.

use clap::Args;

use super::weight::SelectionArgs;
use crate::output;
use freezo_core::error::AppError;
use freezo_entity::freezer::freezer_name;
use freezo_entity::inventory::DateKey;
use freezo_service::MovePlan;

/// Arguments for the move command
#[derive(Debug, Args)]
pub struct MoveArgs {
    /// Item name
    #[arg(short, long)]
    pub name: String,

    /// Frozen date of the group to move from
    #[arg(short, long, required_unless_present = "all", conflicts_with = "all")]
    pub date: Option<DateKey>,

    /// Freezer of the group to move from
    #[arg(long, required_unless_present = "all", conflicts_with = "all")]
    pub freezer: Option<i64>,

    /// Move every record with this name
    #[arg(long, conflicts_with_all = ["weight", "no_weight"])]
    pub all: bool,

    /// Destination freezer (defaults to the first freezer the records are not in)
    #[arg(long)]
    pub to: Option<i64>,

    /// Weight and quantity for a single-group move
    #[command(flatten)]
    pub selection: SelectionArgs,
}

/// Execute the move command
pub async fn execute(args: &MoveArgs, config_path: Option<&str>) -> Result<(), AppError> {
    let ctx = super::Context::open(config_path).await?;

    let mut plan = match (&args.date, args.freezer) {
        (Some(date), Some(freezer)) if !args.all => {
            ctx.inventory.open_move(&args.name, date, freezer).await?
        }
        _ => ctx.inventory.open_move_all(&args.name).await?,
    };
    configure(&mut plan, args)?;

    let dest = plan
        .destination()
        .ok_or_else(|| AppError::validation("Select a destination freezer"))?;
    let moved = ctx.inventory.relocate(&plan).await?;

    let freezers = ctx.freezers.list().await?;
    output::print_success(&format!(
        "Moved {} x {} to {}",
        moved,
        plan.name(),
        freezer_name(&freezers, dest)
    ));

    ctx.close().await;
    Ok(())
}

fn configure(plan: &mut MovePlan, args: &MoveArgs) -> Result<(), AppError> {
    if let Some(to) = args.to {
        plan.set_destination(to)?;
    }
    if let Some(selection) = plan.selection_mut() {
        args.selection.apply(selection)?;
    }
    Ok(())
}
