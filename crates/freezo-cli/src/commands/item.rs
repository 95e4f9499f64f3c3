//! Item record CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use freezo_core::error::AppError;
use freezo_entity::inventory::NO_DATE;
use freezo_entity::item::Item;
use freezo_service::{AddItemsForm, WeightEntry};

/// Arguments for item commands
#[derive(Debug, Args)]
pub struct ItemArgs {
    /// Item subcommand
    #[command(subcommand)]
    pub command: ItemCommand,
}

/// Item subcommands
#[derive(Debug, Subcommand)]
pub enum ItemCommand {
    /// List every record in creation order
    List,
    /// Add a batch of identical records
    Add(AddArgs),
}

/// Arguments for `item add`
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Item name
    #[arg(short, long)]
    pub name: String,

    /// Number of records to create
    #[arg(short, long, default_value = "1")]
    pub quantity: usize,

    /// Target freezer
    #[arg(long)]
    pub freezer: i64,

    /// Frozen date (YYYY-MM-DD or RFC 3339)
    #[arg(short, long)]
    pub date: Option<String>,

    /// One weight shared by every record
    #[arg(short, long, conflicts_with = "weights")]
    pub weight: Option<String>,

    /// One weight per record, comma separated
    #[arg(long, value_delimiter = ',')]
    pub weights: Option<Vec<String>>,
}

impl AddArgs {
    fn form(&self) -> AddItemsForm {
        let weights = match (&self.weight, &self.weights) {
            (Some(weight), _) => WeightEntry::Same {
                weight: weight.clone(),
            },
            (None, Some(weights)) => WeightEntry::Individual {
                weights: weights.clone(),
            },
            (None, None) => WeightEntry::None,
        };
        AddItemsForm {
            name: self.name.clone(),
            quantity: self.quantity,
            freezer_id: Some(self.freezer),
            frozen_date: self.date.clone(),
            weights,
        }
    }
}

/// Item display row
#[derive(Debug, Serialize, Tabled)]
struct ItemRow {
    /// Item ID
    id: i64,
    /// Name
    name: String,
    /// Freezer ID
    freezer: i64,
    /// Weight
    weight: String,
    /// Frozen date
    frozen: String,
}

impl From<&Item> for ItemRow {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            freezer: item.freezer_id,
            weight: item.weight_label().to_string(),
            frozen: item.frozen_date.clone().unwrap_or_else(|| NO_DATE.to_string()),
        }
    }
}

/// Execute item commands
pub async fn execute(
    args: &ItemArgs,
    config_path: Option<&str>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let ctx = super::Context::open(config_path).await?;

    match &args.command {
        ItemCommand::List => {
            let rows: Vec<ItemRow> = ctx
                .inventory
                .list_items()
                .await?
                .iter()
                .map(ItemRow::from)
                .collect();
            output::print_list(&rows, format);
        }
        ItemCommand::Add(add) => {
            let created = ctx.inventory.add_items(&add.form()).await?;
            let rows: Vec<ItemRow> = created.iter().map(ItemRow::from).collect();
            output::print_success(&format!("Added {} x {}", created.len(), add.name));
            output::print_list(&rows, format);
        }
    }

    ctx.close().await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> AddArgs {
        AddArgs {
            name: "Pork".to_string(),
            quantity: 2,
            freezer: 3,
            date: Some("2024-01-10".to_string()),
            weight: None,
            weights: None,
        }
    }

    #[test]
    fn test_form_weight_modes() {
        assert_eq!(args().form().weights, WeightEntry::None);

        let same = AddArgs {
            weight: Some("1kg".to_string()),
            ..args()
        };
        assert_eq!(
            same.form().weights,
            WeightEntry::Same {
                weight: "1kg".to_string()
            }
        );

        let individual = AddArgs {
            weights: Some(vec!["1kg".to_string(), "2kg".to_string()]),
            ..args()
        };
        let form = individual.form();
        assert_eq!(form.freezer_id, Some(3));
        assert_eq!(
            form.weights,
            WeightEntry::Individual {
                weights: vec!["1kg".to_string(), "2kg".to_string()]
            }
        );
    }
}
