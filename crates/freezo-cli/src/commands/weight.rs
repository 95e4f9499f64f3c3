//! Weight and quantity arguments shared by `consume` and `move`.

use clap::Args;

use freezo_core::error::AppError;
use freezo_service::WeightSelection;

/// Weight bucket and quantity flags
#[derive(Debug, Clone, Default, Args)]
pub struct SelectionArgs {
    /// Weight bucket to take from (exact match)
    #[arg(short, long, conflicts_with = "no_weight")]
    pub weight: Option<String>,

    /// Take from the records that have no weight
    #[arg(long)]
    pub no_weight: bool,

    /// Number of records
    #[arg(short, long, default_value = "1")]
    pub quantity: usize,
}

impl SelectionArgs {
    /// The bucket named on the command line, if any. `Some(None)` is the no-weight bucket.
    pub fn bucket(&self) -> Option<Option<&str>> {
        if self.no_weight {
            Some(None)
        } else {
            self.weight.as_deref().map(Some)
        }
    }

    /// Choose the bucket (prompting when several exist and none was given),
    /// then set the quantity.
    pub fn apply(&self, selection: &mut WeightSelection) -> Result<(), AppError> {
        match self.bucket() {
            Some(bucket) => selection.select(bucket)?,
            None if selection.needs_weight_choice() => {
                let bucket = prompt_weight(selection)?;
                selection.select(bucket.as_deref())?;
            }
            None => {}
        }
        selection.request_quantity(self.quantity)
    }
}

/// Ask which weight bucket to use.
fn prompt_weight(selection: &WeightSelection) -> Result<Option<String>, AppError> {
    let options = selection.options();
    let labels: Vec<String> = options
        .iter()
        .map(|o| format!("{} ({})", o.label(), o.count))
        .collect();

    let index = dialoguer::Select::new()
        .with_prompt("Select a weight")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(|e| AppError::internal(format!("Input error: {}", e)))?;

    options
        .get(index)
        .map(|o| o.weight.clone())
        .ok_or_else(|| AppError::validation("Select a weight first"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_flags() {
        let none = SelectionArgs::default();
        assert_eq!(none.bucket(), None);

        let no_weight = SelectionArgs {
            no_weight: true,
            ..SelectionArgs::default()
        };
        assert_eq!(no_weight.bucket(), Some(None));

        let named = SelectionArgs {
            weight: Some("1kg".to_string()),
            ..SelectionArgs::default()
        };
        assert_eq!(named.bucket(), Some(Some("1kg")));
    }
}
