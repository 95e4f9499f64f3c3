//! Turning the add-items form into a batch of new records.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use freezo_core::config::InventoryConfig;
use freezo_core::error::AppError;
use freezo_core::result::AppResult;
use freezo_entity::item::NewItem;

/// How weights are entered for a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum WeightEntry {
    /// No record gets a weight.
    #[default]
    None,
    /// Every record gets the same weight.
    Same {
        /// Shared weight.
        weight: String,
    },
    /// One weight per record, in creation order.
    Individual {
        /// Weights for records 1..=quantity.
        weights: Vec<String>,
    },
}

/// The add-items form: `quantity` identical records apart from weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItemsForm {
    /// Item name.
    pub name: String,
    /// Number of records to create.
    pub quantity: usize,
    /// Target freezer; required.
    #[serde(default)]
    pub freezer_id: Option<i64>,
    /// Frozen date as `YYYY-MM-DD` or RFC 3339.
    #[serde(default)]
    pub frozen_date: Option<String>,
    /// Weight entry mode.
    #[serde(default)]
    pub weights: WeightEntry,
}

/// Validate the form and expand it into exactly `quantity` new records.
///
/// The Nth record receives the Nth individual weight. A blank weight
/// in the form means no weight. Records get the configured default
/// category, and `quantity` may not exceed `max_batch_size`.
pub fn build_batch(form: &AddItemsForm, config: &InventoryConfig) -> AppResult<Vec<NewItem>> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(AppError::validation("Item name must not be empty"));
    }
    if form.quantity < 1 {
        return Err(AppError::validation("Quantity must be at least 1"));
    }
    check_batch_size(form.quantity, config.max_batch_size)?;
    let category_id = config.default_category_id;
    let freezer_id = form
        .freezer_id
        .ok_or_else(|| AppError::validation("Select a freezer"))?;
    let frozen_date = normalize_frozen_date(form.frozen_date.as_deref())?;

    let weights: Vec<Option<String>> = match &form.weights {
        WeightEntry::None => vec![None; form.quantity],
        WeightEntry::Same { weight } => vec![blank_to_none(weight); form.quantity],
        WeightEntry::Individual { weights } => {
            if weights.len() != form.quantity {
                return Err(AppError::validation(format!(
                    "Expected {} weights but got {}",
                    form.quantity,
                    weights.len()
                )));
            }
            weights.iter().map(|w| blank_to_none(w)).collect()
        }
    };

    Ok(weights
        .into_iter()
        .map(|weight| NewItem {
            name: name.to_string(),
            category_id,
            freezer_id,
            weight,
            frozen_date: frozen_date.clone(),
        })
        .collect())
}

/// Reject batches larger than `max`.
pub fn check_batch_size(quantity: usize, max: usize) -> AppResult<()> {
    if quantity > max {
        return Err(AppError::validation(format!(
            "Cannot add more than {max} items at once"
        )));
    }
    Ok(())
}

fn blank_to_none(weight: &str) -> Option<String> {
    if weight.is_empty() {
        None
    } else {
        Some(weight.to_string())
    }
}

fn normalize_frozen_date(raw: Option<&str>) -> AppResult<Option<String>> {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    let valid = NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
        || DateTime::parse_from_rfc3339(value).is_ok();
    if !valid {
        return Err(AppError::validation(format!(
            "Invalid frozen date '{value}'. Expected YYYY-MM-DD or an RFC 3339 timestamp"
        )));
    }
    Ok(Some(value.to_string()))
}
