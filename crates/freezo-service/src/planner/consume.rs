//! Consume workflow: pick a weight bucket, pick a quantity, delete.

use serde::Serialize;

use freezo_core::result::AppResult;
use freezo_entity::inventory::{DateGroup, DateKey};
use freezo_entity::item::Item;

use super::selection::WeightSelection;

/// Where a consume plan currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsumeStep {
    /// Several weights exist; one must be chosen.
    SelectWeight,
    /// A bucket is chosen; the quantity can be adjusted and submitted.
    SelectQuantity,
}

/// Plan to consume records from one date/freezer group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsumePlan {
    name: String,
    date: DateKey,
    freezer_id: i64,
    selection: WeightSelection,
}

impl ConsumePlan {
    /// Open a plan on a snapshot of `group`.
    pub fn new(name: &str, group: &DateGroup) -> AppResult<Self> {
        Ok(Self {
            name: name.to_string(),
            date: group.date.clone(),
            freezer_id: group.freezer_id,
            selection: WeightSelection::new(group.items.clone())?,
        })
    }

    /// Item name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Date key of the group.
    pub fn date(&self) -> &DateKey {
        &self.date
    }

    /// Freezer of the group.
    pub fn freezer_id(&self) -> i64 {
        self.freezer_id
    }

    /// Current step.
    pub fn step(&self) -> ConsumeStep {
        match self.selection.selected() {
            Some(_) => ConsumeStep::SelectQuantity,
            None => ConsumeStep::SelectWeight,
        }
    }

    /// Weight and quantity selection.
    pub fn selection(&self) -> &WeightSelection {
        &self.selection
    }

    /// Mutable weight and quantity selection.
    pub fn selection_mut(&mut self) -> &mut WeightSelection {
        &mut self.selection
    }

    /// Choose a weight bucket, moving to [`ConsumeStep::SelectQuantity`].
    pub fn select_weight(&mut self, weight: Option<&str>) -> AppResult<()> {
        self.selection.select(weight)
    }

    /// Go back to the weight step when there is one.
    pub fn back(&mut self) {
        self.selection.clear();
    }

    /// Ids to delete, resolved against live records.
    pub fn target_ids(&self, live: &[Item]) -> AppResult<Vec<i64>> {
        self.selection.resolve(live)
    }
}
