//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Create freezer request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFreezerRequest {
    /// Freezer name.
    #[validate(length(min = 1, message = "Freezer name is required"))]
    pub name: String,
}

/// Create category request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    /// Category name.
    #[validate(length(min = 1, message = "Category name is required"))]
    pub name: String,
}

/// Consume (delete) items by id.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ConsumeItemsRequest {
    /// Item ids to delete.
    #[serde(default)]
    #[validate(length(min = 1, message = "No items to consume"))]
    pub delete_ids: Vec<i64>,
}

/// Move items to another freezer.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MoveItemsRequest {
    /// Item ids to move.
    #[serde(default)]
    #[validate(length(min = 1, message = "No items to move"))]
    pub item_ids: Vec<i64>,
    /// Destination freezer.
    pub new_freezer_id: i64,
}

/// Weight bucket and quantity for a plan-driven consume or move.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionRequest {
    /// Weight bucket, matched exactly.
    #[serde(default)]
    pub weight: Option<String>,
    /// Take from the records without a weight.
    #[serde(default)]
    pub no_weight: bool,
    /// Number of records.
    #[serde(default = "default_quantity")]
    pub quantity: usize,
}

impl SelectionRequest {
    /// The named bucket, if any. `Some(None)` is the no-weight bucket.
    pub fn bucket(&self) -> Option<Option<&str>> {
        if self.no_weight {
            Some(None)
        } else {
            self.weight.as_deref().map(Some)
        }
    }

    /// Whether any bucket was named.
    pub fn names_bucket(&self) -> bool {
        self.no_weight || self.weight.is_some()
    }
}

/// Consume from one date/freezer group, resolved against live records.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PlanConsumeRequest {
    /// Item name.
    #[validate(length(min = 1, message = "Item name is required"))]
    pub name: String,
    /// Date key of the group; defaults to "No Date".
    #[serde(default)]
    pub date: Option<String>,
    /// Freezer of the group.
    pub freezer_id: i64,
    /// Bucket and quantity.
    #[serde(flatten)]
    pub selection: SelectionRequest,
}

/// Move part of a date/freezer group, or every record of a name.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PlanMoveRequest {
    /// Item name.
    #[validate(length(min = 1, message = "Item name is required"))]
    pub name: String,
    /// Move every record with this name.
    #[serde(default)]
    pub all: bool,
    /// Date key of the source group; defaults to "No Date".
    #[serde(default)]
    pub date: Option<String>,
    /// Source freezer. Required unless `all` is set.
    #[serde(default)]
    pub freezer_id: Option<i64>,
    /// Destination freezer; the plan default when omitted.
    #[serde(default)]
    pub destination: Option<i64>,
    /// Bucket and quantity for a batch move.
    #[serde(flatten)]
    pub selection: SelectionRequest,
}

fn default_quantity() -> usize {
    1
}

/// `?q=` for name suggestions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuggestionQuery {
    /// Partial name.
    #[serde(default)]
    pub q: String,
}

/// `?freezer_id=` for the grouped view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryQuery {
    /// Only show items in this freezer.
    #[serde(default)]
    pub freezer_id: Option<i64>,
}
