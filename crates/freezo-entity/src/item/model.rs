//! Item entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

use crate::inventory::DateKey;

/// Label used when displaying a record without a weight.
pub const NO_WEIGHT_LABEL: &str = "No Weight";

/// One physical unit stored in a freezer.
///
/// `weight` and `frozen_date` are free-form and optional. An absent weight
/// is a different bucket from an empty-string weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Item {
    /// Unique item identifier. Ascending ids reflect creation order.
    pub id: i64,
    /// Free-text item name.
    pub name: String,
    /// Owning category.
    pub category_id: i64,
    /// Owning freezer.
    pub freezer_id: i64,
    /// Free-form weight, e.g. `"500g"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    /// ISO-8601 date or timestamp the item was frozen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frozen_date: Option<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Day-granularity key this record is grouped under.
    pub fn date_key(&self) -> DateKey {
        DateKey::from_frozen_date(self.frozen_date.as_deref())
    }

    /// Whether the record belongs to the given weight bucket.
    pub fn in_weight_bucket(&self, weight: Option<&str>) -> bool {
        self.weight.as_deref() == weight
    }

    /// Weight for display, substituting [`NO_WEIGHT_LABEL`] when absent.
    pub fn weight_label(&self) -> &str {
        self.weight.as_deref().unwrap_or(NO_WEIGHT_LABEL)
    }
}

/// Data required to create a new item record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    /// Free-text item name.
    pub name: String,
    /// Owning category.
    #[serde(default = "default_category_id")]
    pub category_id: i64,
    /// Owning freezer.
    pub freezer_id: i64,
    /// Free-form weight.
    #[serde(default)]
    pub weight: Option<String>,
    /// ISO-8601 date or timestamp the item was frozen.
    #[serde(default)]
    pub frozen_date: Option<String>,
}

/// Partial update of an item record.
///
/// Omitted fields are left unchanged. For `weight` and `frozen_date`, an
/// explicit `null` clears the value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemUpdate {
    /// New name.
    #[serde(default)]
    pub name: Option<String>,
    /// New category.
    #[serde(default)]
    pub category_id: Option<i64>,
    /// New freezer.
    #[serde(default)]
    pub freezer_id: Option<i64>,
    /// New weight; `Some(None)` clears it.
    #[serde(default, deserialize_with = "double_option")]
    pub weight: Option<Option<String>>,
    /// New frozen date; `Some(None)` clears it.
    #[serde(default, deserialize_with = "double_option")]
    pub frozen_date: Option<Option<String>>,
}

impl ItemUpdate {
    /// Apply the update onto an existing record. Does not touch timestamps.
    pub fn apply(&self, item: &mut Item) {
        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(category_id) = self.category_id {
            item.category_id = category_id;
        }
        if let Some(freezer_id) = self.freezer_id {
            item.freezer_id = freezer_id;
        }
        if let Some(weight) = &self.weight {
            item.weight = weight.clone();
        }
        if let Some(frozen_date) = &self.frozen_date {
            item.frozen_date = frozen_date.clone();
        }
    }
}

fn default_category_id() -> i64 {
    1
}

fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
