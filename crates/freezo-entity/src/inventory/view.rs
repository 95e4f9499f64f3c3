//! Hierarchical inventory view: item name → date/freezer group → records.

use serde::{Deserialize, Serialize};

use crate::inventory::DateKey;
use crate::item::Item;

/// Records sharing a name, a day-granularity frozen date, and a freezer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateGroup {
    /// Date key (`YYYY-MM-DD` or `"No Date"`).
    pub date: DateKey,
    /// Freezer holding every record in this group.
    pub freezer_id: i64,
    /// Number of member records.
    pub total_quantity: usize,
    /// Member records, in storage order.
    pub items: Vec<Item>,
}

impl DateGroup {
    /// Ids of the member records, in storage order.
    pub fn item_ids(&self) -> Vec<i64> {
        self.items.iter().map(|i| i.id).collect()
    }
}

/// All records sharing a name, across dates and freezers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemGroup {
    /// Item name.
    pub name: String,
    /// Number of records with this name.
    pub total_quantity: usize,
    /// Date/freezer sub-groups, sorted by date key then freezer name.
    pub date_groups: Vec<DateGroup>,
}

impl ItemGroup {
    /// Every record in the group, flattened in date-group order.
    pub fn items(&self) -> Vec<Item> {
        self.date_groups
            .iter()
            .flat_map(|g| g.items.iter().cloned())
            .collect()
    }

    /// Look up the sub-group for a date key and freezer.
    pub fn date_group(&self, date: &DateKey, freezer_id: i64) -> Option<&DateGroup> {
        self.date_groups
            .iter()
            .find(|g| &g.date == date && g.freezer_id == freezer_id)
    }

    /// Distinct freezers the group's records are spread across.
    pub fn freezer_ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = Vec::new();
        for group in &self.date_groups {
            if !ids.contains(&group.freezer_id) {
                ids.push(group.freezer_id);
            }
        }
        ids
    }
}
