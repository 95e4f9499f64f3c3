//! Inventory behaviour configuration.

use serde::{Deserialize, Serialize};

/// Settings for item intake and lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Category assigned to newly added items.
    #[serde(default = "default_category_id")]
    pub default_category_id: i64,
    /// Maximum number of name suggestions returned.
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
    /// Largest number of records a single add-items batch may create.
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            default_category_id: default_category_id(),
            suggestion_limit: default_suggestion_limit(),
            max_batch_size: default_max_batch_size(),
        }
    }
}

fn default_category_id() -> i64 {
    1
}

fn default_suggestion_limit() -> usize {
    5
}

fn default_max_batch_size() -> usize {
    500
}
