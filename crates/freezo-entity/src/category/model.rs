//! Category entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Name of the category seeded on first start.
pub const DEFAULT_CATEGORY_NAME: &str = "Uncategorized";

/// An item category. Items currently always carry the default category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    /// Unique category identifier.
    pub id: i64,
    /// Unique category name.
    pub name: String,
}
