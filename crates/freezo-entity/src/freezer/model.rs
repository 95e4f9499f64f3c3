//! Freezer entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A physical freezer that owns item records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Freezer {
    /// Unique freezer identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// When the freezer was created.
    pub created_at: DateTime<Utc>,
    /// When the freezer was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Resolve a freezer name by id; unknown ids resolve to the empty string.
pub fn freezer_name(freezers: &[Freezer], id: i64) -> &str {
    freezers
        .iter()
        .find(|f| f.id == id)
        .map(|f| f.name.as_str())
        .unwrap_or("")
}
