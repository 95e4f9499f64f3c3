//! Destination freezer choices for move plans.

use freezo_entity::freezer::Freezer;
use freezo_entity::item::Item;

/// Freezers at least one source item could move into.
///
/// A freezer is left out only when every source item already sits in it.
pub fn destination_choices(items: &[Item], freezers: &[Freezer]) -> Vec<Freezer> {
    freezers
        .iter()
        .filter(|f| !items.iter().all(|i| i.freezer_id == f.id))
        .cloned()
        .collect()
}

/// The first freezer holding none of the source items, else the first freezer.
pub fn default_destination(items: &[Item], freezers: &[Freezer]) -> Option<i64> {
    freezers
        .iter()
        .find(|f| !items.iter().any(|i| i.freezer_id == f.id))
        .or_else(|| freezers.first())
        .map(|f| f.id)
}
