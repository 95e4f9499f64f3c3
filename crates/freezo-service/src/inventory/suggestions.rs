//! Item name suggestions for the intake form.

use std::collections::BTreeSet;

use freezo_entity::item::Item;

/// Distinct existing names containing `query`, case-insensitively.
///
/// An exact (case-sensitive) match is left out since there is nothing to
/// complete. Results are sorted and capped at `limit`.
pub fn suggest_names(items: &[Item], query: &str, limit: usize) -> Vec<String> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();

    items
        .iter()
        .map(|i| i.name.as_str())
        .filter(|name| *name != query && name.to_lowercase().contains(&needle))
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .take(limit)
        .map(str::to_string)
        .collect()
}
