//! Flat item list → name/date/freezer hierarchy.

use std::collections::HashMap;

use freezo_entity::freezer::{Freezer, freezer_name};
use freezo_entity::inventory::{DateGroup, DateKey, ItemGroup};
use freezo_entity::item::Item;

/// Group items by name, then by `(date key, freezer)`.
///
/// Names keep the order they are first seen in `items`. Within a name the
/// date groups are sorted by date key, then by owning freezer name; unknown
/// freezer ids sort as the empty string. Pure and deterministic.
pub fn group(items: &[Item], freezers: &[Freezer]) -> Vec<ItemGroup> {
    let mut by_name: Vec<(String, Vec<&Item>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for item in items {
        match index.get(item.name.as_str()) {
            Some(&pos) => by_name[pos].1.push(item),
            None => {
                index.insert(item.name.as_str(), by_name.len());
                by_name.push((item.name.clone(), vec![item]));
            }
        }
    }

    by_name
        .into_iter()
        .map(|(name, members)| {
            let date_groups = date_groups(&members, freezers);
            ItemGroup {
                name,
                total_quantity: members.len(),
                date_groups,
            }
        })
        .collect()
}

fn date_groups(members: &[&Item], freezers: &[Freezer]) -> Vec<DateGroup> {
    let mut groups: Vec<DateGroup> = Vec::new();
    let mut index: HashMap<(DateKey, i64), usize> = HashMap::new();

    for item in members {
        let key = (item.date_key(), item.freezer_id);
        match index.get(&key) {
            Some(&pos) => {
                let group = &mut groups[pos];
                group.items.push((*item).clone());
                group.total_quantity += 1;
            }
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(DateGroup {
                    date: key.0,
                    freezer_id: key.1,
                    total_quantity: 1,
                    items: vec![(*item).clone()],
                });
            }
        }
    }

    // Stable: groups with equal keys keep first-seen order.
    groups.sort_by(|a, b| {
        a.date.cmp(&b.date).then_with(|| {
            freezer_name(freezers, a.freezer_id).cmp(freezer_name(freezers, b.freezer_id))
        })
    });
    groups
}

/// Keep only the items in `freezer_id`, or everything when no filter is set.
pub fn filter_by_freezer(items: &[Item], freezer_id: Option<i64>) -> Vec<Item> {
    match freezer_id {
        Some(id) => items.iter().filter(|i| i.freezer_id == id).cloned().collect(),
        None => items.to_vec(),
    }
}

/// Find the group for an item name.
pub fn find_group<'a>(groups: &'a [ItemGroup], name: &str) -> Option<&'a ItemGroup> {
    groups.iter().find(|g| g.name == name)
}
