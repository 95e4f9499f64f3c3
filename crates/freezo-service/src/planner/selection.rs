//! Weight bucket and quantity selection shared by the consume and move plans.

use serde::Serialize;

use freezo_core::error::AppError;
use freezo_core::result::AppResult;
use freezo_entity::item::Item;

use crate::inventory::batch::{WeightOption, distinct_weights, select_candidates, take_n, weight_options};

/// A weight bucket choice over a snapshot of candidate records, plus a
/// quantity bounded by the size of that bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeightSelection {
    candidates: Vec<Item>,
    weights: Vec<Option<String>>,
    selected: Option<Option<String>>,
    quantity: usize,
}

impl WeightSelection {
    /// Start a selection. A single bucket is selected up front.
    pub fn new(candidates: Vec<Item>) -> AppResult<Self> {
        if candidates.is_empty() {
            return Err(AppError::validation("There are no items to select from"));
        }
        let weights = distinct_weights(&candidates);
        let selected = match weights.as_slice() {
            [only] => Some(only.clone()),
            _ => None,
        };
        Ok(Self {
            candidates,
            weights,
            selected,
            quantity: 1,
        })
    }

    /// Whether the user has to pick a bucket before choosing a quantity.
    pub fn needs_weight_choice(&self) -> bool {
        self.weights.len() > 1
    }

    /// Selectable buckets with their counts, in first-seen order.
    pub fn options(&self) -> Vec<WeightOption> {
        weight_options(&self.candidates)
    }

    /// Snapshot records this selection was opened on.
    pub fn candidates(&self) -> &[Item] {
        &self.candidates
    }

    /// The chosen bucket, if any.
    pub fn selected(&self) -> Option<Option<&str>> {
        self.selected.as_ref().map(|w| w.as_deref())
    }

    /// Choose a bucket and reset the quantity to 1.
    pub fn select(&mut self, weight: Option<&str>) -> AppResult<()> {
        if !self.weights.iter().any(|w| w.as_deref() == weight) {
            return Err(AppError::validation(format!(
                "No items with weight '{}'",
                weight.unwrap_or("No Weight")
            )));
        }
        self.selected = Some(weight.map(str::to_string));
        self.quantity = 1;
        Ok(())
    }

    /// Drop the bucket choice. Only possible while several buckets exist.
    pub fn clear(&mut self) {
        if self.needs_weight_choice() {
            self.selected = None;
            self.quantity = 1;
        }
    }

    /// Records in the chosen bucket; zero before a choice is made.
    pub fn max_quantity(&self) -> usize {
        match self.selected() {
            Some(weight) => self
                .candidates
                .iter()
                .filter(|i| i.in_weight_bucket(weight))
                .count(),
            None => 0,
        }
    }

    /// Current quantity.
    pub fn quantity(&self) -> usize {
        self.quantity
    }

    /// Set the quantity, clamped to `[1, max_quantity]`.
    pub fn set_quantity(&mut self, quantity: usize) {
        self.quantity = quantity.clamp(1, self.max_quantity().max(1));
    }

    /// Set the quantity exactly, rejecting values outside `[1, max_quantity]`.
    pub fn request_quantity(&mut self, quantity: usize) -> AppResult<()> {
        if quantity < 1 {
            return Err(AppError::validation("Quantity must be at least 1"));
        }
        let max = self.max_quantity();
        if quantity > max {
            return Err(AppError::insufficient_quantity(quantity, max));
        }
        self.quantity = quantity;
        Ok(())
    }

    /// Choose a bucket (`Some(None)` is the no-weight bucket) and an exact
    /// quantity in one step. A bucket must be named when several exist.
    pub fn choose(&mut self, weight: Option<Option<&str>>, quantity: usize) -> AppResult<()> {
        match weight {
            Some(weight) => self.select(weight)?,
            None if self.needs_weight_choice() => {
                return Err(AppError::validation("Select a weight first"));
            }
            None => {}
        }
        self.request_quantity(quantity)
    }

    /// Increase by one. No-op at the maximum.
    pub fn increment(&mut self) {
        if self.quantity < self.max_quantity() {
            self.quantity += 1;
        }
    }

    /// Decrease by one. No-op at 1.
    pub fn decrement(&mut self) {
        if self.quantity > 1 {
            self.quantity -= 1;
        }
    }

    /// Resolve the target ids against live store records.
    ///
    /// A live record is considered only if it was part of the snapshot and
    /// still sits in the same name/date/freezer group. Records removed,
    /// moved, renamed or redated since the snapshot shrink the bucket and
    /// surface as `InsufficientQuantity`.
    pub fn resolve(&self, live: &[Item]) -> AppResult<Vec<i64>> {
        let weight = self
            .selected()
            .ok_or_else(|| AppError::validation("Select a weight first"))?;
        if self.quantity < 1 {
            return Err(AppError::validation("Quantity must be at least 1"));
        }

        let known: Vec<Item> = live
            .iter()
            .filter(|i| self.candidates.iter().any(|c| same_group(c, i)))
            .cloned()
            .collect();
        let targets = take_n(select_candidates(&known, weight), self.quantity)?;
        Ok(targets.into_iter().map(|i| i.id).collect())
    }
}

fn same_group(snapshot: &Item, live: &Item) -> bool {
    snapshot.id == live.id
        && snapshot.name == live.name
        && snapshot.freezer_id == live.freezer_id
        && snapshot.date_key() == live.date_key()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use freezo_core::error::ErrorKind;

    fn item(id: i64, weight: Option<&str>) -> Item {
        let now = Utc::now();
        Item {
            id,
            name: "Pork".to_string(),
            category_id: 1,
            freezer_id: 1,
            weight: weight.map(str::to_string),
            frozen_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_single_bucket_preselected() {
        let selection = WeightSelection::new(vec![item(1, None), item(2, None)]).unwrap();
        assert!(!selection.needs_weight_choice());
        assert_eq!(selection.selected(), Some(None));
        assert_eq!(selection.max_quantity(), 2);
        assert_eq!(selection.quantity(), 1);
    }

    #[test]
    fn test_quantity_bounds() {
        let mut selection =
            WeightSelection::new(vec![item(1, Some("1kg")), item(2, Some("1kg"))]).unwrap();
        selection.decrement();
        assert_eq!(selection.quantity(), 1);
        selection.increment();
        selection.increment();
        assert_eq!(selection.quantity(), 2);
        selection.set_quantity(10);
        assert_eq!(selection.quantity(), 2);
        selection.set_quantity(0);
        assert_eq!(selection.quantity(), 1);

        let err = selection.request_quantity(3).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InsufficientQuantity);
        assert_eq!(selection.quantity(), 1);
    }

    #[test]
    fn test_select_resets_quantity() {
        let mut selection = WeightSelection::new(vec![
            item(1, Some("500g")),
            item(2, Some("700g")),
            item(3, Some("500g")),
        ])
        .unwrap();
        assert!(selection.needs_weight_choice());
        assert_eq!(selection.max_quantity(), 0);

        selection.select(Some("500g")).unwrap();
        selection.increment();
        assert_eq!(selection.quantity(), 2);

        selection.select(Some("700g")).unwrap();
        assert_eq!(selection.quantity(), 1);
        assert!(selection.select(Some("900g")).is_err());
        assert!(selection.select(None).is_err());
    }

    #[test]
    fn test_choose_requires_bucket_when_mixed() {
        let mut mixed = WeightSelection::new(vec![item(1, Some("1kg")), item(2, None)]).unwrap();
        assert_eq!(mixed.choose(None, 1).unwrap_err().message, "Select a weight first");
        mixed.choose(Some(None), 1).unwrap();
        assert_eq!(mixed.selected(), Some(None));

        let mut single = WeightSelection::new(vec![item(3, None), item(4, None)]).unwrap();
        single.choose(None, 2).unwrap();
        assert_eq!(single.quantity(), 2);
        let err = single.choose(None, 3).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InsufficientQuantity);
    }

    #[test]
    fn test_resolve_against_shrunk_live_set() {
        let snapshot = vec![item(1, Some("500g")), item(2, Some("500g"))];
        let mut selection = WeightSelection::new(snapshot).unwrap();
        selection.set_quantity(2);

        let live = vec![item(2, Some("500g")), item(9, Some("500g"))];
        let err = selection.resolve(&live).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InsufficientQuantity);

        selection.set_quantity(1);
        assert_eq!(selection.resolve(&live).unwrap(), vec![2]);
    }

    #[test]
    fn test_resolve_skips_moved_and_redated_records() {
        let snapshot = vec![item(1, Some("500g")), item(2, Some("500g")), item(3, Some("500g"))];
        let mut selection = WeightSelection::new(snapshot).unwrap();

        let mut moved = item(1, Some("500g"));
        moved.freezer_id = 2;
        let mut redated = item(2, Some("500g"));
        redated.frozen_date = Some("2024-05-01".to_string());
        let live = vec![moved, redated, item(3, Some("500g"))];

        assert_eq!(selection.resolve(&live).unwrap(), vec![3]);

        selection.set_quantity(2);
        let err = selection.resolve(&live).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InsufficientQuantity);
    }

    #[test]
    fn test_resolve_skips_renamed_records() {
        let selection = WeightSelection::new(vec![item(1, None)]).unwrap();
        let mut renamed = item(1, None);
        renamed.name = "Beef".to_string();

        let err = selection.resolve(&[renamed]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InsufficientQuantity);
    }
}
