//! Weight-bucket selection over a candidate record set.

use serde::{Deserialize, Serialize};

use freezo_core::error::AppError;
use freezo_core::result::AppResult;
use freezo_entity::item::{Item, NO_WEIGHT_LABEL};

/// Records in the bucket named by `weight`.
///
/// `None` selects records without a weight. A string matches exactly:
/// case-sensitive, untrimmed, and `""` is not the same as `None`.
pub fn select_candidates(items: &[Item], weight: Option<&str>) -> Vec<Item> {
    items
        .iter()
        .filter(|i| i.in_weight_bucket(weight))
        .cloned()
        .collect()
}

/// The first `n` candidates, in their existing order.
pub fn take_n(mut candidates: Vec<Item>, n: usize) -> AppResult<Vec<Item>> {
    if n > candidates.len() {
        return Err(AppError::insufficient_quantity(n, candidates.len()));
    }
    candidates.truncate(n);
    Ok(candidates)
}

/// Distinct weight values in first-seen order, with `None` as its own entry.
pub fn distinct_weights(items: &[Item]) -> Vec<Option<String>> {
    let mut weights: Vec<Option<String>> = Vec::new();
    for item in items {
        if !weights.contains(&item.weight) {
            weights.push(item.weight.clone());
        }
    }
    weights
}

/// One selectable weight bucket with its record count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightOption {
    /// Bucket value; `None` is the no-weight bucket.
    pub weight: Option<String>,
    /// Records in the bucket.
    pub count: usize,
}

impl WeightOption {
    /// Display label, substituting "No Weight" for the absent bucket.
    pub fn label(&self) -> &str {
        self.weight.as_deref().unwrap_or(NO_WEIGHT_LABEL)
    }
}

/// Weight buckets of `items` in first-seen order, with counts.
pub fn weight_options(items: &[Item]) -> Vec<WeightOption> {
    distinct_weights(items)
        .into_iter()
        .map(|weight| WeightOption {
            count: items.iter().filter(|i| i.in_weight_bucket(weight.as_deref())).count(),
            weight,
        })
        .collect()
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

    fn ids(items: &[Item]) -> Vec<i64> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_buckets_partition_items() {
        let items = vec![
            item(1, Some("500g")),
            item(2, None),
            item(3, Some("")),
            item(4, Some("500g")),
            item(5, Some("500G")),
            item(6, None),
        ];

        let weights = distinct_weights(&items);
        assert_eq!(
            weights,
            vec![
                Some("500g".to_string()),
                None,
                Some(String::new()),
                Some("500G".to_string())
            ]
        );

        let mut seen: Vec<i64> = weights
            .iter()
            .flat_map(|w| ids(&select_candidates(&items, w.as_deref())))
            .collect();
        seen.sort();
        assert_eq!(seen, vec![1, 2, 3, 4, 5, 6]);

        assert_eq!(ids(&select_candidates(&items, None)), vec![2, 6]);
        assert_eq!(ids(&select_candidates(&items, Some(""))), vec![3]);
    }

    #[test]
    fn test_take_n_prefix() {
        let items = vec![item(3, None), item(8, None), item(9, None)];
        assert_eq!(ids(&take_n(items.clone(), 2).unwrap()), vec![3, 8]);
        assert_eq!(ids(&take_n(items.clone(), 3).unwrap()), vec![3, 8, 9]);

        let err = take_n(items, 4).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InsufficientQuantity);
        assert_eq!(err.message, "Requested 4 items but only 3 available");
    }

    #[test]
    fn test_weight_options_count_and_label() {
        let items = vec![item(1, Some("500g")), item(2, Some("500g")), item(3, None)];
        let options = weight_options(&items);
        assert_eq!(options.len(), 2);
        assert_eq!((options[0].label(), options[0].count), ("500g", 2));
        assert_eq!((options[1].label(), options[1].count), ("No Weight", 1));
    }
}
