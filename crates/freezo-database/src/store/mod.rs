//! The record store contract and its implementations.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryRecordStore;
pub use sqlite::SqliteRecordStore;

use std::collections::HashSet;
use std::fmt::Debug;

use async_trait::async_trait;

use freezo_core::error::AppError;
use freezo_core::result::AppResult;
use freezo_entity::category::Category;
use freezo_entity::freezer::Freezer;
use freezo_entity::item::{Item, ItemUpdate, NewItem};

/// Persistence collaborator holding freezers, items, and categories.
///
/// Every mutating call is atomic: it either applies completely or leaves
/// the store untouched. Two implementations are provided:
/// - SQLite-backed ([`SqliteRecordStore`], one transaction per call)
/// - In-memory ([`MemoryRecordStore`], validate-then-apply under a lock)
#[async_trait]
pub trait RecordStore: Send + Sync + Debug + 'static {
    /// List all freezers in creation order.
    async fn list_freezers(&self) -> AppResult<Vec<Freezer>>;

    /// Find a freezer by id.
    async fn find_freezer(&self, id: i64) -> AppResult<Option<Freezer>>;

    /// Create a freezer. The name must not be blank.
    async fn create_freezer(&self, name: &str) -> AppResult<Freezer>;

    /// Delete a freezer.
    ///
    /// Fails with `NotFound` for an unknown id and with `Conflict` while
    /// the freezer still owns items.
    async fn delete_freezer(&self, id: i64) -> AppResult<()>;

    /// List all items in ascending id order.
    async fn list_items(&self) -> AppResult<Vec<Item>>;

    /// Create several items at once, returning them in input order.
    async fn create_items_batch(&self, items: &[NewItem]) -> AppResult<Vec<Item>>;

    /// Apply a partial update to one item.
    async fn update_item(&self, id: i64, update: &ItemUpdate) -> AppResult<Item>;

    /// Delete one item.
    async fn delete_item(&self, id: i64) -> AppResult<()>;

    /// Delete every listed item, or none of them.
    ///
    /// Fails with `InsufficientQuantity` if any id no longer exists.
    /// Returns the number of deleted records.
    async fn consume_items_batch(&self, ids: &[i64]) -> AppResult<usize>;

    /// Reassign every listed item to `dest_freezer_id`, or none of them.
    ///
    /// Only `freezer_id` and `updated_at` change. Returns the number of
    /// moved records.
    async fn move_items(&self, ids: &[i64], dest_freezer_id: i64) -> AppResult<usize>;

    /// List all categories.
    async fn list_categories(&self) -> AppResult<Vec<Category>>;

    /// Create a category. Names are unique.
    async fn create_category(&self, name: &str) -> AppResult<Category>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}

/// Reject blank names, returning the trimmed value.
pub(crate) fn require_name<'a>(name: &'a str, what: &str) -> AppResult<&'a str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(format!("{what} name must not be empty")));
    }
    Ok(trimmed)
}

/// Reject an empty or duplicated id list.
pub(crate) fn require_ids(ids: &[i64], empty_message: &str) -> AppResult<()> {
    if ids.is_empty() {
        return Err(AppError::validation(empty_message));
    }
    let mut seen = HashSet::with_capacity(ids.len());
    if let Some(dup) = ids.iter().find(|id| !seen.insert(**id)) {
        return Err(AppError::validation(format!("Item {dup} listed more than once")));
    }
    Ok(())
}

/// Validate a batch of new items before touching storage.
///
/// Returns the batch with item names trimmed.
pub(crate) fn require_new_items(items: &[NewItem]) -> AppResult<Vec<NewItem>> {
    if items.is_empty() {
        return Err(AppError::validation("No items to create"));
    }
    items
        .iter()
        .map(|item| {
            Ok(NewItem {
                name: require_name(&item.name, "Item")?.to_string(),
                ..item.clone()
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use freezo_core::error::ErrorKind;

    #[test]
    fn test_require_name_trims() {
        assert_eq!(require_name("  Chest  ", "Freezer").unwrap(), "Chest");
        let err = require_name("   ", "Freezer").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_require_ids_rejects_empty_and_duplicates() {
        assert!(require_ids(&[1, 2, 3], "none").is_ok());
        assert_eq!(require_ids(&[], "none").unwrap_err().message, "none");
        let dup = require_ids(&[4, 5, 4], "none").unwrap_err();
        assert_eq!(dup.kind, ErrorKind::Validation);
        assert!(dup.message.contains('4'));
    }

    #[test]
    fn test_require_new_items_trims_names() {
        let item = NewItem {
            name: " Pork ".to_string(),
            category_id: 1,
            freezer_id: 1,
            weight: None,
            frozen_date: None,
        };
        let batch = require_new_items(&[item]).unwrap();
        assert_eq!(batch[0].name, "Pork");
        assert!(require_new_items(&[]).unwrap_err().is_validation());
    }
}
