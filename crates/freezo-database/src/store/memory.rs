//! In-memory record store using a Tokio lock for single-process use.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use freezo_core::error::AppError;
use freezo_core::result::AppResult;
use freezo_entity::category::{Category, DEFAULT_CATEGORY_NAME};
use freezo_entity::freezer::Freezer;
use freezo_entity::item::{Item, ItemUpdate, NewItem};

use super::{RecordStore, require_ids, require_name, require_new_items};

/// Internal state for the in-memory store.
#[derive(Debug)]
struct InnerState {
    freezers: BTreeMap<i64, Freezer>,
    items: BTreeMap<i64, Item>,
    categories: BTreeMap<i64, Category>,
    next_freezer_id: i64,
    next_item_id: i64,
    next_category_id: i64,
}

impl InnerState {
    fn require_freezer(&self, id: i64) -> AppResult<()> {
        if self.freezers.contains_key(&id) {
            Ok(())
        } else {
            Err(AppError::not_found(format!("Freezer {id} not found")))
        }
    }

    fn require_category(&self, id: i64) -> AppResult<()> {
        if self.categories.contains_key(&id) {
            Ok(())
        } else {
            Err(AppError::not_found(format!("Category {id} not found")))
        }
    }

    fn existing(&self, ids: &[i64]) -> usize {
        ids.iter().filter(|id| self.items.contains_key(id)).count()
    }
}

/// Record store holding everything in ordered maps behind a write lock.
///
/// Each mutation validates against the whole state before applying any
/// change, so a failed call leaves the store untouched. Iteration order is
/// ascending id, matching the SQLite store.
#[derive(Debug, Clone)]
pub struct MemoryRecordStore {
    state: Arc<RwLock<InnerState>>,
}

impl MemoryRecordStore {
    /// Create an empty store seeded with the default category.
    pub fn new() -> Self {
        let mut categories = BTreeMap::new();
        categories.insert(
            1,
            Category {
                id: 1,
                name: DEFAULT_CATEGORY_NAME.to_string(),
            },
        );
        Self {
            state: Arc::new(RwLock::new(InnerState {
                freezers: BTreeMap::new(),
                items: BTreeMap::new(),
                categories,
                next_freezer_id: 1,
                next_item_id: 1,
                next_category_id: 2,
            })),
        }
    }
}

impl Default for MemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn list_freezers(&self) -> AppResult<Vec<Freezer>> {
        Ok(self.state.read().await.freezers.values().cloned().collect())
    }

    async fn find_freezer(&self, id: i64) -> AppResult<Option<Freezer>> {
        Ok(self.state.read().await.freezers.get(&id).cloned())
    }

    async fn create_freezer(&self, name: &str) -> AppResult<Freezer> {
        let name = require_name(name, "Freezer")?;
        let mut state = self.state.write().await;
        let now = Utc::now();
        let freezer = Freezer {
            id: state.next_freezer_id,
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        };
        state.next_freezer_id += 1;
        state.freezers.insert(freezer.id, freezer.clone());
        Ok(freezer)
    }

    async fn delete_freezer(&self, id: i64) -> AppResult<()> {
        let mut state = self.state.write().await;
        state.require_freezer(id)?;
        if state.items.values().any(|i| i.freezer_id == id) {
            warn!(freezer_id = id, "Refusing to delete non-empty freezer");
            return Err(AppError::conflict("Cannot delete freezer with items"));
        }
        state.freezers.remove(&id);
        Ok(())
    }

    async fn list_items(&self) -> AppResult<Vec<Item>> {
        Ok(self.state.read().await.items.values().cloned().collect())
    }

    async fn create_items_batch(&self, items: &[NewItem]) -> AppResult<Vec<Item>> {
        let items = require_new_items(items)?;
        let mut state = self.state.write().await;
        for data in &items {
            state.require_freezer(data.freezer_id)?;
            state.require_category(data.category_id)?;
        }

        let now = Utc::now();
        let mut created = Vec::with_capacity(items.len());
        for data in &items {
            let item = Item {
                id: state.next_item_id,
                name: data.name.clone(),
                category_id: data.category_id,
                freezer_id: data.freezer_id,
                weight: data.weight.clone(),
                frozen_date: data.frozen_date.clone(),
                created_at: now,
                updated_at: now,
            };
            state.next_item_id += 1;
            state.items.insert(item.id, item.clone());
            created.push(item);
        }
        debug!(count = created.len(), "Items created");
        Ok(created)
    }

    async fn update_item(&self, id: i64, update: &ItemUpdate) -> AppResult<Item> {
        let mut state = self.state.write().await;
        let mut item = state
            .items
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Item {id} not found")))?;

        update.apply(&mut item);
        item.name = require_name(&item.name, "Item")?.to_string();
        state.require_freezer(item.freezer_id)?;
        state.require_category(item.category_id)?;
        item.updated_at = Utc::now();

        state.items.insert(id, item.clone());
        Ok(item)
    }

    async fn delete_item(&self, id: i64) -> AppResult<()> {
        let mut state = self.state.write().await;
        state
            .items
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(format!("Item {id} not found")))
    }

    async fn consume_items_batch(&self, ids: &[i64]) -> AppResult<usize> {
        require_ids(ids, "No items to consume")?;
        let mut state = self.state.write().await;

        let available = state.existing(ids);
        if available != ids.len() {
            return Err(AppError::insufficient_quantity(ids.len(), available));
        }

        for id in ids {
            state.items.remove(id);
        }
        debug!(count = ids.len(), item_ids = ?ids, "Items consumed");
        Ok(ids.len())
    }

    async fn move_items(&self, ids: &[i64], dest_freezer_id: i64) -> AppResult<usize> {
        require_ids(ids, "No items to move")?;
        let mut state = self.state.write().await;
        state.require_freezer(dest_freezer_id)?;

        let available = state.existing(ids);
        if available != ids.len() {
            return Err(AppError::insufficient_quantity(ids.len(), available));
        }

        let now = Utc::now();
        for id in ids {
            if let Some(item) = state.items.get_mut(id) {
                item.freezer_id = dest_freezer_id;
                item.updated_at = now;
            }
        }
        debug!(count = ids.len(), freezer_id = dest_freezer_id, "Items moved");
        Ok(ids.len())
    }

    async fn list_categories(&self) -> AppResult<Vec<Category>> {
        Ok(self.state.read().await.categories.values().cloned().collect())
    }

    async fn create_category(&self, name: &str) -> AppResult<Category> {
        let name = require_name(name, "Category")?;
        let mut state = self.state.write().await;
        if state.categories.values().any(|c| c.name == name) {
            return Err(AppError::conflict(format!("Category '{name}' already exists")));
        }
        let category = Category {
            id: state.next_category_id,
            name: name.to_string(),
        };
        state.next_category_id += 1;
        state.categories.insert(category.id, category.clone());
        Ok(category)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use freezo_core::error::ErrorKind;

    fn new_item(freezer_id: i64, weight: Option<&str>) -> NewItem {
        NewItem {
            name: "Pork".to_string(),
            category_id: 1,
            freezer_id,
            weight: weight.map(str::to_string),
            frozen_date: None,
        }
    }

    #[tokio::test]
    async fn test_ids_ascend_in_creation_order() {
        let store = MemoryRecordStore::new();
        let freezer = store.create_freezer("Chest").await.unwrap();
        let created = store
            .create_items_batch(&[
                new_item(freezer.id, Some("500g")),
                new_item(freezer.id, Some("700g")),
                new_item(freezer.id, Some("500g")),
            ])
            .await
            .unwrap();

        let ids: Vec<i64> = store.list_items().await.unwrap().iter().map(|i| i.id).collect();
        assert_eq!(ids, created.iter().map(|i| i.id).collect::<Vec<_>>());
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn test_batch_with_unknown_freezer_creates_nothing() {
        let store = MemoryRecordStore::new();
        let freezer = store.create_freezer("Chest").await.unwrap();
        let err = store
            .create_items_batch(&[new_item(freezer.id, None), new_item(7, None)])
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert!(store.list_items().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_consume_stale_ids_keeps_records() {
        let store = MemoryRecordStore::new();
        let freezer = store.create_freezer("Chest").await.unwrap();
        let created = store
            .create_items_batch(&[new_item(freezer.id, None), new_item(freezer.id, None)])
            .await
            .unwrap();

        let err = store
            .consume_items_batch(&[created[0].id, created[1].id, 50])
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InsufficientQuantity);
        assert_eq!(err.message, "Requested 3 items but only 2 available");
        assert_eq!(store.list_items().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_freezer_delete_guard() {
        let store = MemoryRecordStore::new();
        let chest = store.create_freezer("Chest").await.unwrap();
        let upright = store.create_freezer("Upright").await.unwrap();
        let created = store
            .create_items_batch(&[new_item(chest.id, None)])
            .await
            .unwrap();

        let err = store.delete_freezer(chest.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);

        store.move_items(&[created[0].id], upright.id).await.unwrap();
        store.delete_freezer(chest.id).await.unwrap();
        assert_eq!(store.list_freezers().await.unwrap(), vec![upright]);
    }

    #[tokio::test]
    async fn test_duplicate_ids_rejected() {
        let store = MemoryRecordStore::new();
        let chest = store.create_freezer("Chest").await.unwrap();
        let created = store
            .create_items_batch(&[new_item(chest.id, None)])
            .await
            .unwrap();
        let id = created[0].id;

        let err = store.consume_items_batch(&[id, id]).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(store.list_items().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_item_names_stored_trimmed() {
        let store = MemoryRecordStore::new();
        let freezer = store.create_freezer("Chest").await.unwrap();
        let mut padded = new_item(freezer.id, None);
        padded.name = " Pork ".to_string();
        let created = store.create_items_batch(&[padded]).await.unwrap();
        assert_eq!(created[0].name, "Pork");

        let rename = ItemUpdate {
            name: Some("Beef  ".to_string()),
            ..ItemUpdate::default()
        };
        store.update_item(created[0].id, &rename).await.unwrap();
        assert_eq!(store.list_items().await.unwrap()[0].name, "Beef");
    }
}
