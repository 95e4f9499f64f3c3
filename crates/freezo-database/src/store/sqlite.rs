//! SQLite-backed record store.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::{debug, info, warn};

use freezo_core::error::AppError;
use freezo_core::result::AppResult;
use freezo_entity::category::Category;
use freezo_entity::freezer::Freezer;
use freezo_entity::item::{Item, ItemUpdate, NewItem};

use crate::connection::DatabasePool;
use crate::repositories::{CategoryRepository, FreezerRepository, ItemRepository, map_db_error};

use super::{RecordStore, require_ids, require_name, require_new_items};

/// Record store running each mutation in its own SQLite transaction.
#[derive(Debug, Clone)]
pub struct SqliteRecordStore {
    pool: SqlitePool,
    freezers: FreezerRepository,
    items: ItemRepository,
    categories: CategoryRepository,
}

impl SqliteRecordStore {
    /// Build a store over an existing pool. Migrations must already be applied.
    pub fn new(db: &DatabasePool) -> Self {
        let pool = db.pool().clone();
        Self {
            freezers: FreezerRepository::new(pool.clone()),
            items: ItemRepository::new(pool.clone()),
            categories: CategoryRepository::new(pool.clone()),
            pool,
        }
    }

    async fn begin(&self) -> AppResult<Transaction<'static, Sqlite>> {
        self.pool
            .begin()
            .await
            .map_err(|e| map_db_error("Failed to start transaction", e))
    }
}

async fn commit(tx: Transaction<'static, Sqlite>) -> AppResult<()> {
    tx.commit()
        .await
        .map_err(|e| map_db_error("Failed to commit transaction", e))
}

async fn rollback(tx: Transaction<'static, Sqlite>) -> AppResult<()> {
    tx.rollback()
        .await
        .map_err(|e| map_db_error("Failed to roll back transaction", e))
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    async fn list_freezers(&self) -> AppResult<Vec<Freezer>> {
        self.freezers.find_all().await
    }

    async fn find_freezer(&self, id: i64) -> AppResult<Option<Freezer>> {
        self.freezers.find_by_id(id).await
    }

    async fn create_freezer(&self, name: &str) -> AppResult<Freezer> {
        let name = require_name(name, "Freezer")?;
        let mut tx = self.begin().await?;
        let freezer = self.freezers.insert(&mut tx, name, Utc::now()).await?;
        commit(tx).await?;
        info!(freezer_id = freezer.id, name = %freezer.name, "Freezer created");
        Ok(freezer)
    }

    async fn delete_freezer(&self, id: i64) -> AppResult<()> {
        let mut tx = self.begin().await?;

        if !self.freezers.exists(&mut tx, id).await? {
            rollback(tx).await?;
            return Err(AppError::not_found(format!("Freezer {id} not found")));
        }

        let owned = self.items.count_by_freezer(&mut tx, id).await?;
        if owned > 0 {
            rollback(tx).await?;
            warn!(freezer_id = id, items = owned, "Refusing to delete non-empty freezer");
            return Err(AppError::conflict("Cannot delete freezer with items"));
        }

        self.freezers.delete(&mut tx, id).await?;
        commit(tx).await?;
        info!(freezer_id = id, "Freezer deleted");
        Ok(())
    }

    async fn list_items(&self) -> AppResult<Vec<Item>> {
        self.items.find_all().await
    }

    async fn create_items_batch(&self, items: &[NewItem]) -> AppResult<Vec<Item>> {
        let items = require_new_items(items)?;

        let now = Utc::now();
        let mut tx = self.begin().await?;
        let mut created = Vec::with_capacity(items.len());
        for data in &items {
            if !self.freezers.exists(&mut tx, data.freezer_id).await? {
                rollback(tx).await?;
                return Err(AppError::not_found(format!(
                    "Freezer {} not found",
                    data.freezer_id
                )));
            }
            // Any failure drops `tx`, which rolls the batch back.
            created.push(self.items.insert(&mut tx, data, now).await?);
        }
        commit(tx).await?;

        debug!(count = created.len(), "Items created");
        Ok(created)
    }

    async fn update_item(&self, id: i64, update: &ItemUpdate) -> AppResult<Item> {
        let mut tx = self.begin().await?;
        let Some(mut item) = self.items.find_by_id(&mut tx, id).await? else {
            rollback(tx).await?;
            return Err(AppError::not_found(format!("Item {id} not found")));
        };

        update.apply(&mut item);
        item.name = require_name(&item.name, "Item")?.to_string();
        if update.freezer_id.is_some() && !self.freezers.exists(&mut tx, item.freezer_id).await? {
            rollback(tx).await?;
            return Err(AppError::not_found(format!(
                "Freezer {} not found",
                item.freezer_id
            )));
        }
        item.updated_at = Utc::now();

        let updated = self.items.update(&mut tx, &item).await?;
        commit(tx).await?;
        debug!(item_id = id, "Item updated");
        Ok(updated)
    }

    async fn delete_item(&self, id: i64) -> AppResult<()> {
        let mut tx = self.begin().await?;
        if !self.items.delete(&mut tx, id).await? {
            rollback(tx).await?;
            return Err(AppError::not_found(format!("Item {id} not found")));
        }
        commit(tx).await?;
        debug!(item_id = id, "Item deleted");
        Ok(())
    }

    async fn consume_items_batch(&self, ids: &[i64]) -> AppResult<usize> {
        require_ids(ids, "No items to consume")?;

        let mut tx = self.begin().await?;
        let mut deleted = 0;
        for &id in ids {
            if self.items.delete(&mut tx, id).await? {
                deleted += 1;
            }
        }

        if deleted != ids.len() {
            rollback(tx).await?;
            warn!(requested = ids.len(), available = deleted, "Consume rejected, selection is stale");
            return Err(AppError::insufficient_quantity(ids.len(), deleted));
        }

        commit(tx).await?;
        debug!(count = deleted, item_ids = ?ids, "Items consumed");
        Ok(deleted)
    }

    async fn move_items(&self, ids: &[i64], dest_freezer_id: i64) -> AppResult<usize> {
        require_ids(ids, "No items to move")?;

        let now = Utc::now();
        let mut tx = self.begin().await?;
        if !self.freezers.exists(&mut tx, dest_freezer_id).await? {
            rollback(tx).await?;
            return Err(AppError::not_found(format!(
                "Freezer {dest_freezer_id} not found"
            )));
        }

        let mut moved = 0;
        for &id in ids {
            if self.items.reassign(&mut tx, id, dest_freezer_id, now).await? {
                moved += 1;
            }
        }

        if moved != ids.len() {
            rollback(tx).await?;
            warn!(requested = ids.len(), available = moved, "Move rejected, selection is stale");
            return Err(AppError::insufficient_quantity(ids.len(), moved));
        }

        commit(tx).await?;
        debug!(count = moved, freezer_id = dest_freezer_id, item_ids = ?ids, "Items moved");
        Ok(moved)
    }

    async fn list_categories(&self) -> AppResult<Vec<Category>> {
        self.categories.find_all().await
    }

    async fn create_category(&self, name: &str) -> AppResult<Category> {
        let name = require_name(name, "Category")?;
        let mut tx = self.begin().await?;
        let category = self.categories.insert(&mut tx, name).await?;
        commit(tx).await?;
        info!(category_id = category.id, name = %category.name, "Category created");
        Ok(category)
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| map_db_error("Health check failed", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migration::run_migrations;
    use freezo_core::error::ErrorKind;

    async fn store() -> SqliteRecordStore {
        let db = DatabasePool::in_memory().await.expect("in-memory pool");
        run_migrations(db.pool()).await.expect("migrations");
        SqliteRecordStore::new(&db)
    }

    fn new_item(name: &str, freezer_id: i64, weight: Option<&str>) -> NewItem {
        NewItem {
            name: name.to_string(),
            category_id: 1,
            freezer_id,
            weight: weight.map(str::to_string),
            frozen_date: Some("2024-03-01".to_string()),
        }
    }

    #[tokio::test]
    async fn test_default_category_is_seeded() {
        let store = store().await;
        let categories = store.list_categories().await.unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].id, 1);
        assert_eq!(categories[0].name, "Uncategorized");
    }

    #[tokio::test]
    async fn test_batch_create_keeps_empty_and_absent_weight_apart() {
        let store = store().await;
        let freezer = store.create_freezer("Chest").await.unwrap();
        let created = store
            .create_items_batch(&[
                new_item("Pork", freezer.id, None),
                new_item("Pork", freezer.id, Some("")),
            ])
            .await
            .unwrap();

        assert_eq!(created.len(), 2);
        let listed = store.list_items().await.unwrap();
        assert_eq!(listed[0].weight, None);
        assert_eq!(listed[1].weight.as_deref(), Some(""));
        assert!(listed[0].id < listed[1].id);
    }

    #[tokio::test]
    async fn test_batch_create_unknown_freezer_rolls_back() {
        let store = store().await;
        let freezer = store.create_freezer("Chest").await.unwrap();
        let err = store
            .create_items_batch(&[new_item("Pork", freezer.id, None), new_item("Pork", 99, None)])
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::NotFound);
        assert!(store.list_items().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_non_empty_freezer_conflicts() {
        let store = store().await;
        let freezer = store.create_freezer("Chest").await.unwrap();
        store
            .create_items_batch(&[new_item("Peas", freezer.id, None)])
            .await
            .unwrap();

        let err = store.delete_freezer(freezer.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(store.list_freezers().await.unwrap().len(), 1);

        let missing = store.delete_freezer(42).await.unwrap_err();
        assert_eq!(missing.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_consume_is_all_or_nothing() {
        let store = store().await;
        let freezer = store.create_freezer("Chest").await.unwrap();
        let created = store
            .create_items_batch(&[
                new_item("Pork", freezer.id, Some("500g")),
                new_item("Pork", freezer.id, Some("500g")),
            ])
            .await
            .unwrap();

        let err = store
            .consume_items_batch(&[created[0].id, 999])
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InsufficientQuantity);
        assert_eq!(store.list_items().await.unwrap().len(), 2);

        let deleted = store.consume_items_batch(&[created[0].id]).await.unwrap();
        assert_eq!(deleted, 1);
        let left = store.list_items().await.unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].id, created[1].id);
    }

    #[tokio::test]
    async fn test_move_only_changes_freezer() {
        let store = store().await;
        let chest = store.create_freezer("Chest").await.unwrap();
        let upright = store.create_freezer("Upright").await.unwrap();
        let created = store
            .create_items_batch(&[new_item("Beef", chest.id, Some("1kg"))])
            .await
            .unwrap();

        let moved = store.move_items(&[created[0].id], upright.id).await.unwrap();
        assert_eq!(moved, 1);

        let item = &store.list_items().await.unwrap()[0];
        assert_eq!(item.freezer_id, upright.id);
        assert_eq!(item.name, "Beef");
        assert_eq!(item.weight.as_deref(), Some("1kg"));
        assert_eq!(item.frozen_date.as_deref(), Some("2024-03-01"));
    }

    #[tokio::test]
    async fn test_move_validates_before_writing() {
        let store = store().await;
        let chest = store.create_freezer("Chest").await.unwrap();
        let created = store
            .create_items_batch(&[new_item("Beef", chest.id, None)])
            .await
            .unwrap();

        let empty = store.move_items(&[], chest.id).await.unwrap_err();
        assert_eq!(empty.message, "No items to move");

        let dest = store.move_items(&[created[0].id], 77).await.unwrap_err();
        assert_eq!(dest.kind, ErrorKind::NotFound);

        let upright = store.create_freezer("Upright").await.unwrap();
        let stale = store
            .move_items(&[created[0].id, 555], upright.id)
            .await
            .unwrap_err();
        assert_eq!(stale.kind, ErrorKind::InsufficientQuantity);
        assert_eq!(store.list_items().await.unwrap()[0].freezer_id, chest.id);
    }

    #[tokio::test]
    async fn test_update_item_clears_weight() {
        let store = store().await;
        let chest = store.create_freezer("Chest").await.unwrap();
        let created = store
            .create_items_batch(&[new_item("Beef", chest.id, Some("1kg"))])
            .await
            .unwrap();

        let update = ItemUpdate {
            weight: Some(None),
            ..ItemUpdate::default()
        };
        let updated = store.update_item(created[0].id, &update).await.unwrap();
        assert_eq!(updated.weight, None);
        assert_eq!(updated.name, "Beef");

        let err = store.update_item(404, &update).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_duplicate_category_conflicts() {
        let store = store().await;
        store.create_category("Meat").await.unwrap();
        let err = store.create_category("Meat").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_item_names_stored_trimmed() {
        let store = store().await;
        let chest = store.create_freezer("Chest").await.unwrap();
        let created = store
            .create_items_batch(&[new_item("Pork ", chest.id, None)])
            .await
            .unwrap();
        assert_eq!(created[0].name, "Pork");
        assert_eq!(store.list_items().await.unwrap()[0].name, "Pork");

        let rename = ItemUpdate {
            name: Some("  Pork Belly ".to_string()),
            ..ItemUpdate::default()
        };
        let updated = store.update_item(created[0].id, &rename).await.unwrap();
        assert_eq!(updated.name, "Pork Belly");
        assert_eq!(store.list_items().await.unwrap()[0].name, "Pork Belly");
    }
}
