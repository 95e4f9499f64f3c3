//! Inventory use cases: grouped views, intake, and planned mutations.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use freezo_core::config::InventoryConfig;
use freezo_core::error::AppError;
use freezo_core::result::AppResult;
use freezo_database::RecordStore;
use freezo_entity::category::Category;
use freezo_entity::freezer::Freezer;
use freezo_entity::inventory::{DateKey, ItemGroup};
use freezo_entity::item::{Item, ItemUpdate, NewItem};

use super::grouping::{filter_by_freezer, find_group, group};
use super::suggestions::suggest_names;
use crate::intake::{AddItemsForm, build_batch, check_batch_size};
use crate::planner::{ConsumePlan, MovePlan};

/// Freezers and items read together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// All freezers, in creation order.
    pub freezers: Vec<Freezer>,
    /// All items, ascending id.
    pub items: Vec<Item>,
}

impl Snapshot {
    /// Grouped view, optionally narrowed to one freezer.
    pub fn grouped(&self, freezer_id: Option<i64>) -> Vec<ItemGroup> {
        group(&filter_by_freezer(&self.items, freezer_id), &self.freezers)
    }
}

/// Orchestrates the record store, grouping engine, and planners.
#[derive(Debug, Clone)]
pub struct InventoryService {
    /// Record store.
    store: Arc<dyn RecordStore>,
    /// Intake and lookup settings.
    config: InventoryConfig,
}

impl InventoryService {
    /// Creates a new inventory service.
    pub fn new(store: Arc<dyn RecordStore>, config: InventoryConfig) -> Self {
        Self { store, config }
    }

    /// Load freezers and items concurrently.
    pub async fn snapshot(&self) -> AppResult<Snapshot> {
        let (freezers, items) =
            tokio::try_join!(self.store.list_freezers(), self.store.list_items())?;
        Ok(Snapshot { freezers, items })
    }

    /// Grouped view of the current inventory.
    pub async fn grouped(&self, freezer_id: Option<i64>) -> AppResult<Vec<ItemGroup>> {
        Ok(self.snapshot().await?.grouped(freezer_id))
    }

    /// Lists all item records.
    pub async fn list_items(&self) -> AppResult<Vec<Item>> {
        self.store.list_items().await
    }

    /// Validate the intake form and create its batch.
    pub async fn add_items(&self, form: &AddItemsForm) -> AppResult<Vec<Item>> {
        let batch = build_batch(form, &self.config)?;
        let created = self.store.create_items_batch(&batch).await?;
        info!(
            name = %form.name.trim(),
            count = created.len(),
            freezer_id = ?form.freezer_id,
            "Items added"
        );
        Ok(created)
    }

    /// Create records exactly as given.
    pub async fn create_items(&self, batch: &[NewItem]) -> AppResult<Vec<Item>> {
        check_batch_size(batch.len(), self.config.max_batch_size)?;
        let created = self.store.create_items_batch(batch).await?;
        info!(count = created.len(), "Items created");
        Ok(created)
    }

    /// Partially update one record.
    pub async fn update_item(&self, id: i64, update: &ItemUpdate) -> AppResult<Item> {
        self.store.update_item(id, update).await
    }

    /// Delete one record.
    pub async fn delete_item(&self, id: i64) -> AppResult<()> {
        self.store.delete_item(id).await?;
        info!(item_id = id, "Item deleted");
        Ok(())
    }

    /// Existing names matching `query`.
    pub async fn suggestions(&self, query: &str) -> AppResult<Vec<String>> {
        let items = self.store.list_items().await?;
        Ok(suggest_names(&items, query.trim(), self.config.suggestion_limit))
    }

    /// Lists all categories.
    pub async fn categories(&self) -> AppResult<Vec<Category>> {
        self.store.list_categories().await
    }

    /// Creates a category.
    pub async fn create_category(&self, name: &str) -> AppResult<Category> {
        self.store.create_category(name).await
    }

    /// Open a consume plan on the named date/freezer group.
    pub async fn open_consume(
        &self,
        name: &str,
        date: &DateKey,
        freezer_id: i64,
    ) -> AppResult<ConsumePlan> {
        let groups = self.grouped(None).await?;
        let item_group = require_group(&groups, name)?;
        let date_group = item_group
            .date_group(date, freezer_id)
            .ok_or_else(|| missing_date_group(name, date, freezer_id))?;
        ConsumePlan::new(name, date_group)
    }

    /// Open a move plan on the named date/freezer group.
    pub async fn open_move(
        &self,
        name: &str,
        date: &DateKey,
        freezer_id: i64,
    ) -> AppResult<MovePlan> {
        let snapshot = self.snapshot().await?;
        let groups = snapshot.grouped(None);
        let item_group = require_group(&groups, name)?;
        let date_group = item_group
            .date_group(date, freezer_id)
            .ok_or_else(|| missing_date_group(name, date, freezer_id))?;
        MovePlan::batch(name, date_group, &snapshot.freezers)
    }

    /// Open a plan moving every record of an item name.
    pub async fn open_move_all(&self, name: &str) -> AppResult<MovePlan> {
        let snapshot = self.snapshot().await?;
        let groups = snapshot.grouped(None);
        MovePlan::all(require_group(&groups, name)?, &snapshot.freezers)
    }

    /// Submit a consume plan against fresh store state.
    ///
    /// On failure the plan is untouched and can be resubmitted.
    pub async fn consume(&self, plan: &ConsumePlan) -> AppResult<usize> {
        let live = self.store.list_items().await?;
        let ids = plan.target_ids(&live)?;
        let count = self.store.consume_items_batch(&ids).await?;
        info!(
            name = %plan.name(),
            freezer_id = plan.freezer_id(),
            count,
            item_ids = ?ids,
            "Items consumed"
        );
        Ok(count)
    }

    /// Submit a move plan against fresh store state.
    pub async fn relocate(&self, plan: &MovePlan) -> AppResult<usize> {
        let live = self.store.list_items().await?;
        let (ids, dest) = plan.targets(&live)?;
        let count = self.store.move_items(&ids, dest).await?;
        info!(
            name = %plan.name(),
            freezer_id = dest,
            count,
            item_ids = ?ids,
            "Items moved"
        );
        Ok(count)
    }

    /// Delete records by id, all or nothing.
    pub async fn consume_ids(&self, ids: &[i64]) -> AppResult<usize> {
        let count = self.store.consume_items_batch(ids).await?;
        info!(count, item_ids = ?ids, "Items consumed");
        Ok(count)
    }

    /// Reassign records by id, all or nothing.
    pub async fn move_ids(&self, ids: &[i64], dest_freezer_id: i64) -> AppResult<usize> {
        let count = self.store.move_items(ids, dest_freezer_id).await?;
        info!(count, freezer_id = dest_freezer_id, item_ids = ?ids, "Items moved");
        Ok(count)
    }
}

fn require_group<'a>(groups: &'a [ItemGroup], name: &str) -> AppResult<&'a ItemGroup> {
    find_group(groups, name).ok_or_else(|| AppError::not_found(format!("No items named '{name}'")))
}

fn missing_date_group(name: &str, date: &DateKey, freezer_id: i64) -> AppError {
    AppError::not_found(format!(
        "No '{name}' frozen on {date} in freezer {freezer_id}"
    ))
}
