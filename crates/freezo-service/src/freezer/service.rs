//! Freezer CRUD operations.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use freezo_core::error::AppError;
use freezo_core::result::AppResult;
use freezo_database::RecordStore;
use freezo_entity::freezer::Freezer;

/// A freezer with the number of records it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FreezerSummary {
    /// The freezer.
    #[serde(flatten)]
    pub freezer: Freezer,
    /// Item records assigned to it.
    pub item_count: usize,
}

/// Manages freezers.
#[derive(Debug, Clone)]
pub struct FreezerService {
    /// Record store.
    store: Arc<dyn RecordStore>,
}

impl FreezerService {
    /// Creates a new freezer service.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Lists freezers in creation order.
    pub async fn list(&self) -> AppResult<Vec<Freezer>> {
        self.store.list_freezers().await
    }

    /// Gets a freezer by id.
    pub async fn get(&self, id: i64) -> AppResult<Freezer> {
        self.store
            .find_freezer(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Freezer {id} not found")))
    }

    /// Creates a freezer with a trimmed, non-empty name.
    pub async fn create(&self, name: &str) -> AppResult<Freezer> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Freezer name must not be empty"));
        }
        let freezer = self.store.create_freezer(name).await?;
        info!(freezer_id = freezer.id, name = %freezer.name, "Freezer added");
        Ok(freezer)
    }

    /// Deletes an empty freezer. The store refuses non-empty ones.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.store.delete_freezer(id).await?;
        info!(freezer_id = id, "Freezer removed");
        Ok(())
    }

    /// Every freezer with its item count.
    pub async fn item_counts(&self) -> AppResult<Vec<FreezerSummary>> {
        let (freezers, items) =
            tokio::try_join!(self.store.list_freezers(), self.store.list_items())?;

        let mut counts: HashMap<i64, usize> = HashMap::new();
        for item in &items {
            *counts.entry(item.freezer_id).or_default() += 1;
        }

        Ok(freezers
            .into_iter()
            .map(|freezer| FreezerSummary {
                item_count: counts.get(&freezer.id).copied().unwrap_or(0),
                freezer,
            })
            .collect())
    }
}
