//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use freezo_core::config::AppConfig;
use freezo_database::RecordStore;
use freezo_service::{FreezerService, InventoryService};

/// Shared application state, cloned into every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Loaded configuration.
    pub config: Arc<AppConfig>,
    /// Record store backing every service.
    pub store: Arc<dyn RecordStore>,
    /// Freezer management.
    pub freezer_service: Arc<FreezerService>,
    /// Inventory views, intake, and mutations.
    pub inventory_service: Arc<InventoryService>,
}

impl AppState {
    /// Wire the services around a record store.
    pub fn new(config: AppConfig, store: Arc<dyn RecordStore>) -> Self {
        let freezer_service = Arc::new(FreezerService::new(Arc::clone(&store)));
        let inventory_service = Arc::new(InventoryService::new(
            Arc::clone(&store),
            config.inventory.clone(),
        ));
        Self {
            config: Arc::new(config),
            store,
            freezer_service,
            inventory_service,
        }
    }
}
