//! # freezo-service
//!
//! Business logic for Freezo. The pure parts (grouping, batch selection,
//! planning, intake) work on plain slices; the services wrap them around a
//! [`freezo_database::RecordStore`].
//!
//! Services follow constructor injection: the store is provided at
//! construction time as an `Arc<dyn RecordStore>`.

pub mod freezer;
pub mod intake;
pub mod inventory;
pub mod planner;

pub use freezer::{FreezerService, FreezerSummary};
pub use intake::{AddItemsForm, WeightEntry, build_batch};
pub use inventory::{InventoryService, Snapshot};
pub use planner::{ConsumePlan, ConsumeStep, MovePlan, MoveScope, MoveStep, WeightSelection};
