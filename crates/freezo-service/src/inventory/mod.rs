//! Inventory views and the service that drives them.

pub mod batch;
pub mod grouping;
pub mod service;
pub mod suggestions;

pub use batch::{WeightOption, distinct_weights, select_candidates, take_n, weight_options};
pub use grouping::{filter_by_freezer, find_group, group};
pub use service::{InventoryService, Snapshot};
pub use suggestions::suggest_names;
