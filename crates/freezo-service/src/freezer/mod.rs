//! Freezer management.

pub mod service;

pub use service::{FreezerService, FreezerSummary};
