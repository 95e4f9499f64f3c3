//! Freezer domain entities.

pub mod model;

pub use model::{Freezer, freezer_name};
