//! Item domain entities.

pub mod model;

pub use model::{Item, ItemUpdate, NO_WEIGHT_LABEL, NewItem};
