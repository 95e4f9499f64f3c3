//! HTTP request handlers, one module per resource.

pub mod category;
pub mod freezer;
pub mod health;
pub mod inventory;
pub mod item;
