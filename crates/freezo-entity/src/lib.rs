//! # freezo-entity
//!
//! Domain entity models for Freezo. Every struct in this crate represents
//! a database table row or a derived view object. Database entities
//! additionally derive `sqlx::FromRow`.
//!
//! Quantity is never stored: one [`item::Item`] row is one physical unit,
//! and counts are always derived from the number of matching rows.

pub mod category;
pub mod freezer;
pub mod inventory;
pub mod item;
