//! Derived inventory views.
//!
//! These structures are recomputed from the flat item list after every
//! load or mutation. They have no identity of their own and are never
//! persisted.

pub mod date_key;
pub mod view;

pub use date_key::{DateKey, NO_DATE};
pub use view::{DateGroup, ItemGroup};
