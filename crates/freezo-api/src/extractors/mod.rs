//! Custom Axum extractors.

pub mod json;

pub use json::{JsonBody, ValidatedJson};
