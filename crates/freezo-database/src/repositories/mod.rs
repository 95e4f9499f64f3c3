//! Repository implementations for all Freezo entities.
//!
//! Reads run against the pool. Writes take an explicit connection so the
//! record stores can compose several of them inside one transaction.

pub mod category;
pub mod freezer;
pub mod item;

pub use category::CategoryRepository;
pub use freezer::FreezerRepository;
pub use item::ItemRepository;

use freezo_core::error::{AppError, ErrorKind};

/// Map a sqlx error into an [`AppError`], recognising constraint violations.
pub(crate) fn map_db_error(context: &str, err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.is_foreign_key_violation() {
            return AppError::not_found(format!(
                "{context}: referenced freezer or category does not exist"
            ));
        }
        if db_err.is_unique_violation() {
            return AppError::conflict(format!("{context}: record already exists"));
        }
    }
    AppError::with_source(ErrorKind::Database, context.to_string(), err)
}
