//! Convenience result type alias for Freezo.

use crate::error::AppError;

/// A specialized `Result` type for Freezo operations.
pub type AppResult<T> = Result<T, AppError>;
