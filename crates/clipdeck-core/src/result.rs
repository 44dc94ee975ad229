//! Convenience result type alias for ClipDeck.

use crate::error::AppError;

/// A specialized `Result` type for ClipDeck operations.
pub type AppResult<T> = Result<T, AppError>;
