//! Convenience result type alias for SeatDraw.

use crate::error::AppError;

/// A specialized `Result` type for SeatDraw operations.
pub type AppResult<T> = Result<T, AppError>;
