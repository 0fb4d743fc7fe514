//! # seatdraw-core
//!
//! Core crate for SeatDraw. Contains the seat model, configuration schemas,
//! board events, the cache provider trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other SeatDraw crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
