//! Board task for SeatDraw.
//!
//! This crate provides:
//! - [`Board`], the single owner of the seat count and pool, running as one
//!   tokio task that serves commands and draw ticks in a single loop
//! - [`BoardHandle`], a cloneable command sender and event subscription point
//! - restore-on-start and persist-on-change through the snapshot store

pub mod board;
pub mod command;
pub mod handle;

pub use board::{Board, BoardRuntime};
pub use command::{BoardCommand, BoardView};
pub use handle::BoardHandle;
