//! Core type definitions used across the SeatDraw workspace.

pub mod seat;

pub use seat::{Seat, SeatId, Side};
