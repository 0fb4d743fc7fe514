//! The animated random draw.
//!
//! A draw snapshots the free seats, picks a tick count, and then advances
//! one highlight per tick with a growing delay. The seat highlighted on the
//! last tick is the one committed.

pub mod engine;
pub mod selection;
pub mod session;
pub mod tuning;

pub use engine::{DrawEngine, DrawHandle, EngineState};
pub use session::{DrawSession, Tick, TickStep};
pub use tuning::DrawTuning;
