//! # seatdraw-engine
//!
//! The two pieces of SeatDraw with real logic:
//!
//! - **generator**: builds the seats for a requested count, split over the
//!   two table sides
//! - **draw**: the spin state machine that walks the free seats with an
//!   easing delay and commits exactly one of them
//!
//! Nothing here sleeps or spawns; the board drives [`DrawEngine::tick`]
//! from its own timer.

pub mod draw;
pub mod generator;
pub mod pool;

pub use draw::{DrawEngine, DrawHandle, DrawTuning, EngineState, Tick, TickStep};
pub use generator::generate;
pub use pool::SeatPool;
