//! Commands accepted by the board task.

use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;

use seatdraw_core::result::AppResult;
use seatdraw_core::types::Seat;
use seatdraw_engine::DrawHandle;

/// Point-in-time view of the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    /// Configured seat count.
    pub seat_count: u32,
    /// Generation of the current pool.
    pub generation: u64,
    /// Seats in generation order.
    pub seats: Vec<Seat>,
    /// Whether a draw is animating.
    pub drawing: bool,
}

impl BoardView {
    /// Number of seats not yet drawn.
    pub fn free_count(&self) -> usize {
        self.seats.iter().filter(|s| s.is_free()).count()
    }
}

/// A request sent to the board task.
#[derive(Debug)]
pub enum BoardCommand {
    /// Change the seat count. The value is clamped into the configured
    /// range; the reply carries the count actually applied.
    SetSeatCount {
        /// Requested count.
        count: u32,
        /// Receives the applied count.
        reply: oneshot::Sender<u32>,
    },
    /// Start a draw.
    Draw {
        /// Receives the started draw or the refusal.
        reply: oneshot::Sender<AppResult<DrawHandle>>,
    },
    /// Regenerate the pool at the current count, clearing assignments.
    Reset {
        /// Receives the new pool generation.
        reply: oneshot::Sender<u64>,
    },
    /// Read the current board state.
    Snapshot {
        /// Receives the view.
        reply: oneshot::Sender<BoardView>,
    },
    /// Stop the board task.
    Shutdown,
}
