//! Seat board events.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorKind};
use crate::types::{Seat, SeatId};

/// Why a draw request produced no draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawFailure {
    /// Every seat is already assigned.
    NoAvailableSeats,
    /// Another draw is still animating.
    DrawInProgress,
}

impl DrawFailure {
    /// Map an engine error onto a failure reason, if it is one.
    pub fn from_error(err: &AppError) -> Option<Self> {
        match err.kind {
            ErrorKind::NoAvailableSeats => Some(Self::NoAvailableSeats),
            ErrorKind::DrawInProgress => Some(Self::DrawInProgress),
            _ => None,
        }
    }
}

impl fmt::Display for DrawFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAvailableSeats => write!(f, "NoAvailableSeats"),
            Self::DrawInProgress => write!(f, "DrawInProgress"),
        }
    }
}

/// Events emitted while the board changes state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BoardEvent {
    /// The pool was replaced (count change, reset, or restore).
    PoolChanged {
        /// Generation number of the new pool.
        generation: u64,
        /// Configured seat count.
        seat_count: u32,
        /// The full seat list in generation order.
        seats: Vec<Seat>,
    },
    /// A draw began animating.
    DrawStarted {
        /// Number of ticks the draw will run.
        total_ticks: u32,
        /// Number of free seats the draw walks over.
        candidates: usize,
    },
    /// One animation step highlighted a candidate seat.
    Highlight {
        /// The highlighted seat.
        seat_id: SeatId,
    },
    /// A draw settled and the seat was marked assigned.
    DrawCompleted {
        /// The committed seat, already marked assigned.
        seat: Seat,
    },
    /// A draw request was refused.
    DrawFailed {
        /// Why the draw did not start.
        reason: DrawFailure,
    },
}
