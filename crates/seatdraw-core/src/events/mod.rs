//! Events published by the board to its subscribers.
//!
//! Events are broadcast by the board task and consumed by whatever renders
//! the seat plan: the host binary logs them, a UI would redraw from them.

pub mod board;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use board::{BoardEvent, DrawFailure};

/// Wrapper for board events with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Unique event ID.
    pub id: Uuid,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// Monotonic position of the event in the board's output stream.
    pub sequence: u64,
    /// The event payload.
    pub payload: BoardEvent,
}

impl EventEnvelope {
    /// Create a new event envelope.
    pub fn new(sequence: u64, payload: BoardEvent) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            sequence,
            payload,
        }
    }
}
