//! Best-effort persistence of the board's seat count and seats.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use seatdraw_core::traits::cache::CacheProvider;
use seatdraw_core::types::Seat;

use crate::keys;
use crate::provider::CacheManager;

/// Persisted board state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Last configured seat count.
    pub seat_count: u32,
    /// Last seat list; empty when nothing usable was stored.
    pub seats: Vec<Seat>,
}

/// Reads and writes [`BoardSnapshot`]s without ever failing.
///
/// Missing or undecodable entries fall back to the configured default
/// seat count and an empty seat list. Write failures are logged and
/// dropped.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    cache: CacheManager,
    default_seat_count: u32,
}

impl SnapshotStore {
    /// Create a store over `cache`.
    pub fn new(cache: CacheManager, default_seat_count: u32) -> Self {
        Self {
            cache,
            default_seat_count,
        }
    }

    /// Load the last snapshot, or defaults.
    pub async fn load(&self) -> BoardSnapshot {
        let seat_count = match self.cache.get_json::<u32>(&keys::seat_count()).await {
            Ok(Some(count)) => count,
            Ok(None) => {
                debug!("No persisted seat count, using default");
                self.default_seat_count
            }
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable persisted seat count");
                self.default_seat_count
            }
        };

        let seats = match self.cache.get_json::<Vec<Seat>>(&keys::seats()).await {
            Ok(Some(seats)) => seats,
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable persisted seats");
                Vec::new()
            }
        };

        debug!(seat_count, seats = seats.len(), "Snapshot loaded");
        BoardSnapshot { seat_count, seats }
    }

    /// Persist a snapshot. Failures are logged and otherwise ignored.
    pub async fn save(&self, snapshot: &BoardSnapshot) {
        if let Err(e) = self
            .cache
            .set_json(&keys::seat_count(), &snapshot.seat_count)
            .await
        {
            warn!(error = %e, "Failed to persist seat count");
        }
        if let Err(e) = self.cache.set_json(&keys::seats(), &snapshot.seats).await {
            warn!(error = %e, "Failed to persist seats");
        }
    }
}
