//! The authoritative seat pool.

use serde::{Deserialize, Serialize};

use seatdraw_core::types::{Seat, SeatId, Side};

use crate::generator::generate;

/// Ordered seats of one configured count, tagged with a generation.
///
/// The owner bumps the generation every time it replaces the pool so a
/// draw started against an older pool can tell its target is gone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatPool {
    generation: u64,
    seats: Vec<Seat>,
}

impl SeatPool {
    /// Generate a fresh pool of `count` seats.
    pub fn generate(count: u32, generation: u64) -> Self {
        Self {
            generation,
            seats: generate(count),
        }
    }

    /// Wrap an existing seat list, e.g. one restored from the cache.
    pub fn from_seats(generation: u64, seats: Vec<Seat>) -> Self {
        Self { generation, seats }
    }

    /// Generation tag of this pool.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// All seats in generation order.
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Number of seats.
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    /// Whether the pool has no seats at all.
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Look up a seat by id.
    pub fn seat(&self, id: SeatId) -> Option<&Seat> {
        self.seats.iter().find(|s| s.id == id)
    }

    /// Free seats in generation order.
    pub fn free_seats(&self) -> impl Iterator<Item = &Seat> {
        self.seats.iter().filter(|s| s.is_free())
    }

    /// Number of seats not yet drawn.
    pub fn free_count(&self) -> usize {
        self.free_seats().count()
    }

    /// Number of seats already drawn.
    pub fn assigned_count(&self) -> usize {
        self.seats.len() - self.free_count()
    }

    /// Seats of one side in layout order.
    pub fn side(&self, side: Side) -> impl Iterator<Item = &Seat> {
        self.seats.iter().filter(move |s| s.side == side)
    }

    /// Check the layout invariants of a generated pool.
    ///
    /// Ids must be exactly `1..=len` in order, the top side must hold
    /// `ceil(len / 2)` seats placed before the bottom side, and
    /// `index_on_side` must count up from 0 within each side.
    pub fn is_consistent(&self) -> bool {
        let Ok(len) = u32::try_from(self.seats.len()) else {
            return false;
        };
        let top_count = len.div_ceil(2);

        self.seats.iter().zip(1u32..).all(|(seat, id)| {
            let (side, index) = if id <= top_count {
                (Side::Top, id - 1)
            } else {
                (Side::Bottom, id - 1 - top_count)
            };
            seat.id.get() == id && seat.side == side && seat.index_on_side == index
        })
    }

    /// Mark a seat assigned and return a copy of it.
    ///
    /// Returns `None` when no seat with `id` exists in this pool.
    pub(crate) fn mark_assigned(&mut self, id: SeatId) -> Option<Seat> {
        let seat = self.seats.iter_mut().find(|s| s.id == id)?;
        seat.assigned = true;
        Some(seat.clone())
    }
}
