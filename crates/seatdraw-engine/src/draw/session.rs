//! A single in-flight draw.

use std::time::Duration;

use seatdraw_core::types::{Seat, SeatId};

use crate::draw::tuning::grow_delay;
use crate::pool::SeatPool;

/// What a tick did after highlighting its seat.
#[derive(Debug, Clone, PartialEq)]
pub enum TickStep {
    /// More ticks follow; the next one is due after `next_delay`.
    Continue {
        /// Wait before the next tick.
        next_delay: Duration,
    },
    /// Terminal tick: the highlighted seat is now assigned.
    Committed(Seat),
    /// Terminal tick against a pool that has been replaced since the draw
    /// started. Nothing was assigned.
    Discarded,
}

/// Outcome of one animation step.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Seat highlighted by this tick.
    pub highlighted: SeatId,
    /// Whether the draw continues, committed, or was discarded.
    pub step: TickStep,
}

impl Tick {
    /// Whether this tick ended the draw.
    pub fn is_terminal(&self) -> bool {
        !matches!(self.step, TickStep::Continue { .. })
    }
}

/// State of a running draw.
///
/// The candidate list is a private copy taken at start; later changes to
/// the pool do not move the cursor.
#[derive(Debug, Clone)]
pub struct DrawSession {
    candidate_pool: Vec<Seat>,
    cursor: usize,
    remaining_ticks: u32,
    total_ticks: u32,
    current_delay: Duration,
    growth_factor: f64,
    pool_generation: u64,
    result: Option<Seat>,
}

impl DrawSession {
    pub(crate) fn new(
        candidate_pool: Vec<Seat>,
        total_ticks: u32,
        base_delay: Duration,
        growth_factor: f64,
        pool_generation: u64,
    ) -> Self {
        debug_assert!(!candidate_pool.is_empty());
        debug_assert!(total_ticks > 0);
        Self {
            candidate_pool,
            cursor: 0,
            remaining_ticks: total_ticks,
            total_ticks,
            current_delay: base_delay,
            growth_factor,
            pool_generation,
            result: None,
        }
    }

    /// Ticks still to run, including the terminal one.
    pub fn remaining_ticks(&self) -> u32 {
        self.remaining_ticks
    }

    /// Ticks the draw runs in total.
    pub fn total_ticks(&self) -> u32 {
        self.total_ticks
    }

    /// Delay that will follow the next non-terminal tick.
    pub fn current_delay(&self) -> Duration {
        self.current_delay
    }

    /// Seat committed by the terminal tick, once it has run.
    pub fn result(&self) -> Option<&Seat> {
        self.result.as_ref()
    }

    /// Whether the terminal tick has run.
    pub fn is_finished(&self) -> bool {
        self.remaining_ticks == 0
    }

    /// Seat the cursor currently points at.
    pub fn current_seat(&self) -> &Seat {
        &self.candidate_pool[self.cursor % self.candidate_pool.len()]
    }

    /// Advance one tick, committing into `pool` on the last one.
    pub(crate) fn advance(&mut self, pool: &mut SeatPool) -> Tick {
        let seat = self.current_seat().clone();
        self.cursor += 1;
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);

        if self.remaining_ticks > 0 {
            let next_delay = self.current_delay;
            self.current_delay = grow_delay(self.current_delay, self.growth_factor);
            return Tick {
                highlighted: seat.id,
                step: TickStep::Continue { next_delay },
            };
        }

        if pool.generation() != self.pool_generation {
            tracing::debug!(
                seat_id = %seat.id,
                session_generation = self.pool_generation,
                pool_generation = pool.generation(),
                "Pool replaced during draw, dropping commit"
            );
            return Tick {
                highlighted: seat.id,
                step: TickStep::Discarded,
            };
        }

        match pool.mark_assigned(seat.id) {
            Some(committed) => {
                self.result = Some(committed.clone());
                Tick {
                    highlighted: seat.id,
                    step: TickStep::Committed(committed),
                }
            }
            None => {
                tracing::warn!(seat_id = %seat.id, "Drawn seat missing from pool");
                Tick {
                    highlighted: seat.id,
                    step: TickStep::Discarded,
                }
            }
        }
    }
}
