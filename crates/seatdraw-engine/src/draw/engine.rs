//! Idle/running state machine around [`DrawSession`].

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use seatdraw_core::config::DrawConfig;
use seatdraw_core::error::AppError;
use seatdraw_core::result::AppResult;
use seatdraw_core::types::Seat;

use super::selection::plan_ticks;
use super::session::{DrawSession, Tick};
use super::tuning::DrawTuning;
use crate::generator::generate;
use crate::pool::SeatPool;

/// Whether a draw is animating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No draw in flight.
    Idle,
    /// A draw is ticking.
    Running,
}

/// Summary of a draw that just started.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawHandle {
    /// Ticks the draw will run, the terminal commit included.
    pub total_ticks: u32,
    /// Free seats the cursor walks over.
    pub candidates: usize,
    /// Generation of the pool the draw will commit into.
    pub pool_generation: u64,
    /// Time from the first tick to the commit.
    pub estimated_duration: Duration,
}

/// Draw engine holding at most one running session.
#[derive(Debug)]
pub struct DrawEngine {
    tuning: DrawTuning,
    rng: StdRng,
    session: Option<DrawSession>,
}

impl DrawEngine {
    /// Create an engine seeded from the OS.
    pub fn new(tuning: DrawTuning) -> Self {
        Self::with_rng(tuning, StdRng::from_os_rng())
    }

    /// Create an engine with a fixed seed for reproducible draws.
    pub fn seeded(tuning: DrawTuning, seed: u64) -> Self {
        Self::with_rng(tuning, StdRng::seed_from_u64(seed))
    }

    /// Create an engine from configuration, honouring `draw.seed`.
    pub fn from_config(config: &DrawConfig) -> Self {
        let tuning = DrawTuning::from(config);
        match config.seed {
            Some(seed) => Self::seeded(tuning, seed),
            None => Self::new(tuning),
        }
    }

    fn with_rng(tuning: DrawTuning, rng: StdRng) -> Self {
        Self {
            tuning,
            rng,
            session: None,
        }
    }

    /// Current state.
    pub fn state(&self) -> EngineState {
        if self.session.is_some() {
            EngineState::Running
        } else {
            EngineState::Idle
        }
    }

    /// Whether a draw is in flight.
    pub fn is_running(&self) -> bool {
        self.session.is_some()
    }

    /// The in-flight session, if any.
    pub fn session(&self) -> Option<&DrawSession> {
        self.session.as_ref()
    }

    /// Start a draw over the free seats of `pool`.
    ///
    /// Fails with `NoAvailableSeats` when every seat is assigned and with
    /// `DrawInProgress` while another draw runs. Neither failure changes
    /// any state. The first tick is due immediately.
    pub fn start_draw(&mut self, pool: &SeatPool) -> AppResult<DrawHandle> {
        if self.session.is_some() {
            return Err(AppError::draw_in_progress());
        }

        let candidates: Vec<Seat> = pool.free_seats().cloned().collect();
        if candidates.is_empty() {
            debug!(seats = pool.len(), "Draw refused, no free seats");
            return Err(AppError::no_available_seats());
        }

        let total_ticks = plan_ticks(&self.tuning, candidates.len(), &mut self.rng);
        let handle = DrawHandle {
            total_ticks,
            candidates: candidates.len(),
            pool_generation: pool.generation(),
            estimated_duration: self.tuning.total_duration(total_ticks),
        };

        info!(
            total_ticks,
            candidates = handle.candidates,
            generation = handle.pool_generation,
            "Draw started"
        );

        self.session = Some(DrawSession::new(
            candidates,
            total_ticks,
            self.tuning.base_delay,
            self.tuning.growth_factor,
            pool.generation(),
        ));

        Ok(handle)
    }

    /// Run one tick of the in-flight draw against `pool`.
    ///
    /// Returns `None` while idle. The terminal tick returns the engine to
    /// idle.
    pub fn tick(&mut self, pool: &mut SeatPool) -> Option<Tick> {
        let session = self.session.as_mut()?;
        let tick = session.advance(pool);
        if tick.is_terminal() {
            self.session = None;
        }
        Some(tick)
    }

    /// Drop any in-flight draw and generate a fresh seat list for `count`.
    pub fn reset(&mut self, count: u32) -> Vec<Seat> {
        if let Some(session) = self.session.take() {
            info!(
                remaining_ticks = session.remaining_ticks(),
                "Discarding in-flight draw on reset"
            );
        }
        generate(count)
    }

    /// Drop any in-flight draw without touching the pool.
    pub fn abandon(&mut self) -> bool {
        self.session.take().is_some()
    }
}
