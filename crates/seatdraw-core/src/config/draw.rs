//! Draw animation tuning.

use serde::{Deserialize, Serialize};

/// Upper bound on `min_ticks + tick_span`.
pub const MAX_DRAW_TICKS: u32 = 500;

/// How the final seat of a draw is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// The cursor walks the free seats and stops wherever the random tick
    /// count runs out.
    #[default]
    CursorWalk,
    /// A free seat is sampled uniformly and the tick count is stretched so
    /// the cursor stops on it.
    Uniform,
}

/// Spin animation parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawConfig {
    /// Fewest ticks a draw runs.
    #[serde(default = "default_min_ticks")]
    pub min_ticks: u32,
    /// Extra ticks added on top of `min_ticks`, chosen uniformly in `0..=tick_span`.
    #[serde(default = "default_tick_span")]
    pub tick_span: u32,
    /// Delay after the first tick, in milliseconds.
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,
    /// Multiplier applied to the delay after every tick.
    #[serde(default = "default_growth_factor")]
    pub growth_factor: f64,
    /// Final seat selection strategy.
    #[serde(default)]
    pub selection: SelectionMode,
    /// Fixed RNG seed for reproducible draws.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            min_ticks: default_min_ticks(),
            tick_span: default_tick_span(),
            base_delay_ms: default_base_delay_ms(),
            growth_factor: default_growth_factor(),
            selection: SelectionMode::default(),
            seed: None,
        }
    }
}

fn default_min_ticks() -> u32 {
    26
}

fn default_tick_span() -> u32 {
    16
}

fn default_base_delay_ms() -> u64 {
    40
}

fn default_growth_factor() -> f64 {
    1.08
}
