//! Tick count and easing parameters.

use std::time::Duration;

use rand::Rng;

use seatdraw_core::config::{DrawConfig, SelectionMode};

/// Longest single gap between two ticks.
pub const MAX_TICK_DELAY: Duration = Duration::from_secs(3600);

/// Scale `delay` by `factor`, saturating at [`MAX_TICK_DELAY`].
pub(crate) fn grow_delay(delay: Duration, factor: f64) -> Duration {
    Duration::try_from_secs_f64(delay.as_secs_f64() * factor)
        .map_or(MAX_TICK_DELAY, |grown| grown.min(MAX_TICK_DELAY))
}

/// Resolved animation parameters for the draw engine.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawTuning {
    /// Fewest ticks a draw runs.
    pub min_ticks: u32,
    /// Random extra ticks, `0..=tick_span`.
    pub tick_span: u32,
    /// Delay after the first tick.
    pub base_delay: Duration,
    /// Multiplier applied to the delay after every tick.
    pub growth_factor: f64,
    /// Final seat selection strategy.
    pub selection: SelectionMode,
}

impl Default for DrawTuning {
    fn default() -> Self {
        Self::from(&DrawConfig::default())
    }
}

impl From<&DrawConfig> for DrawTuning {
    fn from(config: &DrawConfig) -> Self {
        Self {
            min_ticks: config.min_ticks.max(1),
            tick_span: config.tick_span,
            base_delay: Duration::from_millis(config.base_delay_ms),
            growth_factor: config.growth_factor,
            selection: config.selection,
        }
    }
}

impl DrawTuning {
    /// Largest tick count `sample_ticks` can return.
    pub fn max_ticks(&self) -> u32 {
        self.min_ticks.saturating_add(self.tick_span)
    }

    /// Sample a tick count uniformly from `min_ticks..=max_ticks`.
    pub fn sample_ticks<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.random_range(self.min_ticks..=self.max_ticks())
    }

    /// Delays between consecutive ticks of a draw with `ticks` ticks.
    ///
    /// Yields `ticks - 1` values: `base, base * g, base * g^2, ...`.
    pub fn delays(&self, ticks: u32) -> impl Iterator<Item = Duration> + '_ {
        let gaps = ticks.saturating_sub(1) as usize;
        let base = self.base_delay.min(MAX_TICK_DELAY);
        std::iter::successors(Some(base), |d| Some(grow_delay(*d, self.growth_factor))).take(gaps)
    }

    /// Wall time from the first to the last tick, saturating at `Duration::MAX`.
    pub fn total_duration(&self, ticks: u32) -> Duration {
        self.delays(ticks).fold(Duration::ZERO, Duration::saturating_add)
    }
}
