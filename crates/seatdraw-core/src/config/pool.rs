//! Seat pool configuration.

use serde::{Deserialize, Serialize};

/// Seat count defaults and the range the board accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Seat count used when nothing was persisted.
    #[serde(default = "default_seat_count")]
    pub default_seat_count: u32,
    /// Smallest seat count accepted from input.
    #[serde(default = "default_min_seat_count")]
    pub min_seat_count: u32,
    /// Largest seat count accepted from input.
    #[serde(default = "default_max_seat_count")]
    pub max_seat_count: u32,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            default_seat_count: default_seat_count(),
            min_seat_count: default_min_seat_count(),
            max_seat_count: default_max_seat_count(),
        }
    }
}

impl PoolConfig {
    /// Parse raw seat count input.
    ///
    /// Non-numeric and negative input become 0; values above `u32::MAX`
    /// saturate.
    pub fn parse_seat_count(raw: &str) -> u32 {
        match raw.trim().parse::<i64>() {
            Ok(n) if n <= 0 => 0,
            Ok(n) => u32::try_from(n).unwrap_or(u32::MAX),
            Err(_) => 0,
        }
    }

    /// Clamp a seat count into `[min_seat_count, max_seat_count]`.
    pub fn clamp_seat_count(&self, count: u32) -> u32 {
        count.clamp(self.min_seat_count, self.max_seat_count)
    }
}

fn default_seat_count() -> u32 {
    20
}

fn default_min_seat_count() -> u32 {
    2
}

fn default_max_seat_count() -> u32 {
    100
}
