//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section, and every section has defaults so an empty configuration is
//! valid.

pub mod board;
pub mod cache;
pub mod draw;
pub mod logging;
pub mod pool;

use serde::{Deserialize, Serialize};

pub use self::board::BoardConfig;
pub use self::cache::{CacheConfig, FileCacheConfig, MemoryCacheConfig};
pub use self::draw::{DrawConfig, MAX_DRAW_TICKS, SelectionMode};
pub use self::logging::LoggingConfig;
pub use self::pool::PoolConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Seat count defaults and accepted range.
    #[serde(default)]
    pub pool: PoolConfig,
    /// Spin animation tuning.
    #[serde(default)]
    pub draw: DrawConfig,
    /// Snapshot cache settings.
    #[serde(default)]
    pub cache: CacheConfig,
    /// Board task settings.
    #[serde(default)]
    pub board: BoardConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `SEATDRAW__`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("SEATDRAW")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::from_builder(builder)
    }

    /// Parse configuration from an in-memory TOML document.
    pub fn from_toml_str(toml: &str) -> Result<Self, AppError> {
        let builder = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml));

        Self::from_builder(builder)
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, AppError> {
        let config = builder
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let parsed: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        parsed.validate()?;
        Ok(parsed)
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        let pool = &self.pool;
        if pool.min_seat_count > pool.max_seat_count {
            return Err(AppError::configuration(format!(
                "pool.min_seat_count ({}) exceeds pool.max_seat_count ({})",
                pool.min_seat_count, pool.max_seat_count
            )));
        }
        if !(pool.min_seat_count..=pool.max_seat_count).contains(&pool.default_seat_count) {
            return Err(AppError::configuration(format!(
                "pool.default_seat_count ({}) is outside {}..={}",
                pool.default_seat_count, pool.min_seat_count, pool.max_seat_count
            )));
        }

        let draw = &self.draw;
        if draw.min_ticks == 0 {
            return Err(AppError::configuration("draw.min_ticks must be at least 1"));
        }
        if draw.min_ticks.saturating_add(draw.tick_span) > MAX_DRAW_TICKS {
            return Err(AppError::configuration(format!(
                "draw.min_ticks + draw.tick_span ({} + {}) exceeds {MAX_DRAW_TICKS}",
                draw.min_ticks, draw.tick_span
            )));
        }
        if draw.base_delay_ms == 0 {
            return Err(AppError::configuration("draw.base_delay_ms must be positive"));
        }
        if !draw.growth_factor.is_finite() || draw.growth_factor < 1.0 {
            return Err(AppError::configuration(format!(
                "draw.growth_factor ({}) must be a finite value >= 1.0",
                draw.growth_factor
            )));
        }

        if self.board.event_buffer == 0 || self.board.command_buffer == 0 {
            return Err(AppError::configuration("board channel buffers must be non-zero"));
        }

        Ok(())
    }
}
