//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tokio::sync::broadcast;

use seatdraw_board::{Board, BoardHandle, BoardRuntime};
use seatdraw_cache::{CacheManager, SnapshotStore};
use seatdraw_core::config::AppConfig;
use seatdraw_core::events::{BoardEvent, EventEnvelope};
use seatdraw_core::types::{Seat, SeatId};

/// Test configuration: small pool, fast fixed-seed draws, file cache at `path`.
pub fn test_config(path: &Path) -> AppConfig {
    let toml = format!(
        r#"
        [pool]
        default_seat_count = 6

        [draw]
        min_ticks = 5
        tick_span = 5
        base_delay_ms = 1
        growth_factor = 1.0
        seed = 42

        [cache]
        provider = "file"

        [cache.file]
        path = "{}"
        "#,
        path.display()
    );
    AppConfig::from_toml_str(&toml).expect("Failed to parse test config")
}

/// A board backed by a JSON file in a temporary directory.
pub struct TestBoard {
    /// Keeps the directory alive for the test
    pub dir: tempfile::TempDir,
    /// Configuration the board was started with
    pub config: AppConfig,
    /// Running board
    pub runtime: BoardRuntime,
}

impl TestBoard {
    /// Start a board over a fresh cache file.
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    /// Start a board over a fresh cache file after adjusting the config.
    pub async fn with_config(adjust: impl FnOnce(&mut AppConfig)) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let mut config = test_config(&dir.path().join("seat-draw.json"));
        adjust(&mut config);
        let runtime = start(&config).await;
        Self {
            dir,
            config,
            runtime,
        }
    }

    /// Command handle.
    pub fn handle(&self) -> &BoardHandle {
        &self.runtime.handle
    }

    /// Path of the cache file.
    pub fn cache_path(&self) -> PathBuf {
        PathBuf::from(&self.config.cache.file.path)
    }

    /// Stop this board and start a new one over the same cache file.
    pub async fn restart(self) -> Self {
        let Self {
            dir,
            config,
            runtime,
        } = self;
        runtime
            .handle
            .shutdown()
            .await
            .expect("Failed to stop board");
        runtime.task.await.expect("Board task panicked");

        let runtime = start(&config).await;
        Self {
            dir,
            config,
            runtime,
        }
    }
}

/// Spawn a board for `config` over a file cache.
pub async fn start(config: &AppConfig) -> BoardRuntime {
    let cache = CacheManager::new(&config.cache).expect("Failed to init cache");
    let store = SnapshotStore::new(cache, config.pool.default_seat_count);
    Board::spawn(config, store).await
}

/// Wait for the next draw to finish, returning its highlights and seat.
pub async fn until_completed(
    events: &mut broadcast::Receiver<EventEnvelope>,
) -> (Vec<SeatId>, Seat) {
    let mut highlights = Vec::new();
    loop {
        let envelope = events.recv().await.expect("Event stream closed");
        match envelope.payload {
            BoardEvent::Highlight { seat_id } => highlights.push(seat_id),
            BoardEvent::DrawCompleted { seat } => return (highlights, seat),
            _ => {}
        }
    }
}

/// Run one draw to completion.
pub async fn draw_once(handle: &BoardHandle) -> Seat {
    let mut events = handle.subscribe();
    handle.draw().await.expect("Draw refused");
    until_completed(&mut events).await.1
}
