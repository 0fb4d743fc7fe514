//! SeatDraw: random seat assignment for a two-sided table.
//!
//! Main entry point that wires the crates together and feeds stdin intents
//! to the board.

mod intent;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast;
use tracing_subscriber::{EnvFilter, fmt};

use seatdraw_board::{Board, BoardHandle, BoardView};
use seatdraw_cache::{CacheManager, SnapshotStore};
use seatdraw_core::config::AppConfig;
use seatdraw_core::error::AppError;
use seatdraw_core::events::{BoardEvent, EventEnvelope};
use seatdraw_core::traits::cache::CacheProvider;
use seatdraw_core::types::Side;

use crate::intent::Intent;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("SeatDraw error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from files and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("SEATDRAW_ENV").unwrap_or_else(|_| "development".to_string());

    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting SeatDraw v{}", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        "Initializing snapshot cache (provider: {})...",
        config.cache.provider
    );
    let cache = CacheManager::new(&config.cache)?;
    if !cache.health_check().await.unwrap_or(false) {
        tracing::warn!("Snapshot cache unhealthy; state will be rebuilt from defaults");
    }
    let store = SnapshotStore::new(cache, config.pool.default_seat_count);

    let runtime = Board::spawn(&config, store).await;
    let handle = runtime.handle;
    let reporter = tokio::spawn(report_events(runtime.events));

    tracing::info!("Ready. Commands: draw, reset, count <n>, show, quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let interrupted = loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = shutdown_signal() => {
                tracing::info!("Shutdown signal received");
                break true;
            }
        };
        let Some(line) = line else { break false };

        match Intent::parse(&line) {
            Some(Intent::Quit) => break false,
            Some(intent) => apply(&handle, intent).await?,
            None if line.trim().is_empty() => {}
            None => tracing::warn!(input = %line.trim(), "Unknown command ignored"),
        }
    };

    // End of input still lets a started draw land; a signal stops at once.
    if !interrupted {
        handle.wait_idle().await?;
    }

    handle.shutdown().await?;
    drop(handle);
    if let Err(e) = runtime.task.await {
        return Err(AppError::internal(format!("Board task failed: {e}")));
    }
    if let Err(e) = reporter.await {
        tracing::error!("Event reporter failed: {}", e);
    }

    tracing::info!("SeatDraw shut down");
    Ok(())
}

/// Forward one intent to the board
async fn apply(handle: &BoardHandle, intent: Intent) -> Result<(), AppError> {
    match intent {
        Intent::Draw => {
            // Refusals are published as events and reported there.
            match handle.draw().await {
                Ok(_) => {}
                Err(e) if e.is_no_available_seats() || e.is_draw_in_progress() => {}
                Err(e) => return Err(e),
            }
        }
        Intent::Reset => {
            handle.reset().await?;
        }
        Intent::Count(raw) => {
            let applied = handle.set_seat_count_input(&raw).await?;
            println!("Seat count: {applied}");
        }
        Intent::Show => {
            let view = handle.snapshot().await?;
            print!("{}", render(&view));
        }
        Intent::Quit => {}
    }
    Ok(())
}

/// Log board events until the board stops
async fn report_events(mut events: broadcast::Receiver<EventEnvelope>) {
    loop {
        let envelope = match events.recv().await {
            Ok(envelope) => envelope,
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "Event reporter lagged");
                continue;
            }
            Err(broadcast::error::RecvError::Closed) => break,
        };

        match envelope.payload {
            BoardEvent::PoolChanged {
                generation,
                seat_count,
                ..
            } => {
                tracing::info!(generation, seat_count, "Seats ready");
            }
            BoardEvent::DrawStarted {
                total_ticks,
                candidates,
            } => {
                tracing::debug!(total_ticks, candidates, "Spinning");
            }
            BoardEvent::Highlight { seat_id } => {
                tracing::trace!(%seat_id, "Highlight");
            }
            BoardEvent::DrawCompleted { seat } => {
                println!("Drawn: seat {seat}");
            }
            BoardEvent::DrawFailed { reason } => {
                println!("{reason}");
            }
        }
    }
}

/// Draw both table sides as text
fn render(view: &BoardView) -> String {
    let row = |side: Side| {
        view.seats
            .iter()
            .filter(|s| s.side == side)
            .map(|s| {
                if s.assigned {
                    format!("[{:>3}]", s.id.get())
                } else {
                    format!(" {:>3} ", s.id.get())
                }
            })
            .collect::<Vec<_>>()
            .join("")
    };

    format!(
        "top:    {}\nbottom: {}\n{} of {} seats free{}\n",
        row(Side::Top),
        row(Side::Bottom),
        view.free_count(),
        view.seats.len(),
        if view.drawing { " (drawing)" } else { "" }
    )
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
