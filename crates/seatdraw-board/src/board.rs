//! Board task that owns the pool and runs draws on a timer.

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

use seatdraw_cache::{BoardSnapshot, SnapshotStore};
use seatdraw_core::config::{AppConfig, PoolConfig};
use seatdraw_core::events::{BoardEvent, DrawFailure, EventEnvelope};
use seatdraw_core::result::AppResult;
use seatdraw_engine::{DrawEngine, DrawHandle, SeatPool, TickStep};

use crate::command::{BoardCommand, BoardView};
use crate::handle::BoardHandle;

/// A started board: the handle, a subscription opened before the task
/// published anything, and the task itself.
#[derive(Debug)]
pub struct BoardRuntime {
    /// Command handle
    pub handle: BoardHandle,
    /// Receives every event, starting with the restored pool
    pub events: broadcast::Receiver<EventEnvelope>,
    /// The board task
    pub task: JoinHandle<()>,
}

/// Single owner of the seat count, the pool, and the draw engine.
///
/// Commands and draw ticks are served from one loop, so the pool is only
/// ever touched by this task. A reset or count change that arrives during
/// a draw replaces the pool and drops the draw; no further highlights are
/// published for it and nothing is committed.
#[derive(Debug)]
pub struct Board {
    /// Seat count range
    pool_config: PoolConfig,
    /// Draw state machine
    engine: DrawEngine,
    /// Authoritative seats
    pool: SeatPool,
    /// Configured seat count
    seat_count: u32,
    /// Persistence
    store: SnapshotStore,
    /// Outbound events
    events: broadcast::Sender<EventEnvelope>,
    /// Sequence number of the last published event
    sequence: u64,
    /// When the next draw tick is due, if a draw is running
    next_tick: Option<Instant>,
}

impl Board {
    /// Restore state from `store` and spawn the board task.
    pub async fn spawn(config: &AppConfig, store: SnapshotStore) -> BoardRuntime {
        let (command_tx, command_rx) = mpsc::channel(config.board.command_buffer);
        let (event_tx, event_rx) = broadcast::channel(config.board.event_buffer);

        let engine = DrawEngine::from_config(&config.draw);
        let board = Self::restore(config.pool.clone(), engine, store, event_tx.clone()).await;

        let task = tokio::spawn(board.run(command_rx));

        BoardRuntime {
            handle: BoardHandle::new(command_tx, event_tx),
            events: event_rx,
            task,
        }
    }

    /// Build a board from the persisted snapshot, regenerating the pool if
    /// the stored seats are missing or do not match the stored count.
    async fn restore(
        pool_config: PoolConfig,
        engine: DrawEngine,
        store: SnapshotStore,
        events: broadcast::Sender<EventEnvelope>,
    ) -> Self {
        let BoardSnapshot { seat_count, seats } = store.load().await;
        let clamped = pool_config.clamp_seat_count(seat_count);
        if clamped != seat_count {
            tracing::warn!(
                stored = seat_count,
                applied = clamped,
                "Persisted seat count outside configured range"
            );
        }

        let restored = SeatPool::from_seats(1, seats);
        let pool = if restored.len() == clamped as usize && restored.is_consistent() {
            tracing::info!(
                seat_count = clamped,
                assigned = restored.assigned_count(),
                "Restored persisted seats"
            );
            restored
        } else {
            if !restored.is_empty() {
                tracing::warn!(
                    stored_seats = restored.len(),
                    seat_count = clamped,
                    "Persisted seats do not match seat count, regenerating"
                );
            }
            SeatPool::generate(clamped, 1)
        };

        Self {
            pool_config,
            engine,
            pool,
            seat_count: clamped,
            store,
            events,
            sequence: 0,
            next_tick: None,
        }
    }

    /// Run until shutdown or until every handle is dropped.
    pub async fn run(mut self, mut commands: mpsc::Receiver<BoardCommand>) {
        tracing::info!(
            seat_count = self.seat_count,
            free = self.pool.free_count(),
            "Board started"
        );

        self.publish_pool();
        self.persist().await;

        loop {
            let tick_due = self.next_tick;
            tokio::select! {
                command = commands.recv() => {
                    match command {
                        Some(BoardCommand::Shutdown) | None => {
                            tracing::info!("Board received shutdown signal");
                            break;
                        }
                        Some(command) => self.handle(command).await,
                    }
                }
                _ = time::sleep_until(tick_due.unwrap_or_else(Instant::now)), if tick_due.is_some() => {
                    self.on_tick().await;
                }
            }
        }

        if self.engine.abandon() {
            tracing::info!("Board stopped with a draw in flight; draw discarded");
        }
        tracing::info!("Board shut down complete");
    }

    async fn handle(&mut self, command: BoardCommand) {
        match command {
            BoardCommand::SetSeatCount { count, reply } => {
                let applied = self.set_seat_count(count).await;
                let _ = reply.send(applied);
            }
            BoardCommand::Draw { reply } => {
                let result = self.start_draw();
                let _ = reply.send(result);
            }
            BoardCommand::Reset { reply } => {
                self.regenerate(self.seat_count).await;
                let _ = reply.send(self.pool.generation());
            }
            BoardCommand::Snapshot { reply } => {
                let _ = reply.send(self.view());
            }
            BoardCommand::Shutdown => {}
        }
    }

    async fn set_seat_count(&mut self, requested: u32) -> u32 {
        let count = self.pool_config.clamp_seat_count(requested);
        if count == self.seat_count {
            tracing::debug!(count, "Seat count unchanged");
            return count;
        }
        tracing::info!(from = self.seat_count, to = count, "Seat count changed");
        self.seat_count = count;
        self.regenerate(count).await;
        count
    }

    async fn regenerate(&mut self, count: u32) {
        let interrupted = self.engine.is_running();
        let seats = self.engine.reset(count);
        self.next_tick = None;
        self.pool = SeatPool::from_seats(self.pool.generation() + 1, seats);

        tracing::info!(
            seat_count = count,
            generation = self.pool.generation(),
            interrupted,
            "Pool regenerated"
        );

        self.publish_pool();
        self.persist().await;
    }

    fn start_draw(&mut self) -> AppResult<DrawHandle> {
        match self.engine.start_draw(&self.pool) {
            Ok(handle) => {
                self.next_tick = Some(Instant::now());
                self.publish(BoardEvent::DrawStarted {
                    total_ticks: handle.total_ticks,
                    candidates: handle.candidates,
                });
                Ok(handle)
            }
            Err(e) => {
                tracing::info!(reason = %e, "Draw refused");
                if let Some(reason) = DrawFailure::from_error(&e) {
                    self.publish(BoardEvent::DrawFailed { reason });
                }
                Err(e)
            }
        }
    }

    async fn on_tick(&mut self) {
        let Some(tick) = self.engine.tick(&mut self.pool) else {
            self.next_tick = None;
            return;
        };

        tracing::debug!(seat_id = %tick.highlighted, "Draw tick");
        self.publish(BoardEvent::Highlight {
            seat_id: tick.highlighted,
        });

        match tick.step {
            TickStep::Continue { next_delay } => {
                self.next_tick = Some(Instant::now() + next_delay);
            }
            TickStep::Committed(seat) => {
                self.next_tick = None;
                tracing::info!(seat = %seat, free = self.pool.free_count(), "Seat drawn");
                self.publish(BoardEvent::DrawCompleted { seat });
                self.persist().await;
            }
            TickStep::Discarded => {
                self.next_tick = None;
            }
        }
    }

    fn view(&self) -> BoardView {
        BoardView {
            seat_count: self.seat_count,
            generation: self.pool.generation(),
            seats: self.pool.seats().to_vec(),
            drawing: self.engine.is_running(),
        }
    }

    fn publish_pool(&mut self) {
        self.publish(BoardEvent::PoolChanged {
            generation: self.pool.generation(),
            seat_count: self.seat_count,
            seats: self.pool.seats().to_vec(),
        });
    }

    fn publish(&mut self, payload: BoardEvent) {
        self.sequence += 1;
        // No subscribers is not an error.
        let _ = self.events.send(EventEnvelope::new(self.sequence, payload));
    }

    async fn persist(&self) {
        let snapshot = BoardSnapshot {
            seat_count: self.seat_count,
            seats: self.pool.seats().to_vec(),
        };
        self.store.save(&snapshot).await;
    }
}
