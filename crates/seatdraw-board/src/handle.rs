//! Cloneable front end to the board task.

use tokio::sync::{broadcast, mpsc, oneshot};

use seatdraw_core::config::PoolConfig;
use seatdraw_core::error::AppError;
use seatdraw_core::events::{BoardEvent, EventEnvelope};
use seatdraw_core::result::AppResult;
use seatdraw_engine::DrawHandle;

use crate::command::{BoardCommand, BoardView};

/// Sends commands to a running board and subscribes to its events.
#[derive(Debug, Clone)]
pub struct BoardHandle {
    /// Command channel into the board task
    commands: mpsc::Sender<BoardCommand>,
    /// Event channel used to create new subscriptions
    events: broadcast::Sender<EventEnvelope>,
}

impl BoardHandle {
    pub(crate) fn new(
        commands: mpsc::Sender<BoardCommand>,
        events: broadcast::Sender<EventEnvelope>,
    ) -> Self {
        Self { commands, events }
    }

    /// Subscribe to events published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<EventEnvelope> {
        self.events.subscribe()
    }

    /// Change the seat count. Returns the count actually applied.
    pub async fn set_seat_count(&self, count: u32) -> AppResult<u32> {
        self.request(|reply| BoardCommand::SetSeatCount { count, reply })
            .await
    }

    /// Change the seat count from raw user input.
    ///
    /// Non-numeric or negative input counts as 0 before clamping.
    pub async fn set_seat_count_input(&self, raw: &str) -> AppResult<u32> {
        self.set_seat_count(PoolConfig::parse_seat_count(raw)).await
    }

    /// Start a draw.
    pub async fn draw(&self) -> AppResult<DrawHandle> {
        self.request(|reply| BoardCommand::Draw { reply }).await?
    }

    /// Regenerate the pool at the current seat count.
    pub async fn reset(&self) -> AppResult<u64> {
        self.request(|reply| BoardCommand::Reset { reply }).await
    }

    /// Read the current board state.
    pub async fn snapshot(&self) -> AppResult<BoardView> {
        self.request(|reply| BoardCommand::Snapshot { reply }).await
    }

    /// Wait until no draw is running.
    ///
    /// Returns at once when the board is idle. Otherwise waits for the
    /// running draw to commit or be discarded by a pool change.
    pub async fn wait_idle(&self) -> AppResult<()> {
        // Subscribe first so a commit between the check and the wait is seen.
        let mut events = self.subscribe();
        while self.snapshot().await?.drawing {
            loop {
                let received = tokio::select! {
                    received = events.recv() => received,
                    // The handle keeps the event channel open, so watch the task instead.
                    _ = self.commands.closed() => return Err(board_stopped()),
                };
                match received {
                    Ok(envelope) => match envelope.payload {
                        BoardEvent::DrawCompleted { .. } | BoardEvent::PoolChanged { .. } => break,
                        _ => {}
                    },
                    Err(broadcast::error::RecvError::Lagged(_)) => break,
                    Err(broadcast::error::RecvError::Closed) => return Err(board_stopped()),
                }
            }
        }
        Ok(())
    }

    /// Ask the board task to stop.
    pub async fn shutdown(&self) -> AppResult<()> {
        self.commands
            .send(BoardCommand::Shutdown)
            .await
            .map_err(|_| board_stopped())
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<T>) -> BoardCommand,
    ) -> AppResult<T> {
        let (tx, rx) = oneshot::channel();
        self.commands
            .send(make(tx))
            .await
            .map_err(|_| board_stopped())?;
        rx.await.map_err(|_| board_stopped())
    }
}

fn board_stopped() -> AppError {
    AppError::internal("Board task has stopped")
}
