//! Cloneable façade for driving the turn worker.
//!
//! [`RuntimeHandle`] hides channel plumbing: every call sends a command with
//! a oneshot reply slot and waits for the worker to fill it.
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{broadcast, mpsc, oneshot};

use super::errors::{Result, RuntimeError};
use super::protocol::{Request, TurnProtocol};
use crate::events::{EventBus, GameEvent};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
    reply_timeout: Option<Duration>,
}

impl RuntimeHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        event_bus: EventBus,
        reply_timeout: Option<Duration>,
    ) -> Self {
        Self {
            command_tx,
            event_bus,
            reply_timeout,
        }
    }

    /// Subscribe to every event the worker emits.
    ///
    /// Observers see the same events as the driver, in the same order, but
    /// cannot influence the game.
    pub fn subscribe_events(&self) -> broadcast::Receiver<GameEvent> {
        self.event_bus.subscribe()
    }

    async fn request(&self, request: Request) -> Result<GameEvent> {
        let (reply_tx, reply_rx) = oneshot::channel();
        let command = Command::new(request, reply_tx);

        let exchange = async {
            if self.command_tx.send(command).await.is_err() {
                return Err(RuntimeError::CommandChannelClosed);
            }

            reply_rx
                .await
                .map_err(RuntimeError::ReplyChannelClosed)
                .and_then(|result| result)
        };

        match self.reply_timeout {
            Some(after) => tokio::time::timeout(after, exchange)
                .await
                .map_err(|_| RuntimeError::Timeout { request, after })?,
            None => exchange.await,
        }
    }
}

#[async_trait]
impl TurnProtocol for RuntimeHandle {
    async fn submit_action(&self) -> Result<GameEvent> {
        self.request(Request::SubmitAction).await
    }

    async fn await_engine_turn(&self) -> Result<GameEvent> {
        self.request(Request::AwaitEngineTurn).await
    }
}
