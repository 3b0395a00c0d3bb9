//! High-level runtime orchestrator.
//!
//! The runtime owns the background worker, wires up command/event channels,
//! and exposes a builder-based API for clients to drive the simulation.

use std::time::Duration;

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use game_core::{GameConfig, GameState, RngOracle};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::events::{EventBus, GameEvent};
use crate::oracle::EntropyRng;
use crate::workers::{Command, SimulationWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Upper bound on every protocol call. `None` waits forever.
    ///
    /// A request that times out before the worker picks it up is skipped.
    /// One that times out while its phase is resolving still commits; the
    /// event then only reaches observers and the next call of the same kind
    /// is answered with `OutOfTurn`.
    pub reply_timeout: Option<Duration>,
    /// Seed for the default RNG oracle. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl RuntimeConfig {
    pub const DEFAULT_REPLY_TIMEOUT: Duration = Duration::from_secs(5);
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            event_buffer_size: 64,
            command_buffer_size: 1,
            reply_timeout: Some(Self::DEFAULT_REPLY_TIMEOUT),
            seed: None,
        }
    }
}

/// Main runtime that owns the game session worker.
///
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Subscribe to game events
    pub fn subscribe_events(&self) -> broadcast::Receiver<GameEvent> {
        self.handle.subscribe_events()
    }

    /// Shutdown the runtime gracefully.
    ///
    /// The worker stops once every handle handed out by [`Runtime::handle`]
    /// has been dropped as well.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)
    }

    /// Cancel the worker immediately.
    ///
    /// Calls blocked on the worker fail with
    /// [`RuntimeError::ReplyChannelClosed`]; later calls fail with
    /// [`RuntimeError::CommandChannelClosed`].
    pub async fn abort(self) -> Result<()> {
        self.worker_handle.abort();

        match self.worker_handle.await {
            Ok(()) => Ok(()),
            Err(err) if err.is_cancelled() => Ok(()),
            Err(err) => Err(RuntimeError::WorkerJoin(err)),
        }
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    state: Option<GameState>,
    rng: Option<Box<dyn RngOracle>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            state: None,
            rng: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide initial game state instead of the standard opening
    pub fn initial_state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    /// Replace the RNG oracle (e.g. with a scripted one in tests)
    pub fn rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    pub fn reply_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.config.reply_timeout = timeout;
        self
    }

    /// Build the runtime and spawn its worker.
    ///
    /// Must be called from within a tokio runtime.
    pub fn build(self) -> Result<Runtime> {
        let RuntimeBuilder { config, state, rng } = self;

        let initial_state =
            state.unwrap_or_else(|| GameState::new_session(&config.game_config));
        if initial_state.hive.is_empty() {
            return Err(RuntimeError::EmptyHive);
        }
        if initial_state.queen().is_none() {
            tracing::warn!("Initial hive has no queen; only the player's death can end the game");
        }

        let rng: Box<dyn RngOracle> = match rng {
            Some(rng) => rng,
            None => Box::new(match config.seed {
                Some(seed) => EntropyRng::seeded(seed),
                None => EntropyRng::from_entropy(),
            }),
        };

        let (command_tx, command_rx) = mpsc::channel::<Command>(config.command_buffer_size.max(1));
        let event_bus = EventBus::with_capacity(config.event_buffer_size);

        let handle = RuntimeHandle::new(command_tx, event_bus.clone(), config.reply_timeout);

        let worker = SimulationWorker::new(
            initial_state,
            config.game_config,
            rng,
            command_rx,
            event_bus,
        );

        let worker_handle = tokio::spawn(async move {
            worker.run().await;
        });

        Ok(Runtime {
            handle,
            worker_handle,
        })
    }
}
