//! Simulation worker that owns the authoritative [`game_core::GameState`].
//!
//! Runs the round loop, resolving phases via [`game_core::GameEngine`]. The
//! worker suspends before each player phase until a
//! [`Request::SubmitAction`] arrives, resolves the hive phase on its own, and
//! hands that event to the next [`Request::AwaitEngineTurn`]. Every event is
//! also published to the [`EventBus`].

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, warn};

use game_core::{GameConfig, GameEngine, GameError, GameState, Phase, RngOracle};

use crate::api::{Request, Result, RuntimeError};
use crate::events::{EventBus, GameEvent};

type Reply = oneshot::Sender<Result<GameEvent>>;

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Resolve the player's attack and reply with its event.
    SubmitAction { reply: Reply },
    /// Reply with the event of the hive's attack.
    AwaitEngineTurn { reply: Reply },
}

impl Command {
    pub(crate) fn new(request: Request, reply: Reply) -> Self {
        match request {
            Request::SubmitAction => Command::SubmitAction { reply },
            Request::AwaitEngineTurn => Command::AwaitEngineTurn { reply },
        }
    }

    fn request(&self) -> Request {
        match self {
            Command::SubmitAction { .. } => Request::SubmitAction,
            Command::AwaitEngineTurn { .. } => Request::AwaitEngineTurn,
        }
    }

    fn into_reply(self) -> Reply {
        match self {
            Command::SubmitAction { reply } | Command::AwaitEngineTurn { reply } => reply,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Running,
    Finished,
}

/// Background task that owns the game session.
pub struct SimulationWorker {
    state: GameState,
    config: GameConfig,
    rng: Box<dyn RngOracle>,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    status: Status,
}

impl SimulationWorker {
    pub fn new(
        state: GameState,
        config: GameConfig,
        rng: Box<dyn RngOracle>,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        info!(
            target: "runtime::worker",
            bees = state.hive.len(),
            player_health = state.player.health,
            "SimulationWorker initialized"
        );

        Self {
            state,
            config,
            rng,
            command_rx,
            event_bus,
            status: Status::Running,
        }
    }

    /// Main worker loop.
    ///
    /// Returns once every handle is dropped.
    pub async fn run(mut self) {
        while self.status == Status::Running {
            let round = GameEngine::new(&mut self.state, &self.config).begin_round();
            debug!(target: "runtime::worker", round, "Round started");

            let Some(reply) = self.wait_for(Request::SubmitAction).await else {
                return;
            };
            let result = self.resolve(Phase::Player);
            Self::deliver(reply, result);

            if self.status == Status::Finished {
                break;
            }

            let result = self.resolve(Phase::Hive);
            let Some(reply) = self.wait_for(Request::AwaitEngineTurn).await else {
                return;
            };
            Self::deliver(reply, result);
        }

        info!(
            target: "runtime::worker",
            round = self.state.round,
            hits = self.state.hits,
            stings = self.state.stings,
            "Game finished"
        );

        self.drain_finished().await;
    }

    /// Waits for the command the current phase needs.
    ///
    /// Any other command is rejected without touching the state, and a
    /// matching command whose caller already gave up is skipped. Returns
    /// `None` once the command channel is closed.
    async fn wait_for(&mut self, expected: Request) -> Option<Reply> {
        loop {
            let Some(command) = self.command_rx.recv().await else {
                debug!(target: "runtime::worker", "Command channel closed, stopping worker");
                return None;
            };

            let received = command.request();
            if received == expected {
                let reply = command.into_reply();
                // The caller timed out while the request sat in the queue.
                if reply.is_closed() {
                    debug!(
                        target: "runtime::worker",
                        request = %received,
                        "Skipping request abandoned by its caller"
                    );
                    continue;
                }
                return Some(reply);
            }

            warn!(
                target: "runtime::worker",
                %expected,
                %received,
                "Rejected out-of-turn request"
            );
            Self::deliver(
                command.into_reply(),
                Err(RuntimeError::OutOfTurn { expected, received }),
            );
        }
    }

    /// Resolves one phase and emits its event.
    fn resolve(&mut self, phase: Phase) -> Result<GameEvent> {
        let mut engine = GameEngine::new(&mut self.state, &self.config);
        let outcome = match phase {
            Phase::Player => engine.resolve_player_attack(&mut self.rng),
            Phase::Hive => engine.resolve_hive_attack(&mut self.rng),
        };

        let outcome = match outcome {
            Ok(outcome) => outcome,
            Err(err) => {
                error!(
                    target: "runtime::worker",
                    phase = phase.as_str(),
                    code = err.error_code(),
                    severity = err.severity().as_str(),
                    error = %err,
                    "Phase resolution failed"
                );
                self.status = Status::Finished;
                return Err(err.into());
            }
        };

        if outcome.is_terminal() {
            self.status = Status::Finished;
        }

        debug!(
            target: "runtime::worker",
            phase = phase.as_str(),
            kind = outcome.kind.as_str(),
            message = %outcome.message,
            "Phase resolved"
        );

        let event = GameEvent::new(outcome, self.state.clone());
        self.event_bus.publish(event.clone());
        Ok(event)
    }

    fn deliver(reply: Reply, result: Result<GameEvent>) {
        if reply.send(result).is_err() {
            warn!(target: "runtime::worker", "Reply channel closed (caller dropped), event lost");
        }
    }

    /// Answers every request after the game ended until all handles drop.
    async fn drain_finished(&mut self) {
        while let Some(command) = self.command_rx.recv().await {
            debug!(
                target: "runtime::worker",
                request = %command.request(),
                "Request after game over"
            );
            Self::deliver(command.into_reply(), Err(RuntimeError::GameFinished));
        }
    }
}
