//! Foreground side of the turn handshake.
//!
//! A round is one [`TurnProtocol::submit_action`] followed by one
//! [`TurnProtocol::await_engine_turn`], unless the first call already ended
//! the game. Once a [`EventKind::GameOver`] event has been observed every
//! further call fails with [`RuntimeError::GameFinished`].
//!
//! [`RuntimeError::GameFinished`]: super::errors::RuntimeError::GameFinished
use std::fmt;

use async_trait::async_trait;
use game_core::EventKind;

use super::errors::Result;
use crate::events::GameEvent;

/// The two calls a foreground driver can make.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Request {
    SubmitAction,
    AwaitEngineTurn,
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Request::SubmitAction => "submit_action",
            Request::AwaitEngineTurn => "await_engine_turn",
        };
        write!(f, "{}", label)
    }
}

/// Events produced by one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundEvents {
    pub player: GameEvent,
    /// `None` when the player's attack ended the game.
    pub hive: Option<GameEvent>,
}

impl RoundEvents {
    /// The last event of the round.
    pub fn last(&self) -> &GameEvent {
        self.hive.as_ref().unwrap_or(&self.player)
    }

    pub fn is_game_over(&self) -> bool {
        self.last().kind == EventKind::GameOver
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        std::iter::once(&self.player).chain(self.hive.as_ref())
    }
}

/// Blocking request/response contract with the turn worker.
///
/// Implementations must deliver events in order: the player's event for
/// `submit_action`, then the hive's event for `await_engine_turn`.
#[async_trait]
pub trait TurnProtocol: Send + Sync {
    /// Hands the worker the player's attack and waits for its outcome.
    async fn submit_action(&self) -> Result<GameEvent>;

    /// Waits for the hive's autonomous attack.
    async fn await_engine_turn(&self) -> Result<GameEvent>;

    /// Plays one full round.
    async fn play_round(&self) -> Result<RoundEvents> {
        let player = self.submit_action().await?;
        if player.is_terminal() {
            return Ok(RoundEvents { player, hive: None });
        }

        let hive = self.await_engine_turn().await?;
        Ok(RoundEvents {
            player,
            hive: Some(hive),
        })
    }
}
