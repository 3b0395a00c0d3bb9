//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination and phase resolution so clients
//! can bubble them up with consistent context.
use std::time::Duration;

use thiserror::Error;
use tokio::sync::oneshot;

use game_core::{EngineError, ErrorSeverity, GameError};

use super::protocol::Request;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("turn worker command channel closed")]
    CommandChannelClosed,

    #[error("turn worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("turn worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("{request} got no reply within {after:?}")]
    Timeout { request: Request, after: Duration },

    #[error("turn worker expected {expected} but received {received}")]
    OutOfTurn { expected: Request, received: Request },

    #[error("the game is already over")]
    GameFinished,

    #[error("initial state has no bees to fight")]
    EmptyHive,

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Timeout { .. } => ErrorSeverity::Recoverable,
            Self::OutOfTurn { .. } | Self::GameFinished | Self::EmptyHive => {
                ErrorSeverity::Validation
            }
            Self::CommandChannelClosed | Self::ReplyChannelClosed(_) | Self::WorkerJoin(_) => {
                ErrorSeverity::Internal
            }
            Self::Engine(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::CommandChannelClosed => "RUNTIME_COMMAND_CHANNEL_CLOSED",
            Self::ReplyChannelClosed(_) => "RUNTIME_REPLY_CHANNEL_CLOSED",
            Self::WorkerJoin(_) => "RUNTIME_WORKER_JOIN",
            Self::Timeout { .. } => "RUNTIME_TIMEOUT",
            Self::OutOfTurn { .. } => "RUNTIME_OUT_OF_TURN",
            Self::GameFinished => "RUNTIME_GAME_FINISHED",
            Self::EmptyHive => "RUNTIME_EMPTY_HIVE",
            Self::Engine(err) => err.error_code(),
        }
    }
}
