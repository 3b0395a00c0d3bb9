//! Error types for phase resolution.

use crate::error::{ErrorSeverity, GameError};

/// Half of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Player,
    Hive,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Player => "player",
            Phase::Hive => "hive",
        }
    }
}

impl core::fmt::Display for Phase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors surfaced while resolving a phase.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineError {
    /// No bee is left to select. Unreachable while a queen is alive, since
    /// her death ends the game before she can be removed.
    #[error("cannot select a bee from an empty hive during the {phase} phase (round {round})")]
    EmptyHive { phase: Phase, round: u32 },
}

impl GameError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EmptyHive { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyHive { .. } => "ENGINE_EMPTY_HIVE",
        }
    }
}
