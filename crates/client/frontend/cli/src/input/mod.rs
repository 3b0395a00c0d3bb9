//! Input processing for the console client.
//!
//! Maps raw input lines to [`PlayerCommand`]s so the session loop stays
//! agnostic of the exact command spelling.

use std::fmt;
use std::str::FromStr;

/// Command typed at the prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Strike the hive once.
    Hit,
    /// Play the rest of the session unattended.
    Auto,
}

impl PlayerCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerCommand::Hit => "hit",
            PlayerCommand::Auto => "auto",
        }
    }
}

impl fmt::Display for PlayerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input line that is not a known command.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown command {0:?}")]
pub struct UnknownCommand(pub String);

impl FromStr for PlayerCommand {
    type Err = UnknownCommand;

    /// Parses a raw line. Trailing line terminators are ignored; anything
    /// else must match exactly.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        match line.trim_end_matches(['\n', '\r']) {
            "hit" => Ok(PlayerCommand::Hit),
            "auto" => Ok(PlayerCommand::Auto),
            other => Err(UnknownCommand(other.to_owned())),
        }
    }
}
