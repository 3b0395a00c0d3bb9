use std::fmt;

use game_core::{BeeKind, GameState};

/// What became of the queen by the end of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueenFate {
    Alive,
    Dead,
    /// The hive never had a queen.
    Unknown,
}

impl QueenFate {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueenFate::Alive => "Alive",
            QueenFate::Dead => "Dead",
            QueenFate::Unknown => "Unsure...",
        }
    }
}

/// Final report derived from the last snapshot of a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSummary {
    pub rounds: u32,
    pub hits: u32,
    pub stings: u32,
    pub player_health: i32,
    pub player_survived: bool,
    pub queen: QueenFate,
    pub workers_remaining: usize,
    pub drones_remaining: usize,
}

impl GameSummary {
    pub fn from_state(state: &GameState) -> Self {
        let queen = match state.queen() {
            None => QueenFate::Unknown,
            Some(queen) if queen.health > 0 => QueenFate::Alive,
            Some(_) => QueenFate::Dead,
        };

        Self {
            rounds: state.round,
            hits: state.hits,
            stings: state.stings,
            player_health: state.player.health,
            player_survived: state.player.is_alive(),
            queen,
            workers_remaining: state.count(BeeKind::Worker),
            drones_remaining: state.count(BeeKind::Drone),
        }
    }

    fn fate(&self) -> &'static str {
        if self.player_survived {
            "You survived the hive!"
        } else {
            "You perished in the swarm."
        }
    }

    fn commentary(&self) -> &'static str {
        if self.player_survived {
            "Victory! The hive has fallen. Peace returns to the meadow."
        } else {
            "The hive overwhelmed you. Your story ends in silence..."
        }
    }
}

impl fmt::Display for GameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "\u{1F4DC} Game Summary")?;
        writeln!(f, "============================")?;
        writeln!(f, "Rounds played : {}", self.rounds)?;
        writeln!(f, "Total hits    : {}", self.hits)?;
        writeln!(f, "Total stings  : {}", self.stings)?;
        writeln!(f)?;
        writeln!(f, "\u{1F464} Player Status")?;
        writeln!(f, "----------------------------")?;
        writeln!(f, "Final Health  : {}", self.player_health)?;
        writeln!(f, "Fate          : {}", self.fate())?;
        writeln!(f)?;
        writeln!(f, "\u{1F41D} Hive Status")?;
        writeln!(f, "----------------------------")?;
        writeln!(f, "Queen Bee     : {}", self.queen.as_str())?;
        writeln!(f, "Worker Bees   : {} remaining", self.workers_remaining)?;
        writeln!(f, "Drone Bees    : {} remaining", self.drones_remaining)?;
        writeln!(f)?;
        writeln!(f, "{}", self.commentary())
    }
}
