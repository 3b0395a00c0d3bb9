//! Event payloads handed to the foreground.

use game_core::{EventKind, GameState, PhaseOutcome};
use serde::{Deserialize, Serialize};

/// Outcome of one phase together with the state right after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    pub kind: EventKind,
    pub message: String,
    /// Snapshot taken when the event was emitted. Later engine progress never
    /// changes it.
    pub state: GameState,
}

impl GameEvent {
    pub fn new(outcome: PhaseOutcome, state: GameState) -> Self {
        Self {
            kind: outcome.kind,
            message: outcome.message,
            state,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.kind == EventKind::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Bee, BeeKind, Player};

    #[test]
    fn serializes_kind_message_and_snapshot() {
        let event = GameEvent {
            kind: EventKind::GameOver,
            message: "You killed the Queen bee.".to_owned(),
            state: GameState::new(
                Player::with_miss_chance(0),
                vec![Bee::new(BeeKind::Queen, -9, 100)],
            ),
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"], "GameOver");
        assert_eq!(json["message"], "You killed the Queen bee.");
        assert_eq!(json["state"]["hive"][0]["health"], -9);
        assert!(event.is_terminal());
    }
}
