//! Phase resolution for a single round.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. A round
//! is `begin_round` followed by a player phase and, unless that ended the
//! game, a hive phase. Each phase produces exactly one [`PhaseOutcome`].

mod errors;

pub use errors::{EngineError, Phase};

use crate::combat::{
    PLAYER_MISS, describe_bee_hit, describe_hive_miss, describe_sting, hive_misses, player_misses,
};
use crate::config::GameConfig;
use crate::env::RngOracle;
use crate::state::GameState;

/// What a phase produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// The player's attack resolved and the game goes on.
    PlayerAttack,
    /// A bee's attack resolved and the game goes on.
    HiveAttack,
    /// The queen or the player died. Always the last outcome of a session.
    GameOver,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::PlayerAttack => "player_attack",
            EventKind::HiveAttack => "hive_attack",
            EventKind::GameOver => "game_over",
        }
    }
}

/// Kind and narrative of one resolved phase.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhaseOutcome {
    pub kind: EventKind,
    pub message: String,
}

impl PhaseOutcome {
    fn new(kind: EventKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.kind == EventKind::GameOver
    }
}

/// Game engine that resolves phases against borrowed state.
///
/// The engine holds no state of its own; callers decide when a phase runs
/// and what happens with the outcome.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    config: &'a GameConfig,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState, config: &'a GameConfig) -> Self {
        Self { state, config }
    }

    /// Starts a new round and returns its number.
    pub fn begin_round(&mut self) -> u32 {
        self.state.round += 1;
        self.state.round
    }

    /// Resolves the player's attack on a random bee.
    ///
    /// A killed queen ends the game; any other killed bee leaves the hive.
    pub fn resolve_player_attack<R>(&mut self, rng: &mut R) -> Result<PhaseOutcome, EngineError>
    where
        R: RngOracle + ?Sized,
    {
        let index = self.pick_bee(Phase::Player, rng)?;

        if player_misses(rng.roll_percent(), self.state.player.miss_chance) {
            return Ok(PhaseOutcome::new(EventKind::PlayerAttack, PLAYER_MISS));
        }

        self.state.hits += 1;

        let table = &self.config.damage_to_bees;
        let bee = &mut self.state.hive[index];
        let died = bee.take_damage(table);
        let message = describe_bee_hit(bee.kind, died, bee.health, table);

        if died && bee.kind.is_queen() {
            return Ok(PhaseOutcome::new(EventKind::GameOver, message));
        }

        if died {
            self.state.hive.swap_remove(index);
        }

        Ok(PhaseOutcome::new(EventKind::PlayerAttack, message))
    }

    /// Resolves a random bee's attack on the player.
    pub fn resolve_hive_attack<R>(&mut self, rng: &mut R) -> Result<PhaseOutcome, EngineError>
    where
        R: RngOracle + ?Sized,
    {
        let index = self.pick_bee(Phase::Hive, rng)?;
        let bee = self.state.hive[index];

        if hive_misses(rng.roll_percent(), bee.miss_chance) {
            return Ok(PhaseOutcome::new(
                EventKind::HiveAttack,
                describe_hive_miss(bee.kind),
            ));
        }

        self.state.stings += 1;

        let player = &mut self.state.player;
        let died = player.take_damage(bee.kind, &self.config.damage_to_player);
        let message = describe_sting(bee.kind, died, player.health);

        if died {
            return Ok(PhaseOutcome::new(EventKind::GameOver, message));
        }

        Ok(PhaseOutcome::new(EventKind::HiveAttack, message))
    }

    fn pick_bee<R>(&self, phase: Phase, rng: &mut R) -> Result<usize, EngineError>
    where
        R: RngOracle + ?Sized,
    {
        let len = self.state.hive.len();
        if len == 0 {
            return Err(EngineError::EmptyHive {
                phase,
                round: self.state.round,
            });
        }
        Ok(rng.pick_index(len).min(len - 1))
    }
}
