//! Console session loop tying the turn protocol to a line-based terminal.
use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use game_core::GameState;
use runtime::{GameEvent, TurnProtocol};

use crate::error::ClientError;
use crate::input::PlayerCommand;
use crate::presentation::{GameSummary, INTRO, INVALID_COMMAND, PROMPT};

/// Text frontend driving one game session.
///
/// Reads commands from `input`, forwards them through the protocol, and
/// prints every event message to `output`. The frontend never touches the
/// game state directly; it only reads the snapshots carried by events.
pub struct ConsoleFrontend<P, R, W> {
    protocol: P,
    input: R,
    output: W,
    autoplay: bool,
}

impl<P, R, W> ConsoleFrontend<P, R, W>
where
    P: TurnProtocol,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(protocol: P, input: R, output: W) -> Self {
        Self {
            protocol,
            input,
            output,
            autoplay: false,
        }
    }

    /// Start in unattended mode, as if `auto` had been typed.
    pub fn autoplay(mut self, enabled: bool) -> Self {
        self.autoplay = enabled;
        self
    }

    /// Play until the game is over and return the final snapshot.
    pub async fn run(mut self) -> Result<GameState, ClientError> {
        tracing::info!(autoplay = self.autoplay, "Console session starting");

        writeln!(self.output, "{INTRO}")?;

        loop {
            if !self.autoplay && self.read_command().await? == PlayerCommand::Auto {
                tracing::info!("Autoplay enabled");
                self.autoplay = true;
            }

            let event = self.protocol.submit_action().await?;
            if let Some(state) = self.show(event)? {
                return Ok(state);
            }

            let event = self.protocol.await_engine_turn().await?;
            if let Some(state) = self.show(event)? {
                return Ok(state);
            }
        }
    }

    /// Prompts until a known command is entered.
    async fn read_command(&mut self) -> Result<PlayerCommand, ClientError> {
        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line).await? == 0 {
                return Err(ClientError::InputClosed);
            }

            match line.parse() {
                Ok(command) => return Ok(command),
                Err(err) => {
                    tracing::debug!(%err, "Rejected input");
                    writeln!(self.output, "{INVALID_COMMAND}")?;
                }
            }
        }
    }

    /// Prints the event and, on game over, the summary.
    fn show(&mut self, event: GameEvent) -> Result<Option<GameState>, ClientError> {
        writeln!(self.output, "{}", event.message)?;

        if !event.is_terminal() {
            return Ok(None);
        }

        tracing::info!(
            round = event.state.round,
            hits = event.state.hits,
            stings = event.state.stings,
            "Game over"
        );
        write!(self.output, "{}", GameSummary::from_state(&event.state))?;
        self.output.flush()?;

        Ok(Some(event.state))
    }
}
