//! Bees in the trap game client binary.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Runtime (game session worker) via RuntimeBuilder
//! 2. Frontend (console text UI) driving it through the turn protocol
//!
//! # Examples
//!
//! ```bash
//! # Interactive session
//! cargo run -p hive-client
//!
//! # Reproducible unattended session
//! HIVE_AUTOPLAY=1 HIVE_SEED=7 cargo run -p hive-client
//! ```

use anyhow::{Context, Result};
use client_frontend_cli::{CliConfig, ClientError, ConsoleFrontend, logging};
use game_core::GameError;
use runtime::Runtime;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let config = CliConfig::from_env();

    // 2. Setup logging
    logging::setup_logging(&config)?;

    tracing::info!("Starting hive client");
    tracing::info!(seed = ?config.seed, autoplay = config.autoplay, "Session settings");

    // 3. Build Runtime (spawns the session worker)
    let runtime = Runtime::builder()
        .config(config.runtime_config())
        .build()
        .context("failed to start the game runtime")?;

    // 4. Run the console frontend against the runtime handle
    let frontend = ConsoleFrontend::new(
        runtime.handle(),
        BufReader::new(tokio::io::stdin()),
        std::io::stdout(),
    )
    .autoplay(config.autoplay);

    let outcome = frontend.run().await;

    if let Err(ClientError::Runtime(err)) = &outcome {
        tracing::error!(
            code = err.error_code(),
            severity = err.severity().as_str(),
            error = %err,
            "Session ended by runtime error"
        );
    }

    runtime.shutdown().await?;

    let final_state = outcome.context("game session failed")?;
    tracing::info!(
        rounds = final_state.round,
        player_alive = final_state.player.is_alive(),
        "Client shutdown complete"
    );

    Ok(())
}
