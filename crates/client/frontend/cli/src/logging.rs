//! File-based tracing setup for console sessions.
//!
//! Logs never go to stdout: the terminal is reserved for the game text.
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::CliConfig;

const LOG_FILE: &str = "client.log";

/// Installs the global subscriber writing to `<log dir>/<session>/client.log`.
///
/// Returns the path of the log file.
pub fn setup_logging(config: &CliConfig) -> Result<PathBuf> {
    let log_dir = config.log_dir.clone().unwrap_or_else(default_log_dir);
    let session_id = config.session_id.clone().unwrap_or_else(generate_session_id);

    let session_log_dir = log_dir.join(&session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "failed to create log directory {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    // The writer must outlive every span; the process exits right after the session.
    std::mem::forget(guard);

    let log_file = session_log_dir.join(LOG_FILE);
    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}", log_file.display());

    Ok(log_file)
}

/// Platform cache directory for logs.
///
/// - macOS: `~/Library/Caches/hive/logs`
/// - Linux: `~/.cache/hive/logs` (or `$XDG_CACHE_HOME/hive/logs`)
/// - Windows: `%LOCALAPPDATA%\hive\cache\logs`
/// - Fallback: `<temp dir>/hive/logs`
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "hive")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("hive"))
        .join("logs")
}

fn generate_session_id() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("session_{timestamp}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_dir_ends_in_logs() {
        assert!(default_log_dir().ends_with("logs"));
    }

    #[test]
    fn session_ids_are_timestamped() {
        let id = generate_session_id();
        let suffix = id.strip_prefix("session_").expect("session prefix");
        assert!(suffix.parse::<u64>().is_ok());
    }
}
