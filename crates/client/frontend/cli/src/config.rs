//! CLI-specific configuration for the console session.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use runtime::RuntimeConfig;

/// Console session configuration.
///
/// Gameplay constants are fixed; only session plumbing is configurable.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Start in unattended mode without prompting.
    pub autoplay: bool,
    /// Seed for the RNG oracle. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Upper bound on each protocol call. `None` waits forever.
    pub reply_timeout: Option<Duration>,
    /// Overrides the platform log directory.
    pub log_dir: Option<PathBuf>,
    pub session_id: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            autoplay: false,
            seed: None,
            reply_timeout: Some(RuntimeConfig::DEFAULT_REPLY_TIMEOUT),
            log_dir: None,
            session_id: None,
        }
    }
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `HIVE_AUTOPLAY` - Skip prompts and play to completion (default: false)
    /// - `HIVE_SEED` - Seed for reproducible sessions
    /// - `HIVE_REPLY_TIMEOUT_MS` - Protocol call timeout, `0` disables it (default: 5000)
    /// - `HIVE_LOG_DIR` - Directory for session logs
    /// - `HIVE_SESSION_ID` - Session identifier used for the log subdirectory
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(autoplay) = read_bool(&lookup, "HIVE_AUTOPLAY") {
            config.autoplay = autoplay;
        }

        config.seed = read_parsed(&lookup, "HIVE_SEED");

        if let Some(millis) = read_parsed::<u64, _>(&lookup, "HIVE_REPLY_TIMEOUT_MS") {
            config.reply_timeout = (millis > 0).then(|| Duration::from_millis(millis));
        }

        config.log_dir = lookup("HIVE_LOG_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);
        config.session_id = lookup("HIVE_SESSION_ID").filter(|id| !id.trim().is_empty());

        config
    }

    /// Runtime configuration matching this session.
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            reply_timeout: self.reply_timeout,
            seed: self.seed,
            ..RuntimeConfig::default()
        }
    }
}

fn read_parsed<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)?.trim().parse().ok()
}

fn read_bool<F>(lookup: &F, key: &str) -> Option<bool>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
