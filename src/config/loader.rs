//! Configuration file loading with precedence handling.

use crate::history::DEFAULT_HISTORY_CAPACITY;
use crate::search::{DEFAULT_SUGGESTION_LIMIT, DEFAULT_TRENDING_LIMIT};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "SCOUT_CONFIG";

/// Environment variable overriding the history file location.
pub const HISTORY_PATH_ENV_VAR: &str = "SCOUT_HISTORY_PATH";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/scout/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Maximum suggestions per keystroke.
    #[serde(default)]
    pub suggestion_limit: Option<usize>,

    /// Number of recent searches kept.
    #[serde(default)]
    pub history_capacity: Option<usize>,

    /// Number of trending terms shown.
    #[serde(default)]
    pub trending_limit: Option<usize>,

    /// Where recent searches are persisted.
    #[serde(default)]
    pub history_file_path: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file and env vars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Maximum suggestions per keystroke (at most 10).
    pub suggestion_limit: usize,
    /// Number of recent searches kept (at most 5).
    pub history_capacity: usize,
    /// Number of trending terms shown.
    pub trending_limit: usize,
    /// Where recent searches are persisted.
    pub history_file_path: PathBuf,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            trending_limit: DEFAULT_TRENDING_LIMIT,
            history_file_path: default_history_path(),
            log_file_path: default_log_path(),
        }
    }
}

/// Platform state directory for scout, or the current directory if unknown.
fn state_dir() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .map(|dir| dir.join("scout"))
        .unwrap_or_default()
}

/// Default log file path: `~/.local/state/scout/scout.log` on Linux.
pub fn default_log_path() -> PathBuf {
    state_dir().join("scout.log")
}

/// Default history file path: `~/.local/state/scout/history.json` on Linux.
pub fn default_history_path() -> PathBuf {
    state_dir().join("history.json")
}

/// Resolve default config file path.
///
/// Returns `~/.config/scout/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("scout").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        // Missing file is not an error - use defaults
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ConfigError::ReadError {
                path,
                reason: e.to_string(),
            })
        }
    };

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument
/// 2. `SCOUT_CONFIG` environment variable
/// 3. Default path `~/.config/scout/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    match default_config_path() {
        Some(default_path) => load_config_file(default_path),
        None => Ok(None),
    }
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
/// The suggestion limit and history capacity may be lowered but never raised
/// above their defaults (10 suggestions, 5 recent searches).
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        suggestion_limit: config
            .suggestion_limit
            .map_or(defaults.suggestion_limit, |limit| limit.min(DEFAULT_SUGGESTION_LIMIT)),
        history_capacity: config
            .history_capacity
            .map_or(defaults.history_capacity, |capacity| capacity.min(DEFAULT_HISTORY_CAPACITY)),
        trending_limit: config.trending_limit.unwrap_or(defaults.trending_limit),
        history_file_path: config
            .history_file_path
            .unwrap_or(defaults.history_file_path),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `SCOUT_HISTORY_PATH`: Override history file location
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(path) = std::env::var(HISTORY_PATH_ENV_VAR) {
        config.history_file_path = PathBuf::from(path);
    }

    config
}

/// Full resolution: precedence load, merge with defaults, env overrides.
///
/// Precedence chain: Defaults → Config File → Env Vars (highest)
pub fn resolve(config_path: Option<PathBuf>) -> Result<ResolvedConfig, ConfigError> {
    let file = load_config_with_precedence(config_path)?;
    Ok(apply_env_overrides(merge_config(file)))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
