//! Runtime configuration resolution.
//!
//! # Responsibility
//! - Resolve the data file path and logging settings from the environment.
//! - Parse log levels into a typed value shared with `logging`.
//!
//! # Invariants
//! - Blank environment values are ignored, never treated as paths.
//! - Resolution never touches the file system.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;

/// Overrides the data file path.
pub const DATA_PATH_ENV: &str = "LIFEMANAGER_DATA_PATH";
/// Overrides the log level (`trace|debug|info|warn|error`).
pub const LOG_LEVEL_ENV: &str = "LIFEMANAGER_LOG_LEVEL";
/// Enables file logging into this absolute directory.
pub const LOG_DIR_ENV: &str = "LIFEMANAGER_LOG_DIR";

/// Data file name used when no path is configured.
pub const DEFAULT_DATA_FILE_NAME: &str = "life_manager_data.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnsupportedLogLevel(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLogLevel(value) => write!(
                f,
                "unsupported log level `{value}`; expected trace|debug|info|warn|error"
            ),
        }
    }
}

impl Error for ConfigError {}

/// Log verbosity accepted by [`crate::logging::init_logging`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `debug` for debug builds, `info` for release builds.
    pub fn build_default() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Info
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(ConfigError::UnsupportedLogLevel(other.to_string())),
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Effective core configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// JSON document holding tasks and goals.
    pub data_path: PathBuf,
    pub log_level: LogLevel,
    /// File logging directory; `None` disables file logging.
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE_NAME),
            log_level: LogLevel::build_default(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Resolves configuration from process environment variables.
    ///
    /// # Errors
    /// - `UnsupportedLogLevel` when `LIFEMANAGER_LOG_LEVEL` is set to an
    ///   unknown level.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(path) = non_blank(DATA_PATH_ENV) {
            config.data_path = PathBuf::from(path);
        }
        if let Some(level) = non_blank(LOG_LEVEL_ENV) {
            config.log_level = level.parse()?;
        }
        config.log_dir = non_blank(LOG_DIR_ENV).map(PathBuf::from);
        Ok(config)
    }
}
