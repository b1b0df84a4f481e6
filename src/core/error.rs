//! Error types for configuration loading.
//!
//! Nothing inside a running frame returns these. The simulation recovers
//! locally from bad values (see `environment::timeline`) and keeps going;
//! only start-up work such as reading `config.toml` can fail.

use std::fmt;
use std::path::PathBuf;

/// Failure while loading or validating a [`crate::core::config::GameConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file was read but is not valid TOML for the config schema.
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A value parsed fine but is outside the range the simulation accepts.
    Invalid {
        /// Dotted key, e.g. `world.width`.
        field: &'static str,
        value: f64,
        /// Human-readable description of the accepted range.
        expected: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "could not read {}: {}", path.display(), source)
            }
            ConfigError::Parse { path, source } => {
                write!(f, "could not parse {}: {}", path.display(), source)
            }
            ConfigError::Invalid {
                field,
                value,
                expected,
            } => write!(f, "config value '{}' = {} must be {}", field, value, expected),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::Invalid { .. } => None,
        }
    }
}

/// Convenience alias: a `Result` using `ConfigError` as the error type.
pub type ConfigResult<T> = Result<T, ConfigError>;
