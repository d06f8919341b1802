//! Configuration loading and merging logic
//!
//! Handles loading configuration from multiple sources and merging them
//! according to precedence rules.

use super::{defaults, paths, schema::Config};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration load failure. Fatal: surfaced to the caller, logged at
/// error severity and the process exits non-zero.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Command-line values that override the file and environment layers.
/// `Some` means the flag was explicitly passed on the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlagOverrides {
    pub console: Option<bool>,
    pub verbose: Option<bool>,
}

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with all layers merged
    ///
    /// Precedence order (highest to lowest):
    /// 1. Explicit command-line flag values
    /// 2. Environment variable overrides
    /// 3. Configuration file
    /// 4. Built-in defaults
    ///
    /// An explicit `path` must exist and parse. With no explicit path the
    /// default location is used when a file is present there; an absent
    /// file falls back to defaults, a malformed one is still an error.
    pub fn load(path: Option<&Path>, overrides: &FlagOverrides) -> Result<Config, ConfigError> {
        let mut config = match path {
            Some(path) => Self::load_file(path)?,
            None => {
                let default_path = paths::default_config_path();
                if default_path.exists() {
                    Self::load_file(&default_path)?
                } else {
                    Self::load_defaults()
                }
            }
        };

        config = Self::apply_env_overrides(config);
        config = Self::apply_flag_overrides(config, overrides);

        Ok(config)
    }

    /// Load configuration from a file. Fields missing from the file take
    /// their built-in default values.
    pub fn load_file(path: &Path) -> Result<Config, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the built-in default configuration
    pub fn load_defaults() -> Config {
        defaults::default_config()
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut config: Config) -> Config {
        if let Ok(console) = std::env::var("DESK_BLUETOOTH_LOG_CONSOLE") {
            if let Ok(val) = console.parse::<bool>() {
                config.log.console = val;
            }
        }

        if let Ok(verbose) = std::env::var("DESK_BLUETOOTH_LOG_VERBOSE") {
            if let Ok(val) = verbose.parse::<bool>() {
                config.log.verbose = val;
            }
        }

        if let Ok(level) = std::env::var("DESK_BLUETOOTH_LOG_LEVEL") {
            config.log.level = level;
        }

        config
    }

    /// Apply explicit command-line flag overrides
    fn apply_flag_overrides(mut config: Config, overrides: &FlagOverrides) -> Config {
        if let Some(console) = overrides.console {
            config.log.console = console;
        }
        if let Some(verbose) = overrides.verbose {
            config.log.verbose = verbose;
        }
        config
    }
}
