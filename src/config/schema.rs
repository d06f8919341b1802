//! Configuration schema definitions
//!
//! Defines the structure of the configuration file using serde. Every field
//! carries a serde default so a partial file merges cleanly over the
//! built-in defaults.

use serde::{Deserialize, Serialize};

/// Application name, attached to every log record.
pub const APP_NAME: &str = "desk-bluetooth";

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Service name reported in logs
    #[serde(default = "default_name")]
    pub name: String,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogConfig {
    /// Use the human-readable console writer instead of JSON lines
    #[serde(default = "default_false")]
    pub console: bool,

    /// Force debug verbosity regardless of `level`
    #[serde(default = "default_false")]
    pub verbose: bool,

    /// Severity threshold name ("trace", "debug", "info", "warn", "error").
    /// Unrecognized values fall back to "info" at logger construction.
    #[serde(default = "default_level")]
    pub level: String,
}

impl LogConfig {
    /// Logging configuration used before the resolver has run: structured
    /// output at debug severity, so configuration errors are always visible.
    pub fn bootstrap() -> Self {
        Self {
            console: false,
            verbose: false,
            level: "debug".to_string(),
        }
    }
}

// Default value functions
fn default_name() -> String {
    APP_NAME.to_string()
}

fn default_false() -> bool {
    false
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: default_name(),
            log: LogConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            console: default_false(),
            verbose: default_false(),
            level: default_level(),
        }
    }
}
