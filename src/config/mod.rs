//! Configuration system for desk-bluetooth
//!
//! Layered configuration resolution: built-in defaults, an optional YAML
//! file, environment variables, and explicit command-line flag overrides,
//! merged in that order of increasing precedence.

mod defaults;
pub mod loader;
pub mod paths;
pub mod schema;

pub use loader::{ConfigError, ConfigLoader, FlagOverrides};
pub use schema::{Config, LogConfig, APP_NAME};
