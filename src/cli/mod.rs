//! CLI command handling module
//!
//! Command tree, two-phase logger construction, and the version report.

pub mod commands;
pub mod logging;
pub mod version;

pub use commands::{Cli, Command, ConfigSubcommand, run};
pub use logging::build_logger;
