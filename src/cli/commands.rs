//! CLI command tree and dispatch
//!
//! Every invocation runs a pre-run phase first: resolve the configuration
//! under the bootstrap logger, then swap in the logger built from the
//! resolved config before the selected command's own action runs.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use tracing::Dispatch;

use crate::cli::{logging, version};
use crate::config::{Config, ConfigLoader, FlagOverrides, paths};

/// Run the desk-bluetooth service
#[derive(Parser, Debug)]
#[command(name = "desk-bluetooth")]
#[command(about = "Run the desk-bluetooth service", long_about = None)]
pub struct Cli {
    /// Path to configuration file (default is ~/.config/desk-bluetooth/config.yaml)
    #[arg(long, short = 'c', global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Use the console log writer
    #[arg(long, global = true)]
    pub console: bool,

    /// Verbose logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Main commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Prints the build version
    Version,
    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

/// Configuration management subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Print the effective merged configuration
    Show,
    /// Show the default configuration file path
    Path,
    /// Validate the configuration
    Validate,
}

impl Cli {
    /// Flag values the user explicitly set on the command line. A boolean
    /// flag that was not passed stays `None` so it cannot shadow file or
    /// environment values.
    pub fn flag_overrides(&self) -> FlagOverrides {
        FlagOverrides {
            console: self.console.then_some(true),
            verbose: self.verbose.then_some(true),
        }
    }
}

/// Execute the selected command.
///
/// `logger` holds the active logger instance: a bootstrap value on entry,
/// replaced with the config-derived one once the pre-run phase resolves
/// the configuration. The caller keeps it for fatal-error reporting.
pub fn run(cli: &Cli, logger: &mut Dispatch) -> Result<()> {
    // pre-run: resolve configuration under the bootstrap logger so load
    // failures are reported through a working logger
    let config = tracing::dispatcher::with_default(logger, || {
        ConfigLoader::load(cli.config.as_deref(), &cli.flag_overrides())
    })
    .context("loading configuration")?;

    // swap the bootstrap logger for the resolved one
    *logger = logging::build_logger(&config.log);

    tracing::dispatcher::with_default(logger, || {
        // config tooling writes machine-readable stdout; keep it free of
        // log records
        if !matches!(cli.command, Some(Command::Config { .. })) {
            tracing::debug!(name = %config.name, "configuration loaded");
        }
        match &cli.command {
            None => {
                Cli::command().print_help()?;
                Ok(())
            }
            Some(Command::Version) => {
                version::write(&mut io::stdout())?;
                Ok(())
            }
            Some(Command::Config { subcommand }) => handle_config_command(subcommand, &config),
        }
    })
}

/// Handle configuration subcommands
fn handle_config_command(cmd: &ConfigSubcommand, config: &Config) -> Result<()> {
    match cmd {
        ConfigSubcommand::Show => {
            let yaml =
                serde_yaml::to_string(config).context("serializing configuration")?;
            print!("{}", yaml);
        }
        ConfigSubcommand::Path => {
            println!("{}", paths::default_config_path().display());
        }
        ConfigSubcommand::Validate => {
            // reaching this point means the pre-run phase already loaded
            // and merged the configuration successfully
            println!("configuration is valid");
        }
    }
    Ok(())
}
