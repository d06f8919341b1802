//! desk-bluetooth - CLI bootstrap for the desk-bluetooth service
//!
//! Builds the command tree, resolves layered configuration, initializes
//! structured logging in two phases, and dispatches to the selected
//! subcommand.

use clap::Parser;
use desk_bluetooth::cli::{self, Cli, logging};
use desk_bluetooth::config::LogConfig;

fn main() {
    let cli = Cli::parse();

    // bootstrap logger, replaced inside cli::run once configuration has
    // been resolved; still the active instance if resolution fails
    let mut logger = logging::build_logger(&LogConfig::bootstrap());

    if let Err(err) = cli::run(&cli, &mut logger) {
        let message = format!("{:#}", err);
        tracing::dispatcher::with_default(&logger, || {
            tracing::error!(error = %message, "exiting from fatal error");
        });
        std::process::exit(1);
    }
}
