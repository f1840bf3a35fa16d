mod cli;
mod commands;
mod domain;
mod services;

pub use cli::{Cli, Commands, ConfigCommands, HistoryCommands, ServiceCommands};
pub use domain::models::*;
pub use services::catalog::*;
pub use services::ledger;
pub use services::output::*;
pub use services::pricing::*;
pub use services::storage::*;
pub use services::summary::*;

use clap::Parser;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        emit_error(cli.json, &err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    // All state is loaded whole up front and passed explicitly; every
    // mutation rewrites its record in full.
    let mut config = load_config()?;
    let mut services = load_services()?;

    if commands::handle_config_commands(cli, &mut config)? {
        return Ok(());
    }
    if commands::handle_service_commands(cli, &mut services)? {
        return Ok(());
    }

    commands::handle_runtime_commands(cli, &config, &mut services)
}
