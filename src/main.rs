mod cli;
mod error;
mod init;
mod notifier;
mod send;
mod store;
mod token;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Send { path, method, data } => send::execute(send::SendArgs {
            path,
            method,
            data,
            config_path: cli.config,
            store_path: cli.store,
            verbose: cli.verbose,
        }),
        Commands::Token { action } => token::execute(action, &cli.config, cli.store.as_deref()),
        Commands::Init { force } => init::execute(&cli.config, force),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
