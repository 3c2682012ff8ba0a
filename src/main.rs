use std::process;

use clap::Parser;

use snapctl::cli::{Cli, Mode};
use snapctl::client::ClusterClient;
use snapctl::commands;
use snapctl::error::{Result, SnapctlError};
use snapctl::prompt::StdinConfirmation;

fn main() {
    // Initialize logger (RUST_LOG=debug snapctl ...)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("error: {}", err);
        process::exit(err.exit_code());
    }
}

fn run(cli: &Cli) -> Result<()> {
    let repository = cli
        .repository
        .as_deref()
        .ok_or(SnapctlError::MissingArgument("repository"))?;

    let client = ClusterClient::new(&cli.endpoint)?;

    match cli.mode() {
        Mode::List => commands::list(&client, repository, cli.snapshot.as_deref()),
        Mode::Restore { target } => commands::restore(
            &client,
            repository,
            cli.snapshot.as_deref(),
            target,
            cli.indices.as_deref(),
            &mut StdinConfirmation,
        ),
        Mode::Create => commands::create(
            &client,
            repository,
            cli.snapshot.as_deref(),
            cli.indices.as_deref(),
            &cli.location,
            &cli.wait,
        ),
    }
}
