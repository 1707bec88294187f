//
//  logfire-cli
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use console::style;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use logfire_cli::api::{ErrorKind, LogfireError};
use logfire_cli::cli::{Cli, Commands};
use logfire_cli::exit_codes;
use logfire_cli::interactive::Cancelled;

#[tokio::main]
async fn main() {
    // Initialize logging
    init_logging();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command
    let code = match run(cli).await {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => report(&e),
    };
    std::process::exit(code);
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("LOGFIRE_CLI_DEBUG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Main command dispatcher
async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::List(cmd) => cmd.run(&cli.global).await,
        Commands::Get(cmd) => cmd.run(&cli.global).await,
        Commands::Pull(cmd) => cmd.run(&cli.global).await,
        Commands::Push(cmd) => cmd.run(&cli.global).await,
        Commands::Delete(cmd) => cmd.run(&cli.global).await,
        Commands::Lint(cmd) => cmd.run(&cli.global).await,
        Commands::Init(cmd) => cmd.run(&cli.global).await,
        Commands::Config(cmd) => cmd.run(&cli.global).await,
        Commands::Completion(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("{} version {}", logfire_cli::APP_NAME, logfire_cli::VERSION);
            Ok(())
        }
    }
}

/// Prints the error and picks the exit code from the first typed error in
/// the chain.
fn report(err: &anyhow::Error) -> i32 {
    if err.chain().any(|cause| cause.is::<Cancelled>()) {
        eprintln!("Cancelled.");
        return exit_codes::CANCELLED;
    }

    eprintln!("{} {:#}", style("Error:").red().bold(), err);

    let api_error = err.chain().find_map(|cause| cause.downcast_ref::<LogfireError>());
    if let Some(api_error) = api_error {
        return match api_error.kind() {
            ErrorKind::Authentication => {
                eprintln!("Check your LOGFIRE_TOKEN environment variable.");
                exit_codes::AUTH_ERROR
            }
            ErrorKind::NotFound => exit_codes::NOT_FOUND,
            ErrorKind::Usage => exit_codes::USAGE,
            ErrorKind::Client => exit_codes::ERROR,
        };
    }

    exit_codes::ERROR
}
