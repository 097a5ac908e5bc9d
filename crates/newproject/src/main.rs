//! newproject CLI - configuration-driven project scaffolding
//!
//! This is the main entry point for the newproject command-line interface.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::Cli;
use commands::new::UsageError;

fn main() -> ExitCode {
    // Parse CLI args
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&e.to_string());
            ExitCode::from(exit_code(&e))
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.check_config {
        return commands::config::check(cli.config.as_deref());
    }
    if cli.list_kinds {
        return commands::kinds::list(cli.config.as_deref());
    }
    commands::new::run(cli)
}

/// Map a fatal error to the process exit status
fn exit_code(err: &anyhow::Error) -> u8 {
    if let Some(e) = err.downcast_ref::<newproject_scaffold::Error>() {
        return u8::try_from(e.exit_code()).unwrap_or(1);
    }
    if err.downcast_ref::<UsageError>().is_some() {
        return 22;
    }
    1
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            // Progress lines go through the output module; logs only carry
            // warnings unless asked for more
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
