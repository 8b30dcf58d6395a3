//! robots CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments or manifest
//! - 3: Validation failure
//! - 4: Persistence failure

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use robots_core::ValidationError;
use robots_writer::PersistenceError;

mod commands;
mod manifest;

use commands::{Cli, Commands};
use manifest::ManifestError;

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const VALIDATION_FAILURE: u8 = 3;
    pub const PERSISTENCE_FAILURE: u8 = 4;
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        "robots=debug"
    } else if cli.quiet {
        "robots=error"
    } else {
        "robots=info"
    };

    // RUST_LOG takes precedence over -v/-q
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},warn", level)));

    // Logging may already be initialized; keep going either way
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let result = match cli.command {
        Commands::Build(args) => commands::build::execute(args),
        Commands::Check(args) => commands::check::execute(args),
        Commands::Crawlers(args) => commands::crawlers::execute(args),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    let mut code = ExitCodes::GENERAL_ERROR;

    for cause in e.chain() {
        if cause.downcast_ref::<ValidationError>().is_some() {
            return ExitCodes::VALIDATION_FAILURE;
        }
        if cause.downcast_ref::<PersistenceError>().is_some() {
            return ExitCodes::PERSISTENCE_FAILURE;
        }
        if cause.downcast_ref::<ManifestError>().is_some() {
            code = ExitCodes::INVALID_ARGS;
        }
    }

    code
}
