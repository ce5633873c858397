// PCEHR CDA - Clinical document generator for Australian national e-health documents
// Copyright (c) 2025 PCEHR CDA Contributors
// Licensed under the MIT License

use clap::Parser;
use pcehr_cda::cli::{Cli, EXIT_FATAL};
use pcehr_cda::config::{load_config_or_default, CdaConfig};
use pcehr_cda::logging::init_logging;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Configuration errors are reported by the command itself
    let config = load_config_or_default(cli.config.as_deref()).unwrap_or_else(|_| CdaConfig::default());
    let log_level = cli
        .log_level
        .as_deref()
        .unwrap_or(&config.application.log_level);

    let guard = match init_logging(log_level, &config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(EXIT_FATAL);
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "PCEHR CDA generator");

    let exit_code = match cli.execute() {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e:#}");
            EXIT_FATAL
        }
    };

    // Flush file logs before exiting
    drop(guard);
    process::exit(exit_code);
}
