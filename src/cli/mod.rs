//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for PCEHR CDA using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Exit code for success
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code when a document produced validation messages
pub const EXIT_VALIDATION_FAILED: i32 = 1;
/// Exit code for configuration problems
pub const EXIT_CONFIGURATION_ERROR: i32 = 2;
/// Exit code for any other failure
pub const EXIT_FATAL: i32 = 5;

/// PCEHR CDA - Clinical document generator
#[derive(Parser, Debug)]
#[command(name = "pcehr-cda")]
#[command(version, about, long_about = None)]
#[command(author = "PCEHR CDA Contributors")]
pub struct Cli {
    /// Path to configuration file (defaults to pcehr-cda.toml when present)
    #[arg(short, long, env = "PCEHR_CDA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PCEHR_CDA_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a JSON document and list every validation message
    Validate(commands::validate::ValidateArgs),

    /// Validate a JSON document and write its CDA XML
    Generate(commands::generate::GenerateArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate_config::ValidateConfigArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

impl Cli {
    /// Runs the selected command and returns its exit code
    pub fn execute(&self) -> anyhow::Result<i32> {
        let config_path = self.config.as_deref();
        match &self.command {
            Commands::Validate(args) => args.execute(),
            Commands::Generate(args) => args.execute(config_path),
            Commands::ValidateConfig(args) => args.execute(config_path),
            Commands::Init(args) => args.execute(),
        }
    }
}
