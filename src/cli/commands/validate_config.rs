//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the PCEHR CDA configuration file.

use crate::cli::{EXIT_CONFIGURATION_ERROR, EXIT_SUCCESS};
use crate::config::{load_config_or_default, DEFAULT_CONFIG_PATH};
use clap::Args;
use std::path::Path;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateConfigArgs {}

impl ValidateConfigArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: Option<&Path>) -> anyhow::Result<i32> {
        let shown = config_path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
        tracing::info!(config_path = %shown, "Validating configuration");

        println!("🔍 Validating configuration file: {shown}");
        println!();

        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIGURATION_ERROR);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Narrative Mode: {}", config.generator.narrative_mode);
        println!("  XML Declaration: {}", config.generator.xml_declaration);
        println!("  Indent: {}", config.generator.indent);
        println!(
            "  Fail On Validation Errors: {}",
            config.generator.fail_on_validation_errors
        );
        if config.logging.local_enabled {
            println!(
                "  File Logging: {} ({})",
                config.logging.local_path, config.logging.local_rotation
            );
        } else {
            println!("  File Logging: disabled");
        }
        println!();
        Ok(EXIT_SUCCESS)
    }
}
