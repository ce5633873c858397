//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use crate::cli::{EXIT_CONFIGURATION_ERROR, EXIT_FATAL, EXIT_SUCCESS};
use crate::config::DEFAULT_CONFIG_PATH;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output.display(), "Initializing configuration file");

        println!("📝 Initializing PCEHR CDA configuration");
        println!();

        if self.output.exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output.display());
            println!("   Use --force to overwrite");
            return Ok(EXIT_CONFIGURATION_ERROR);
        }

        match fs::write(&self.output, Self::default_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output.display());
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output.display());
                println!("  2. Validate configuration: pcehr-cda validate-config");
                println!("  3. Generate a document: pcehr-cda generate document.json -o document.xml");
                println!();
                Ok(EXIT_SUCCESS)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(EXIT_FATAL)
            }
        }
    }

    /// Default configuration with comments
    pub fn default_config() -> &'static str {
        r#"# PCEHR CDA Configuration File
# Every setting may be overridden with PCEHR_CDA_<SECTION>_<KEY>,
# e.g. PCEHR_CDA_GENERATOR_NARRATIVE_MODE=empty

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# ============================================================================
# Generator Configuration
# ============================================================================
[generator]
# Section narrative: "table" renders entries as tables and lists,
# "empty" writes an empty <text/> unless a custom narrative is supplied
narrative_mode = "table"

# Write the <?xml ...?> declaration
xml_declaration = true

# Spaces per nesting level (0 for compact output, at most 8)
indent = 2

# Refuse to generate documents that produce validation messages
fail_on_validation_errors = true

# ============================================================================
# Logging Configuration
# ============================================================================
[logging]
# Write JSON logs to rolling files in addition to the console
local_enabled = false

# Log directory
local_path = "logs"

# Log rotation (daily, hourly or never)
local_rotation = "daily"
"#
    }
}
