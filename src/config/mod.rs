//! Configuration management for PCEHR CDA.
//!
//! This module provides TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! PCEHR CDA uses an optional TOML configuration file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `PCEHR_CDA_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pcehr_cda::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("pcehr-cda.toml")?;
//!
//! println!("Narrative: {}", config.generator.narrative_mode);
//! println!("Log level: {}", config.application.log_level);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Application settings (log level)
//! - [`GeneratorConfig`] - Narrative mode, XML declaration, indent width and
//!   whether validation messages stop generation
//! - [`LoggingConfig`] - Local JSON file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [generator]
//! narrative_mode = "table"
//! xml_declaration = true
//! indent = 2
//! fail_on_validation_errors = true
//!
//! [logging]
//! local_enabled = true
//! local_path = "${PCEHR_CDA_LOG_DIR}"
//! local_rotation = "daily"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default, parse_config, DEFAULT_CONFIG_PATH};
pub use schema::{ApplicationConfig, CdaConfig, GeneratorConfig, LoggingConfig};
