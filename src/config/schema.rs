//! Configuration schema types
//!
//! This module defines the configuration structure for PCEHR CDA.

use crate::core::narrative::NarrativeMode;
use serde::{Deserialize, Serialize};

/// Largest accepted XML indent width
pub const MAX_INDENT: usize = 8;

/// Main PCEHR CDA configuration
///
/// This is the root configuration structure that maps to the TOML file.
/// Every section may be omitted, in which case its defaults apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CdaConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Generation and output settings
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CdaConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.generator.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Generation and serialisation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Narrative generator: "table" or "empty"
    #[serde(default = "default_narrative_mode")]
    pub narrative_mode: String,

    /// Write the `<?xml ...?>` declaration
    #[serde(default = "default_true")]
    pub xml_declaration: bool,

    /// Spaces per nesting level, 0 for compact output
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Refuse to generate documents that produced validation messages
    #[serde(default = "default_true")]
    pub fail_on_validation_errors: bool,
}

impl GeneratorConfig {
    fn validate(&self) -> Result<(), String> {
        self.narrative_mode
            .parse::<NarrativeMode>()
            .map_err(|_| {
                format!(
                    "Invalid generator.narrative_mode '{}'. Must be one of: table, empty",
                    self.narrative_mode
                )
            })?;

        if self.indent > MAX_INDENT {
            return Err(format!("generator.indent must be <= {MAX_INDENT}"));
        }

        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            narrative_mode: default_narrative_mode(),
            xml_declaration: true,
            indent: default_indent(),
            fail_on_validation_errors: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Write JSON logs to rolling files
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Rotation policy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path is required when local logging is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_narrative_mode() -> String {
    NarrativeMode::default().to_string()
}

fn default_true() -> bool {
    true
}

fn default_indent() -> usize {
    2
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
