//! Domain error types
//!
//! This module defines the error hierarchy for the CDA pipeline. Validation
//! problems are reported as collected messages; the error type only carries
//! them once a caller decides they are fatal.

use crate::core::validation::ValidationMessage;
use thiserror::Error;

/// Main error type
///
/// This is the primary error type used throughout the library and binary.
#[derive(Debug, Error)]
pub enum CdaError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A document failed business-rule validation
    #[error("Validation failed with {} message(s)", messages.len())]
    Validation { messages: Vec<ValidationMessage> },

    /// Mapping a document to CDA failed
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl CdaError {
    /// Validation messages carried by this error, empty for other variants
    pub fn validation_messages(&self) -> &[ValidationMessage] {
        match self {
            CdaError::Validation { messages } => messages,
            _ => &[],
        }
    }
}

/// Errors raised while mapping a validated document to the CDA tree
///
/// A validated document should never produce these; they surface when a
/// field that validation treats as mandatory is still absent at mapping time.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// A mandatory field was absent during mapping
    #[error("Missing mandatory field: {0}")]
    MissingField(String),

    /// A value could not be rendered in its CDA form
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    /// Writing the XML output failed
    #[error("XML write failed: {0}")]
    XmlWrite(String),
}

impl GenerationError {
    /// Convenience constructor for a missing mandatory field
    pub fn missing(field: impl Into<String>) -> Self {
        GenerationError::MissingField(field.into())
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for CdaError {
    fn from(err: std::io::Error) -> Self {
        CdaError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for CdaError {
    fn from(err: serde_json::Error) -> Self {
        CdaError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for CdaError {
    fn from(err: toml::de::Error) -> Self {
        CdaError::Configuration(format!("TOML parse error: {err}"))
    }
}
