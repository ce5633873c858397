//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console output for interactive use
//! - Configurable log levels, overridable through `RUST_LOG`
//! - JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use pcehr_cda::logging::init_logging;
//! use pcehr_cda::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the start of generating a document
///
/// # Example
///
/// ```no_run
/// use pcehr_cda::log_generation_start;
/// use pcehr_cda::domain::codes::DocumentKind;
///
/// log_generation_start!(DocumentKind::EReferral);
/// ```
#[macro_export]
macro_rules! log_generation_start {
    ($kind:expr) => {
        tracing::info!(
            document_type = %$kind,
            "Starting CDA generation"
        );
    };
}

/// Log a generated document
///
/// # Example
///
/// ```no_run
/// use pcehr_cda::log_generation_complete;
/// use pcehr_cda::domain::codes::DocumentKind;
///
/// log_generation_complete!(DocumentKind::DischargeSummary, 12u128);
/// ```
#[macro_export]
macro_rules! log_generation_complete {
    ($kind:expr, $duration_ms:expr) => {
        tracing::info!(
            document_type = %$kind,
            duration_ms = $duration_ms,
            "CDA generation completed"
        );
    };
}

/// Log every validation message of a rejected document
///
/// # Example
///
/// ```no_run
/// use pcehr_cda::log_validation_failures;
/// use pcehr_cda::core::validation::ValidationMessage;
/// use pcehr_cda::domain::codes::DocumentKind;
///
/// let messages = vec![ValidationMessage::new("EReferral", "Header", "Header is required")];
/// log_validation_failures!(DocumentKind::EReferral, &messages);
/// ```
#[macro_export]
macro_rules! log_validation_failures {
    ($kind:expr, $messages:expr) => {{
        let messages = $messages;
        tracing::warn!(
            document_type = %$kind,
            count = messages.len(),
            "Document failed validation"
        );
        for message in messages.iter() {
            tracing::debug!(
                path = %message.path,
                field = %message.field_name,
                "{}",
                message.message
            );
        }
    }};
}

#[cfg(test)]
mod tests {
    use crate::core::validation::ValidationMessage;
    use crate::domain::codes::DocumentKind;

    #[test]
    fn test_macros_accept_slices_and_vectors() {
        let messages = vec![ValidationMessage::new("EReferral", "Header", "Header is required")];
        crate::log_generation_start!(DocumentKind::EReferral);
        crate::log_validation_failures!(DocumentKind::EReferral, &messages);
        crate::log_validation_failures!(DocumentKind::EReferral, messages.as_slice());
        crate::log_generation_complete!(DocumentKind::EReferral, 3u128);
    }
}
