//! Error context extension trait
//!
//! Similar to `anyhow::Context`, but for `Result<T, CdaError>`. The context is
//! prefixed to the message while the error keeps its variant, so callers can
//! still tell a configuration problem from an I/O failure.
//!
//! # Examples
//!
//! ```rust
//! use pcehr_cda::domain::context::ResultExt;
//! use pcehr_cda::domain::{CdaError, Result};
//!
//! fn read_document(path: &str) -> Result<String> {
//!     std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))
//! }
//!
//! let err = read_document("/nonexistent/document.json").unwrap_err();
//! assert!(matches!(err, CdaError::Io(_)));
//! assert!(err.to_string().contains("/nonexistent/document.json"));
//! ```

use crate::domain::errors::CdaError;
use crate::domain::result::Result;
use std::fmt::Display;

/// Extension trait for adding context to `Result` types
pub trait ResultExt<T> {
    /// Add context to an error
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static;

    /// Add context computed only when an error occurs
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<CdaError>,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.map_err(|e| add_context(e.into(), context))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| add_context(e.into(), f()))
    }
}

/// Prefixes `context` to the message; validation errors are returned unchanged
fn add_context(error: CdaError, context: impl Display) -> CdaError {
    match error {
        CdaError::Configuration(message) => CdaError::Configuration(format!("{context}: {message}")),
        CdaError::Serialization(message) => CdaError::Serialization(format!("{context}: {message}")),
        CdaError::Io(message) => CdaError::Io(format!("{context}: {message}")),
        CdaError::Other(message) => CdaError::Other(format!("{context}: {message}")),
        validation @ CdaError::Validation { .. } => validation,
        other => CdaError::Other(format!("{context}: {other}")),
    }
}
