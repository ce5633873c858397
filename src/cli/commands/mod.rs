//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod generate;
pub mod init;
pub mod validate;
pub mod validate_config;

use crate::domain::AnyDocument;
use anyhow::Context;
use std::fs;
use std::path::Path;

/// Reads a JSON document tagged with `document_type`
pub(crate) fn read_document(path: &Path) -> anyhow::Result<AnyDocument> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input document {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse input document {}", path.display()))
}
