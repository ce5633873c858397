//! Validate command implementation
//!
//! Loads a JSON document and prints every validation message it produces.

use super::read_document;
use crate::cli::{EXIT_SUCCESS, EXIT_VALIDATION_FAILED};
use crate::core::generator::validate;
use crate::core::validation::ValidationReport;
use crate::domain::ClinicalDocument;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// JSON document to validate
    pub input: PathBuf,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(input = %self.input.display(), "Validating document");

        let document = read_document(&self.input)?;
        let report = ValidationReport::new(document.kind(), validate(&document));

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print!("{}", report.format_summary());
        }

        if report.is_valid() {
            Ok(EXIT_SUCCESS)
        } else {
            crate::log_validation_failures!(report.document_kind, &report.messages);
            Ok(EXIT_VALIDATION_FAILED)
        }
    }
}
