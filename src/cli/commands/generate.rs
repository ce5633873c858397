//! Generate command implementation
//!
//! Validates a JSON document, maps it to CDA and writes the XML to a file or
//! stdout. Validation messages go to stderr.

use super::read_document;
use crate::cli::{EXIT_CONFIGURATION_ERROR, EXIT_SUCCESS, EXIT_VALIDATION_FAILED};
use crate::config::load_config_or_default;
use crate::core::generator::CdaGenerator;
use crate::core::validation::ValidationReport;
use crate::domain::{CdaError, ClinicalDocument};
use anyhow::Context;
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// JSON document to generate from
    pub input: PathBuf,

    /// File to write the XML to (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self, config_path: Option<&Path>) -> anyhow::Result<i32> {
        let generator = match load_config_or_default(config_path)
            .and_then(|config| CdaGenerator::from_config(&config.generator))
        {
            Ok(generator) => generator,
            Err(e) => {
                eprintln!("❌ Failed to load configuration");
                eprintln!("   Error: {e}");
                return Ok(EXIT_CONFIGURATION_ERROR);
            }
        };

        let document = read_document(&self.input)?;
        let kind = document.kind();

        let xml = match generator.render(&document) {
            Ok(xml) => xml,
            Err(CdaError::Validation { messages }) => {
                eprint!("{}", ValidationReport::new(kind, messages).format_summary());
                return Ok(EXIT_VALIDATION_FAILED);
            }
            Err(e) => return Err(e.into()),
        };

        match &self.output {
            Some(path) => {
                fs::write(path, &xml)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                tracing::info!(output = %path.display(), document_type = %kind, "Wrote CDA document");
            }
            None => println!("{xml}"),
        }

        Ok(EXIT_SUCCESS)
    }
}
