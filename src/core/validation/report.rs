//! Validation report for command-line output

use super::message::ValidationMessage;
use crate::domain::codes::DocumentKind;
use serde::{Deserialize, Serialize};

/// Outcome of validating one document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Type of the validated document
    pub document_kind: DocumentKind,

    /// Every message produced, in traversal order
    pub messages: Vec<ValidationMessage>,
}

impl ValidationReport {
    pub fn new(document_kind: DocumentKind, messages: Vec<ValidationMessage>) -> Self {
        Self {
            document_kind,
            messages,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.messages.is_empty()
    }

    /// Format the report as a human-readable string
    pub fn format_summary(&self) -> String {
        let mut summary = String::new();
        summary.push_str(&format!("📋 Validation Report: {}\n", self.document_kind));
        if self.is_valid() {
            summary.push_str("  ✅ No validation messages\n");
            return summary;
        }

        summary.push_str(&format!("  ❌ {} validation message(s)\n", self.messages.len()));
        for message in &self.messages {
            summary.push_str(&format!("    - {message}\n"));
        }
        summary
    }
}
