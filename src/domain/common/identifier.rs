//! Instance identifiers

use crate::core::validation::{Presence, Validate, ValidationBuilder};
use crate::domain::ids::{is_valid_identifier_root, HealthcareIdentifier};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An `II` identifier: root OID or UUID plus optional extension
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Identifier {
    pub root: Option<String>,
    pub extension: Option<String>,
    pub assigning_authority_name: Option<String>,
}

impl Identifier {
    pub fn new(root: impl Into<String>, extension: Option<String>) -> Self {
        Self {
            root: Some(root.into()),
            extension,
            assigning_authority_name: None,
        }
    }

    pub fn from_uuid(id: Uuid) -> Self {
        Self::new(id.to_string(), None)
    }

    /// IHI, HPI-I or HPI-O expressed under the healthcare identifier arc
    pub fn from_healthcare_identifier(id: &HealthcareIdentifier) -> Self {
        Self {
            root: Some(id.to_oid()),
            extension: None,
            assigning_authority_name: Some(id.kind().authority_name().to_string()),
        }
    }

    pub fn with_authority(mut self, name: impl Into<String>) -> Self {
        self.assigning_authority_name = Some(name.into());
        self
    }
}

impl Presence for Identifier {
    fn is_present(&self) -> bool {
        self.root.is_present() || self.extension.is_present()
    }
}

impl Validate for Identifier {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        if let Some(root) = self.root.as_deref().filter(|r| r.is_present()) {
            vb.condition_check(
                path,
                "Root",
                is_valid_identifier_root(root),
                format!("Root '{root}' must be a valid OID or UUID"),
            );
        } else {
            vb.argument_required_check(path, "Root", &self.root);
        }
    }
}
