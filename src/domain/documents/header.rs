//! Header and context shared by every document

use crate::core::validation::{Presence, Validate, ValidationBuilder};
use crate::domain::codes::DocumentStatus;
use crate::domain::common::{
    Author, Custodian, Identifier, IsoDateTime, LegalAuthenticator, Participant, SubjectOfCare,
};
use serde::{Deserialize, Serialize};

/// Administrative header of a clinical document
///
/// The creation time is supplied by the caller so that generating the same
/// document twice gives the same output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentHeader {
    pub document_id: Option<Identifier>,
    pub set_id: Option<Identifier>,
    pub version_number: Option<u32>,
    pub creation_time: Option<IsoDateTime>,
    pub status: Option<DocumentStatus>,
}

impl DocumentHeader {
    pub fn new(document_id: Identifier, creation_time: IsoDateTime, status: DocumentStatus) -> Self {
        Self {
            document_id: Some(document_id),
            set_id: None,
            version_number: None,
            creation_time: Some(creation_time),
            status: Some(status),
        }
    }
}

impl Presence for DocumentHeader {}

impl Validate for DocumentHeader {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.validate_required(path, "DocumentId", self.document_id.as_ref());
        vb.validate_optional(path, "SetId", self.set_id.as_ref());
        if let Some(version) = self.version_number {
            vb.condition_check(path, "VersionNumber", version >= 1, "VersionNumber must be at least 1");
        }
        vb.argument_required_check(path, "CreationTime", &self.creation_time);
        vb.argument_required_check(path, "Status", &self.status);
    }
}

/// Participations every document carries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentContext {
    pub subject_of_care: Option<SubjectOfCare>,
    pub author: Option<Author>,
    pub custodian: Option<Custodian>,
    pub legal_authenticator: Option<LegalAuthenticator>,
}

impl DocumentContext {
    /// Participants in header order
    pub fn participants(&self) -> Vec<&Participant> {
        [
            self.subject_of_care.as_ref().and_then(|s| s.participant.as_ref()),
            self.author.as_ref().and_then(|a| a.participant.as_ref()),
            self.custodian.as_ref().and_then(|c| c.participant.as_ref()),
            self.legal_authenticator.as_ref().and_then(|l| l.participant.as_ref()),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

impl Presence for DocumentContext {}

impl Validate for DocumentContext {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.validate_required(path, "SubjectOfCare", self.subject_of_care.as_ref());
        vb.validate_required(path, "Author", self.author.as_ref());
        vb.validate_required(path, "Custodian", self.custodian.as_ref());
        vb.validate_optional(path, "LegalAuthenticator", self.legal_authenticator.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_required_fields() {
        let mut vb = ValidationBuilder::new();
        DocumentHeader {
            version_number: Some(0),
            ..Default::default()
        }
        .validate("Doc.Header", &mut vb);
        let fields: Vec<_> = vb.messages().iter().map(|m| m.field_name.as_str()).collect();
        assert_eq!(fields, vec!["DocumentId", "VersionNumber", "CreationTime", "Status"]);
    }

    #[test]
    fn test_context_requires_core_roles() {
        let mut vb = ValidationBuilder::new();
        DocumentContext::default().validate("Doc.Context", &mut vb);
        assert_eq!(vb.len(), 3);
        assert!(DocumentContext::default().participants().is_empty());
    }
}
