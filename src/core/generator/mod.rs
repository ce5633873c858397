//! CDA generation pipeline
//!
//! Generation is split in two steps. [`validate`] walks the whole document and
//! returns every message it finds; [`Validated::new`] turns an empty result
//! into a marker that [`generate`] accepts. Mapping never panics: a field that
//! is still missing at mapping time becomes a
//! [`GenerationError`](crate::domain::GenerationError).
//!
//! [`CdaGenerator`] bundles both steps with a configured narrative generator
//! and writer options.
//!
//! ```rust
//! use pcehr_cda::core::generator::validate;
//! use pcehr_cda::domain::documents::ConsumerEnteredNotes;
//!
//! let messages = validate(&ConsumerEnteredNotes::default());
//! assert!(messages.iter().any(|m| m.field_name == "Note"));
//! ```

pub mod documents;
pub mod entries;
pub mod header;
pub mod helper;
pub mod sections;

pub use documents::{assemble, CdaDocument};
pub use sections::SectionMapper;

use crate::config::GeneratorConfig;
use crate::core::narrative::{NarrativeGenerator, NarrativeMode};
use crate::core::validation::{ValidationBuilder, ValidationMessage};
use crate::domain::documents::ClinicalDocument;
use crate::domain::{CdaError, Result};
use crate::xml::{to_xml_string, WriterOptions, XmlElement};
use std::time::Instant;
use tracing::{info, warn};

/// Validates `document` and returns every message, in traversal order
///
/// Paths are rooted at the document type name, e.g. `EReferral.Context.Author`.
pub fn validate<D: ClinicalDocument + ?Sized>(document: &D) -> Vec<ValidationMessage> {
    let mut vb = ValidationBuilder::new();
    document.validate(document.kind().type_name(), &mut vb);
    vb.into_messages()
}

/// A document that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validated<D> {
    document: D,
}

impl<D: ClinicalDocument> Validated<D> {
    /// Validates `document`, failing with [`CdaError::Validation`] if any message was produced
    pub fn new(document: D) -> Result<Self> {
        let messages = validate(&document);
        if messages.is_empty() {
            Ok(Self { document })
        } else {
            Err(CdaError::Validation { messages })
        }
    }

    /// Wraps `document` without checking it
    ///
    /// Used when validation failures are configured as warnings; mapping then
    /// reports the first missing field as a generation error.
    pub(crate) fn unchecked(document: D) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn into_inner(self) -> D {
        self.document
    }
}

/// Maps a validated document to its `ClinicalDocument` tree
pub fn generate<D: CdaDocument>(
    validated: &Validated<D>,
    narrative: &dyn NarrativeGenerator,
) -> Result<XmlElement> {
    let mapper = SectionMapper::new(narrative);
    assemble(validated.document(), &mapper)
}

/// Validation, generation and serialisation with configured options
pub struct CdaGenerator {
    narrative: Box<dyn NarrativeGenerator + Send + Sync>,
    writer_options: WriterOptions,
    fail_on_validation_errors: bool,
}

impl CdaGenerator {
    pub fn new(narrative: Box<dyn NarrativeGenerator + Send + Sync>, writer_options: WriterOptions) -> Self {
        Self {
            narrative,
            writer_options,
            fail_on_validation_errors: true,
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        let mode: NarrativeMode = config.narrative_mode.parse()?;
        Ok(Self {
            narrative: mode.generator(),
            writer_options: WriterOptions {
                indent: config.indent,
                xml_declaration: config.xml_declaration,
            },
            fail_on_validation_errors: config.fail_on_validation_errors,
        })
    }

    pub fn writer_options(&self) -> &WriterOptions {
        &self.writer_options
    }

    /// Validates then generates `document`
    pub fn validate_and_generate<D: CdaDocument + Clone>(&self, document: &D) -> Result<XmlElement> {
        let kind = document.kind();
        crate::log_generation_start!(kind);
        let started = Instant::now();

        let validated = match Validated::new(document.clone()) {
            Ok(validated) => validated,
            Err(CdaError::Validation { messages }) if !self.fail_on_validation_errors => {
                warn!(
                    document_type = %kind,
                    messages = messages.len(),
                    "Generating despite validation messages"
                );
                Validated::unchecked(document.clone())
            }
            Err(err) => {
                crate::log_validation_failures!(kind, err.validation_messages());
                return Err(err);
            }
        };

        let tree = generate(&validated, self.narrative.as_ref())?;
        crate::log_generation_complete!(kind, started.elapsed().as_millis());
        Ok(tree)
    }

    /// Validates, generates and serialises `document` to an XML string
    pub fn render<D: CdaDocument + Clone>(&self, document: &D) -> Result<String> {
        let tree = self.validate_and_generate(document)?;
        let xml = to_xml_string(&tree, &self.writer_options)?;
        info!(bytes = xml.len(), "Serialised CDA document");
        Ok(xml)
    }
}

impl Default for CdaGenerator {
    fn default() -> Self {
        Self::new(NarrativeMode::default().generator(), WriterOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clinical::ConsumerNote;
    use crate::domain::codes::{DocumentStatus, Occupation, Sex};
    use crate::domain::common::{
        Author, CodableText, Custodian, Identifier, IsoDateTime, Organisation, Participant, Party,
        Person, PersonName, SubjectOfCare,
    };
    use crate::domain::documents::{ConsumerEnteredNotes, DocumentContext, DocumentHeader};
    use uuid::Uuid;

    fn notes() -> ConsumerEnteredNotes {
        let mut patient = Person::named(PersonName::new("Jane", "Citizen"));
        patient.sex = Some(Sex::Female);
        patient.date_of_birth = IsoDateTime::date(1970, 1, 1);

        let mut custodian = Organisation::named("Good Health Clinic");
        custodian.identifiers = vec![Identifier::new("1.2.36.1.2001.1003.0.8003620833333789", None)];

        ConsumerEnteredNotes {
            header: DocumentHeader::new(
                Identifier::from_uuid(Uuid::from_u128(1)),
                IsoDateTime::date(2024, 3, 1).unwrap(),
                DocumentStatus::Final,
            ),
            context: DocumentContext {
                subject_of_care: Some(SubjectOfCare {
                    participant: Some(Participant::with_id(
                        Uuid::from_u128(2),
                        Some(Party::Person(patient.clone())),
                    )),
                }),
                author: Some(Author {
                    participant: Some(Participant::with_id(Uuid::from_u128(3), Some(Party::Person(patient)))),
                    participation_period: IsoDateTime::date(2024, 3, 1),
                    role: Some(CodableText::from_coded(&Occupation::GeneralMedicalPractitioner)),
                }),
                custodian: Some(Custodian {
                    participant: Some(Participant::with_id(
                        Uuid::from_u128(4),
                        Some(Party::Organisation(custodian)),
                    )),
                }),
                legal_authenticator: None,
            },
            note: Some(ConsumerNote::new("My allergies", "Hay fever every spring")),
        }
    }

    #[test]
    fn test_validate_roots_paths_at_type_name() {
        let messages = validate(&ConsumerEnteredNotes::default());
        assert!(!messages.is_empty());
        assert!(messages.iter().all(|m| m.path.starts_with("ConsumerEnteredNotes")));
    }

    #[test]
    fn test_validated_rejects_invalid_document() {
        let err = Validated::new(ConsumerEnteredNotes::default()).unwrap_err();
        assert!(!err.validation_messages().is_empty());
    }

    #[test]
    fn test_generate_valid_document() {
        let validated = Validated::new(notes()).unwrap();
        let tree = generate(&validated, &crate::core::narrative::EmptyNarrativeGenerator).unwrap();
        assert_eq!(tree.name, "ClinicalDocument");
        assert_eq!(tree.find_all("section").len(), 1);
    }

    #[test]
    fn test_unchecked_document_fails_with_generation_error() {
        let mut doc = notes();
        doc.note = None;
        let generator = CdaGenerator::from_config(&GeneratorConfig {
            fail_on_validation_errors: false,
            ..Default::default()
        })
        .unwrap();
        let err = generator.validate_and_generate(&doc).unwrap_err();
        assert!(matches!(err, CdaError::Generation(_)));
    }

    #[test]
    fn test_render_is_deterministic() {
        let generator = CdaGenerator::default();
        let first = generator.render(&notes()).unwrap();
        let second = generator.render(&notes()).unwrap();
        assert_eq!(first, second);
        assert!(first.starts_with("<?xml"));
    }

    #[test]
    fn test_from_config_rejects_unknown_narrative_mode() {
        let config = GeneratorConfig {
            narrative_mode: "html".to_string(),
            ..Default::default()
        };
        assert!(CdaGenerator::from_config(&config).is_err());
    }
}
