//! Document types
//!
//! Each document pairs the shared [`DocumentHeader`] and [`DocumentContext`]
//! with its own extra participations and content sections. [`AnyDocument`]
//! wraps all of them for input that names its own type, such as the JSON the
//! command line reads.

pub mod discharge_summary;
pub mod e_referral;
pub mod header;
pub mod medicare_overview;
pub mod records;

pub use discharge_summary::{DischargeSummary, DischargeSummaryContent};
pub use e_referral::{EReferral, EReferralContent};
pub use header::{DocumentContext, DocumentHeader};
pub use medicare_overview::{MedicareOverview, MedicareOverviewContent};
pub use records::{
    AcdCustodianRecord, ConsumerEnteredNotes, PcehrDispenseRecord, PcehrPrescriptionRecord,
    PhysicalMeasurements,
};

use crate::core::validation::{Validate, ValidationBuilder};
use crate::domain::codes::DocumentKind;
use serde::{Deserialize, Serialize};

/// Implemented by every document type
pub trait ClinicalDocument: Validate {
    fn kind(&self) -> DocumentKind;
    fn header(&self) -> &DocumentHeader;
    fn context(&self) -> &DocumentContext;
}

macro_rules! clinical_document {
    ($($document:ident),+ $(,)?) => {
        $(
            impl ClinicalDocument for $document {
                fn kind(&self) -> DocumentKind {
                    DocumentKind::$document
                }

                fn header(&self) -> &DocumentHeader {
                    &self.header
                }

                fn context(&self) -> &DocumentContext {
                    &self.context
                }
            }
        )+
    };
}

clinical_document!(
    EReferral,
    DischargeSummary,
    PhysicalMeasurements,
    PcehrPrescriptionRecord,
    PcehrDispenseRecord,
    ConsumerEnteredNotes,
    AcdCustodianRecord,
    MedicareOverview,
);

/// Any supported document, tagged by `document_type`
///
/// ```
/// use pcehr_cda::domain::codes::DocumentKind;
/// use pcehr_cda::domain::documents::{AnyDocument, ClinicalDocument};
///
/// let doc: AnyDocument = serde_json::from_str(r#"{"document_type": "consumer_entered_notes"}"#).unwrap();
/// assert_eq!(doc.kind(), DocumentKind::ConsumerEnteredNotes);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "document_type", rename_all = "snake_case")]
pub enum AnyDocument {
    EReferral(EReferral),
    DischargeSummary(DischargeSummary),
    PhysicalMeasurements(PhysicalMeasurements),
    PcehrPrescriptionRecord(PcehrPrescriptionRecord),
    PcehrDispenseRecord(PcehrDispenseRecord),
    ConsumerEnteredNotes(ConsumerEnteredNotes),
    AcdCustodianRecord(AcdCustodianRecord),
    MedicareOverview(MedicareOverview),
}

/// Runs `$body` with `$doc` bound to the wrapped document
#[macro_export]
#[doc(hidden)]
macro_rules! dispatch_document {
    ($value:expr, $doc:ident => $body:expr) => {
        match $value {
            $crate::domain::documents::AnyDocument::EReferral($doc) => $body,
            $crate::domain::documents::AnyDocument::DischargeSummary($doc) => $body,
            $crate::domain::documents::AnyDocument::PhysicalMeasurements($doc) => $body,
            $crate::domain::documents::AnyDocument::PcehrPrescriptionRecord($doc) => $body,
            $crate::domain::documents::AnyDocument::PcehrDispenseRecord($doc) => $body,
            $crate::domain::documents::AnyDocument::ConsumerEnteredNotes($doc) => $body,
            $crate::domain::documents::AnyDocument::AcdCustodianRecord($doc) => $body,
            $crate::domain::documents::AnyDocument::MedicareOverview($doc) => $body,
        }
    };
}

impl Validate for AnyDocument {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        crate::dispatch_document!(self, doc => doc.validate(path, vb))
    }
}

impl ClinicalDocument for AnyDocument {
    fn kind(&self) -> DocumentKind {
        crate::dispatch_document!(self, doc => doc.kind())
    }

    fn header(&self) -> &DocumentHeader {
        crate::dispatch_document!(self, doc => doc.header())
    }

    fn context(&self) -> &DocumentContext {
        crate::dispatch_document!(self, doc => doc.context())
    }
}

macro_rules! any_document_from {
    ($($document:ident),+ $(,)?) => {
        $(
            impl From<$document> for AnyDocument {
                fn from(document: $document) -> Self {
                    AnyDocument::$document(document)
                }
            }
        )+
    };
}

any_document_from!(
    EReferral,
    DischargeSummary,
    PhysicalMeasurements,
    PcehrPrescriptionRecord,
    PcehrDispenseRecord,
    ConsumerEnteredNotes,
    AcdCustodianRecord,
    MedicareOverview,
);
