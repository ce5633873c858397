//! Identity of each supported document type

use super::code_system::CodingSystem;
use super::coded_value::CodeDescriptor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Document types this crate can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    EReferral,
    DischargeSummary,
    PhysicalMeasurements,
    PcehrPrescriptionRecord,
    PcehrDispenseRecord,
    ConsumerEnteredNotes,
    AcdCustodianRecord,
    MedicareOverview,
}

impl DocumentKind {
    pub const ALL: &'static [DocumentKind] = &[
        DocumentKind::EReferral,
        DocumentKind::DischargeSummary,
        DocumentKind::PhysicalMeasurements,
        DocumentKind::PcehrPrescriptionRecord,
        DocumentKind::PcehrDispenseRecord,
        DocumentKind::ConsumerEnteredNotes,
        DocumentKind::AcdCustodianRecord,
        DocumentKind::MedicareOverview,
    ];

    /// Document type code written to `ClinicalDocument/code`
    pub fn code(&self) -> CodeDescriptor {
        match self {
            DocumentKind::EReferral => {
                CodeDescriptor::new("57133-1", "e-Referral", CodingSystem::Loinc)
            }
            DocumentKind::DischargeSummary => {
                CodeDescriptor::new("18842-5", "Discharge Summary", CodingSystem::Loinc)
            }
            DocumentKind::PhysicalMeasurements => CodeDescriptor::new(
                "100.16887",
                "Physical Measurements",
                CodingSystem::Nctis,
            ),
            DocumentKind::PcehrPrescriptionRecord => CodeDescriptor::new(
                "100.16765",
                "PCEHR Prescription Record",
                CodingSystem::Nctis,
            ),
            DocumentKind::PcehrDispenseRecord => CodeDescriptor::new(
                "100.16764",
                "PCEHR Dispense Record",
                CodingSystem::Nctis,
            ),
            DocumentKind::ConsumerEnteredNotes => CodeDescriptor::new(
                "100.16681",
                "Consumer Entered Notes",
                CodingSystem::Nctis,
            ),
            DocumentKind::AcdCustodianRecord => CodeDescriptor::new(
                "100.16696",
                "Advance Care Directive Custodian Record",
                CodingSystem::Nctis,
            ),
            DocumentKind::MedicareOverview => {
                CodeDescriptor::new("100.16778", "Medicare Overview", CodingSystem::Nctis)
            }
        }
    }

    /// Structured document template identifier
    pub fn template_id(&self) -> &'static str {
        match self {
            DocumentKind::EReferral => "1.2.36.1.2001.1001.101.100.1002.2",
            DocumentKind::DischargeSummary => "1.2.36.1.2001.1001.101.100.1002.8",
            DocumentKind::PhysicalMeasurements => "1.2.36.1.2001.1001.101.100.1002.186",
            DocumentKind::PcehrPrescriptionRecord => "1.2.36.1.2001.1001.101.100.1002.171",
            DocumentKind::PcehrDispenseRecord => "1.2.36.1.2001.1001.101.100.1002.172",
            DocumentKind::ConsumerEnteredNotes => "1.2.36.1.2001.1001.101.100.1002.136",
            DocumentKind::AcdCustodianRecord => "1.2.36.1.2001.1001.101.100.1002.137",
            DocumentKind::MedicareOverview => "1.2.36.1.2001.1001.101.100.1002.220",
        }
    }

    /// Template version paired with [`template_id`](Self::template_id)
    pub fn template_version(&self) -> &'static str {
        match self {
            DocumentKind::EReferral | DocumentKind::DischargeSummary => "2.2",
            _ => "1.0",
        }
    }

    pub fn title(&self) -> &'static str {
        self.code().display_name
    }

    /// Root of every validation path in a document of this kind
    pub fn type_name(&self) -> &'static str {
        match self {
            DocumentKind::EReferral => "EReferral",
            DocumentKind::DischargeSummary => "DischargeSummary",
            DocumentKind::PhysicalMeasurements => "PhysicalMeasurements",
            DocumentKind::PcehrPrescriptionRecord => "PcehrPrescriptionRecord",
            DocumentKind::PcehrDispenseRecord => "PcehrDispenseRecord",
            DocumentKind::ConsumerEnteredNotes => "ConsumerEnteredNotes",
            DocumentKind::AcdCustodianRecord => "AcdCustodianRecord",
            DocumentKind::MedicareOverview => "MedicareOverview",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
