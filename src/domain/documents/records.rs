//! Single-section PCEHR documents

use super::header::{DocumentContext, DocumentHeader};
use crate::core::validation::{join_path, Validate, ValidationBuilder};
use crate::domain::clinical::{
    AcdCustodians, ConsumerNote, DispenseItem, PhysicalMeasurementsSection, PrescriptionItem,
};
use crate::domain::common::{DispensingOrganisation, PrescriberOrganisation};
use serde::{Deserialize, Serialize};

fn validate_base(
    path: &str,
    header: &DocumentHeader,
    context: &DocumentContext,
    vb: &mut ValidationBuilder,
) {
    header.validate(&join_path(path, "Header"), vb);
    context.validate(&join_path(path, "Context"), vb);
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalMeasurements {
    pub header: DocumentHeader,
    pub context: DocumentContext,
    pub physical_measurements: Option<PhysicalMeasurementsSection>,
}

impl Validate for PhysicalMeasurements {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        validate_base(path, &self.header, &self.context, vb);
        vb.validate_required(
            &join_path(path, "Content"),
            "PhysicalMeasurements",
            self.physical_measurements.as_ref(),
        );
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PcehrPrescriptionRecord {
    pub header: DocumentHeader,
    pub context: DocumentContext,
    pub prescriber_organisation: Option<PrescriberOrganisation>,
    pub prescription_item: Option<PrescriptionItem>,
}

impl Validate for PcehrPrescriptionRecord {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        validate_base(path, &self.header, &self.context, vb);
        vb.validate_required(
            &join_path(path, "Context"),
            "PrescriberOrganisation",
            self.prescriber_organisation.as_ref(),
        );
        vb.validate_required(
            &join_path(path, "Content"),
            "PrescriptionItem",
            self.prescription_item.as_ref(),
        );
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PcehrDispenseRecord {
    pub header: DocumentHeader,
    pub context: DocumentContext,
    pub dispensing_organisation: Option<DispensingOrganisation>,
    pub dispense_item: Option<DispenseItem>,
}

impl Validate for PcehrDispenseRecord {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        validate_base(path, &self.header, &self.context, vb);
        vb.validate_required(
            &join_path(path, "Context"),
            "DispensingOrganisation",
            self.dispensing_organisation.as_ref(),
        );
        vb.validate_required(&join_path(path, "Content"), "DispenseItem", self.dispense_item.as_ref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsumerEnteredNotes {
    pub header: DocumentHeader,
    pub context: DocumentContext,
    pub note: Option<ConsumerNote>,
}

impl Validate for ConsumerEnteredNotes {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        validate_base(path, &self.header, &self.context, vb);
        vb.validate_required(&join_path(path, "Content"), "Note", self.note.as_ref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcdCustodianRecord {
    pub header: DocumentHeader,
    pub context: DocumentContext,
    pub acd_custodians: Option<AcdCustodians>,
}

impl Validate for AcdCustodianRecord {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        validate_base(path, &self.header, &self.context, vb);
        vb.validate_required(
            &join_path(path, "Content"),
            "AcdCustodians",
            self.acd_custodians.as_ref(),
        );
    }
}
