//! Medications
//!
//! The e-Referral carries a flat medication list. The discharge summary splits
//! medications into those current on discharge and those ceased during the
//! episode; each half is optional but, when present, must hold either items or
//! an exclusion statement.

use crate::core::validation::{join_path, Presence, Validate, ValidationBuilder};
use crate::domain::codes::{ChangeStatus, ChangeType};
use crate::domain::common::{validate_list_or_exclusion, CodableText, ExclusionStatement, StrucDocText};
use serde::{Deserialize, Serialize};

fn validate_medicine(path: &str, medicine: Option<&CodableText>, vb: &mut ValidationBuilder) {
    if vb.argument_required_check(path, "Medicine", &medicine) {
        if let Some(medicine) = medicine {
            medicine.validate_mandatory(&join_path(path, "Medicine"), vb);
        }
    }
}

/// e-Referral medications section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Medications {
    pub medications: Vec<MedicationItem>,
    pub exclusion_statement: Option<ExclusionStatement>,
    pub custom_narrative: Option<StrucDocText>,
}

impl Presence for Medications {}

impl Validate for Medications {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        validate_list_or_exclusion(
            path,
            "Medications",
            &self.medications,
            self.exclusion_statement.as_ref(),
            vb,
        );
    }
}

/// A medicine the patient is taking
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedicationItem {
    pub medicine: Option<CodableText>,
    pub directions: Option<String>,
    pub clinical_indication: Option<String>,
    pub comment: Option<String>,
}

impl MedicationItem {
    pub fn new(medicine: CodableText, directions: impl Into<String>) -> Self {
        Self {
            medicine: Some(medicine),
            directions: Some(directions.into()),
            ..Default::default()
        }
    }
}

impl Presence for MedicationItem {}

impl Validate for MedicationItem {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        validate_medicine(path, self.medicine.as_ref(), vb);
        vb.argument_required_check(path, "Directions", &self.directions);
    }
}

/// Discharge summary medications section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DischargeMedications {
    pub current_medications: Option<CurrentMedicationsOnDischarge>,
    pub ceased_medications: Option<CeasedMedications>,
    pub custom_narrative: Option<StrucDocText>,
}

impl DischargeMedications {
    /// Whether any subsection would be written
    pub fn has_content(&self) -> bool {
        self.current_medications.is_some() || self.ceased_medications.is_some()
    }
}

impl Presence for DischargeMedications {}

impl Validate for DischargeMedications {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.validate_optional(path, "CurrentMedications", self.current_medications.as_ref());
        vb.validate_optional(path, "CeasedMedications", self.ceased_medications.as_ref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentMedicationsOnDischarge {
    pub therapeutic_goods: Vec<TherapeuticGood>,
    pub exclusion_statement: Option<ExclusionStatement>,
    pub custom_narrative: Option<StrucDocText>,
}

impl Presence for CurrentMedicationsOnDischarge {}

impl Validate for CurrentMedicationsOnDischarge {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        validate_list_or_exclusion(
            path,
            "TherapeuticGoods",
            &self.therapeutic_goods,
            self.exclusion_statement.as_ref(),
            vb,
        );
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CeasedMedications {
    pub medications: Vec<CeasedMedication>,
    pub exclusion_statement: Option<ExclusionStatement>,
    pub custom_narrative: Option<StrucDocText>,
}

impl Presence for CeasedMedications {}

impl Validate for CeasedMedications {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        validate_list_or_exclusion(
            path,
            "Medications",
            &self.medications,
            self.exclusion_statement.as_ref(),
            vb,
        );
    }
}

/// A medicine current at discharge
///
/// Change type and change status together form the item status; either both
/// are given or neither.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TherapeuticGood {
    pub medicine: Option<CodableText>,
    pub directions: Option<String>,
    pub clinical_indication: Option<String>,
    pub change_type: Option<ChangeType>,
    pub change_status: Option<ChangeStatus>,
    pub reason_for_change: Option<String>,
    pub unit_of_use_quantity_dispensed: Option<String>,
    pub additional_comments: Option<String>,
}

impl TherapeuticGood {
    pub fn new(medicine: CodableText, directions: impl Into<String>) -> Self {
        Self {
            medicine: Some(medicine),
            directions: Some(directions.into()),
            ..Default::default()
        }
    }

    pub fn with_change(mut self, change_type: ChangeType, change_status: ChangeStatus) -> Self {
        self.change_type = Some(change_type);
        self.change_status = Some(change_status);
        self
    }
}

impl Presence for TherapeuticGood {}

impl Validate for TherapeuticGood {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        validate_medicine(path, self.medicine.as_ref(), vb);
        vb.argument_required_check(path, "Directions", &self.directions);

        if self.change_type.is_some() || self.change_status.is_some() {
            vb.argument_required_check(path, "ChangeType", &self.change_type);
            vb.argument_required_check(path, "ChangeStatus", &self.change_status);
        }
        if self.reason_for_change.is_present() {
            vb.condition_check(
                path,
                "ReasonForChange",
                self.change_type.is_some(),
                "ReasonForChange requires ChangeType",
            );
        }
    }
}

/// A medicine ceased or suspended during the episode
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CeasedMedication {
    pub medicine: Option<CodableText>,
    pub change_type: Option<ChangeType>,
    pub change_status: Option<ChangeStatus>,
    pub reason_for_change: Option<String>,
}

impl CeasedMedication {
    pub fn new(medicine: CodableText, change_type: ChangeType, change_status: ChangeStatus) -> Self {
        Self {
            medicine: Some(medicine),
            change_type: Some(change_type),
            change_status: Some(change_status),
            reason_for_change: None,
        }
    }
}

impl Presence for CeasedMedication {}

impl Validate for CeasedMedication {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        validate_medicine(path, self.medicine.as_ref(), vb);
        if vb.argument_required_check(path, "ChangeType", &self.change_type) {
            vb.condition_check(
                path,
                "ChangeType",
                matches!(self.change_type, Some(ChangeType::Ceased | ChangeType::Suspended)),
                "ChangeType must be Ceased or Suspended",
            );
        }
        vb.argument_required_check(path, "ChangeStatus", &self.change_status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::codes::GlobalStatement;

    fn aspirin() -> CodableText {
        CodableText::original_text("Aspirin 100mg tablet")
    }

    #[test]
    fn test_medications_choice() {
        let mut vb = ValidationBuilder::new();
        Medications::default().validate("Medications", &mut vb);
        assert_eq!(vb.len(), 1);
        assert_eq!(vb.messages()[0].field_name, "Medications, ExclusionStatement");

        let mut vb = ValidationBuilder::new();
        Medications {
            exclusion_statement: Some(ExclusionStatement::new(GlobalStatement::NoneSupplied)),
            ..Default::default()
        }
        .validate("Medications", &mut vb);
        assert!(vb.is_empty());
    }

    #[test]
    fn test_item_status_requires_both_halves() {
        let mut good = TherapeuticGood::new(aspirin(), "One daily");
        good.change_type = Some(ChangeType::Changed);

        let mut vb = ValidationBuilder::new();
        good.validate("TG", &mut vb);
        assert_eq!(vb.len(), 1);
        assert_eq!(vb.messages()[0].field_name, "ChangeStatus");
    }

    #[test]
    fn test_reason_for_change_requires_change_type() {
        let mut good = TherapeuticGood::new(aspirin(), "One daily");
        good.reason_for_change = Some("Dose reduced".into());
        let mut vb = ValidationBuilder::new();
        good.validate("TG", &mut vb);
        assert_eq!(vb.messages()[0].message, "ReasonForChange requires ChangeType");
    }

    #[test]
    fn test_ceased_medication_change_type() {
        let mut vb = ValidationBuilder::new();
        CeasedMedication::new(aspirin(), ChangeType::Added, ChangeStatus::ChangeMade)
            .validate("C", &mut vb);
        assert_eq!(vb.messages()[0].message, "ChangeType must be Ceased or Suspended");

        let mut vb = ValidationBuilder::new();
        CeasedMedication::new(aspirin(), ChangeType::Ceased, ChangeStatus::ChangeMade)
            .validate("C", &mut vb);
        assert!(vb.is_empty());
    }

    #[test]
    fn test_discharge_medications_subsections_are_optional() {
        let meds = DischargeMedications {
            ceased_medications: Some(CeasedMedications {
                exclusion_statement: Some(ExclusionStatement::new(GlobalStatement::NoneKnown)),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(meds.has_content());
        let mut vb = ValidationBuilder::new();
        meds.validate("Medications", &mut vb);
        assert!(vb.is_empty());
        assert!(!DischargeMedications::default().has_content());
    }
}
