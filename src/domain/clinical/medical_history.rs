//! Medical history, problems and procedures

use crate::core::validation::{join_path, Presence, Validate, ValidationBuilder};
use crate::domain::common::{
    validate_list_or_exclusion, CdaInterval, CodableText, ExclusionStatement, IsoDateTime, StrucDocText,
};
use serde::{Deserialize, Serialize};

/// e-Referral medical history section
///
/// Problems and procedures each carry their own exclusion statement; other
/// history items are free text and may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedicalHistory {
    pub problem_diagnoses: Vec<ProblemDiagnosis>,
    pub problem_diagnosis_exclusion: Option<ExclusionStatement>,
    pub procedures: Vec<Procedure>,
    pub procedure_exclusion: Option<ExclusionStatement>,
    pub medical_history_items: Vec<MedicalHistoryItem>,
    pub custom_narrative: Option<StrucDocText>,
}

impl Presence for MedicalHistory {}

impl Validate for MedicalHistory {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        validate_list_or_exclusion(
            &join_path(path, "ProblemDiagnosis"),
            "ProblemDiagnoses",
            &self.problem_diagnoses,
            self.problem_diagnosis_exclusion.as_ref(),
            vb,
        );
        validate_list_or_exclusion(
            &join_path(path, "Procedure"),
            "Procedures",
            &self.procedures,
            self.procedure_exclusion.as_ref(),
            vb,
        );
        vb.validate_each(path, "MedicalHistoryItems", &self.medical_history_items);
    }
}

/// A problem or diagnosis, with onset and resolution dates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProblemDiagnosis {
    pub identification: Option<CodableText>,
    pub date_of_onset: Option<IsoDateTime>,
    pub date_of_resolution_remission: Option<IsoDateTime>,
    pub comment: Option<String>,
}

impl ProblemDiagnosis {
    pub fn new(identification: CodableText) -> Self {
        Self {
            identification: Some(identification),
            ..Default::default()
        }
    }
}

impl Presence for ProblemDiagnosis {}

impl Validate for ProblemDiagnosis {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        if vb.argument_required_check(path, "ProblemDiagnosisIdentification", &self.identification) {
            if let Some(identification) = &self.identification {
                identification.validate_mandatory(&join_path(path, "ProblemDiagnosisIdentification"), vb);
            }
        }
        if let (Some(onset), Some(resolved)) = (&self.date_of_onset, &self.date_of_resolution_remission) {
            vb.condition_check(
                path,
                "DateOfResolutionRemission",
                resolved.value >= onset.value,
                "DateOfResolutionRemission must not be before DateOfOnset",
            );
        }
    }
}

/// A procedure performed on the patient
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Procedure {
    pub procedure_name: Option<CodableText>,
    pub procedure_date: Option<IsoDateTime>,
    pub comment: Option<String>,
}

impl Procedure {
    pub fn new(procedure_name: CodableText) -> Self {
        Self {
            procedure_name: Some(procedure_name),
            ..Default::default()
        }
    }
}

impl Presence for Procedure {}

impl Validate for Procedure {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        if vb.argument_required_check(path, "ProcedureName", &self.procedure_name) {
            if let Some(name) = &self.procedure_name {
                name.validate_mandatory(&join_path(path, "ProcedureName"), vb);
            }
        }
    }
}

/// Free-text history item with an optional time range
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedicalHistoryItem {
    pub item_description: Option<String>,
    pub date_time_interval: Option<CdaInterval>,
    pub comment: Option<String>,
}

impl Presence for MedicalHistoryItem {}

impl Validate for MedicalHistoryItem {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.argument_required_check(path, "ItemDescription", &self.item_description);
        vb.validate_optional(path, "DateTimeInterval", self.date_time_interval.as_ref());
    }
}
