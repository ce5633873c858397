//! Discharge event: what happened during the stay

use super::medical_history::{ProblemDiagnosis, Procedure};
use crate::core::validation::{Presence, Validate, ValidationBuilder};
use crate::domain::common::{validate_list_or_exclusion, ExclusionStatement, StrucDocText};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    pub problem_diagnoses_this_visit: Option<ProblemDiagnosesThisVisit>,
    pub clinical_interventions: Option<ClinicalInterventions>,
    pub clinical_synopsis: Option<ClinicalSynopsis>,
    pub custom_narrative: Option<StrucDocText>,
}

impl Presence for Event {}

impl Validate for Event {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.validate_required(
            path,
            "ProblemDiagnosesThisVisit",
            self.problem_diagnoses_this_visit.as_ref(),
        );
        vb.validate_optional(path, "ClinicalInterventions", self.clinical_interventions.as_ref());
        vb.validate_optional(path, "ClinicalSynopsis", self.clinical_synopsis.as_ref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProblemDiagnosesThisVisit {
    pub problem_diagnoses: Vec<ProblemDiagnosis>,
    pub exclusion_statement: Option<ExclusionStatement>,
    pub custom_narrative: Option<StrucDocText>,
}

impl Presence for ProblemDiagnosesThisVisit {}

impl Validate for ProblemDiagnosesThisVisit {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        validate_list_or_exclusion(
            path,
            "ProblemDiagnoses",
            &self.problem_diagnoses,
            self.exclusion_statement.as_ref(),
            vb,
        );
    }
}

/// Clinical interventions performed this visit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicalInterventions {
    pub procedures: Vec<Procedure>,
    pub custom_narrative: Option<StrucDocText>,
}

impl Presence for ClinicalInterventions {}

impl Validate for ClinicalInterventions {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        if vb.argument_required_check(path, "Procedures", &self.procedures) {
            vb.validate_each(path, "Procedures", &self.procedures);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicalSynopsis {
    pub description: Option<String>,
    pub custom_narrative: Option<StrucDocText>,
}

impl Presence for ClinicalSynopsis {}

impl Validate for ClinicalSynopsis {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.argument_required_check(path, "Description", &self.description);
    }
}
