//! Discharge summary

use super::header::{DocumentContext, DocumentHeader};
use crate::core::validation::{join_path, Validate, ValidationBuilder};
use crate::domain::clinical::{DischargeMedications, Encounter, Event, HealthProfile, Plan};
use crate::domain::common::NominatedPrimaryHealthcareProvider;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DischargeSummary {
    pub header: DocumentHeader,
    pub context: DocumentContext,
    pub encounter: Option<Encounter>,
    pub nominated_primary_healthcare_providers: Vec<NominatedPrimaryHealthcareProvider>,
    pub content: DischargeSummaryContent,
}

/// Body of a discharge summary
///
/// Event and health profile are always written; medications and plan only
/// when they hold at least one subsection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DischargeSummaryContent {
    pub event: Option<Event>,
    pub medications: Option<DischargeMedications>,
    pub health_profile: Option<HealthProfile>,
    pub plan: Option<Plan>,
}

impl Validate for DischargeSummary {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        self.header.validate(&join_path(path, "Header"), vb);
        self.context.validate(&join_path(path, "Context"), vb);
        vb.validate_required(path, "Encounter", self.encounter.as_ref());
        vb.validate_each(
            path,
            "NominatedPrimaryHealthcareProviders",
            &self.nominated_primary_healthcare_providers,
        );

        let content = join_path(path, "Content");
        vb.validate_required(&content, "Event", self.content.event.as_ref());
        vb.validate_optional(&content, "Medications", self.content.medications.as_ref());
        vb.validate_required(&content, "HealthProfile", self.content.health_profile.as_ref());
        vb.validate_optional(&content, "Plan", self.content.plan.as_ref());
    }
}
