//! Section narrative
//!
//! Every CDA section carries a human-readable `<text>` block. A caller may
//! supply one verbatim through a section's `custom_narrative`; otherwise the
//! [`NarrativeGenerator`] passed to generation derives one from the structured
//! data.
//!
//! Two generators are provided:
//!
//! - **Table**: tables, lists and paragraphs per section
//! - **Empty**: an empty `<text/>` for consumers that render their own view

pub mod render;
pub mod table;

pub use render::render_text;
pub use table::TableNarrativeGenerator;

use crate::domain::clinical::{
    AcdCustodians, AdverseReactions, Alerts, ArrangedServices, CeasedMedications,
    ChildhoodImmunisations, ClinicalInterventions, ClinicalSynopsis, ConsumerNote,
    CurrentMedicationsOnDischarge, DischargeMedications, DispenseItem, Event, HealthProfile,
    MedicalHistory, MedicareDvaFundedServices, Medications, OrganDonorRegistration,
    PharmaceuticalBenefitItems, PhysicalMeasurementsSection, Plan, PrescriptionItem,
    ProblemDiagnosesThisVisit, Recommendations, ReferralDetail,
};
use crate::domain::common::StrucDocText;
use crate::domain::{CdaError, Result};
use std::fmt;
use std::str::FromStr;

/// Borrowed view of the section a narrative is requested for
#[derive(Debug, Clone, Copy)]
pub enum NarrativeSection<'a> {
    ReferralDetail(&'a ReferralDetail),
    AdverseReactions(&'a AdverseReactions),
    Medications(&'a Medications),
    MedicalHistory(&'a MedicalHistory),
    Event(&'a Event),
    ProblemDiagnosesThisVisit(&'a ProblemDiagnosesThisVisit),
    ClinicalInterventions(&'a ClinicalInterventions),
    ClinicalSynopsis(&'a ClinicalSynopsis),
    DischargeMedications(&'a DischargeMedications),
    CurrentMedications(&'a CurrentMedicationsOnDischarge),
    CeasedMedications(&'a CeasedMedications),
    HealthProfile(&'a HealthProfile),
    Alerts(&'a Alerts),
    Plan(&'a Plan),
    ArrangedServices(&'a ArrangedServices),
    Recommendations(&'a Recommendations),
    PhysicalMeasurements(&'a PhysicalMeasurementsSection),
    PrescriptionItem(&'a PrescriptionItem),
    DispenseItem(&'a DispenseItem),
    ConsumerNote(&'a ConsumerNote),
    AcdCustodians(&'a AcdCustodians),
    MedicareDvaFundedServices(&'a MedicareDvaFundedServices),
    PharmaceuticalBenefitItems(&'a PharmaceuticalBenefitItems),
    ChildhoodImmunisations(&'a ChildhoodImmunisations),
    OrganDonorRegister(&'a OrganDonorRegistration),
}

impl<'a> NarrativeSection<'a> {
    /// Narrative supplied by the caller for this section, if any
    pub fn custom_narrative(&self) -> Option<&'a StrucDocText> {
        match *self {
            NarrativeSection::ReferralDetail(s) => s.custom_narrative.as_ref(),
            NarrativeSection::AdverseReactions(s) => s.custom_narrative.as_ref(),
            NarrativeSection::Medications(s) => s.custom_narrative.as_ref(),
            NarrativeSection::MedicalHistory(s) => s.custom_narrative.as_ref(),
            NarrativeSection::Event(s) => s.custom_narrative.as_ref(),
            NarrativeSection::ProblemDiagnosesThisVisit(s) => s.custom_narrative.as_ref(),
            NarrativeSection::ClinicalInterventions(s) => s.custom_narrative.as_ref(),
            NarrativeSection::ClinicalSynopsis(s) => s.custom_narrative.as_ref(),
            NarrativeSection::DischargeMedications(s) => s.custom_narrative.as_ref(),
            NarrativeSection::CurrentMedications(s) => s.custom_narrative.as_ref(),
            NarrativeSection::CeasedMedications(s) => s.custom_narrative.as_ref(),
            NarrativeSection::HealthProfile(s) => s.custom_narrative.as_ref(),
            NarrativeSection::Alerts(s) => s.custom_narrative.as_ref(),
            NarrativeSection::Plan(s) => s.custom_narrative.as_ref(),
            NarrativeSection::ArrangedServices(s) => s.custom_narrative.as_ref(),
            NarrativeSection::Recommendations(s) => s.custom_narrative.as_ref(),
            NarrativeSection::PhysicalMeasurements(s) => s.custom_narrative.as_ref(),
            NarrativeSection::PrescriptionItem(s) => s.custom_narrative.as_ref(),
            NarrativeSection::DispenseItem(s) => s.custom_narrative.as_ref(),
            NarrativeSection::ConsumerNote(s) => s.custom_narrative.as_ref(),
            NarrativeSection::AcdCustodians(s) => s.custom_narrative.as_ref(),
            NarrativeSection::MedicareDvaFundedServices(s) => s.custom_narrative.as_ref(),
            NarrativeSection::PharmaceuticalBenefitItems(s) => s.custom_narrative.as_ref(),
            NarrativeSection::ChildhoodImmunisations(s) => s.custom_narrative.as_ref(),
            NarrativeSection::OrganDonorRegister(s) => s.custom_narrative.as_ref(),
        }
    }
}

/// Produces the narrative block of a section from its structured data
pub trait NarrativeGenerator {
    fn generate(&self, section: NarrativeSection<'_>) -> StrucDocText;
}

/// Writes an empty `<text/>` for every section
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyNarrativeGenerator;

impl NarrativeGenerator for EmptyNarrativeGenerator {
    fn generate(&self, _section: NarrativeSection<'_>) -> StrucDocText {
        StrucDocText::default()
    }
}

/// Custom narrative when supplied, generated narrative otherwise
pub fn section_narrative(
    section: NarrativeSection<'_>,
    generator: &dyn NarrativeGenerator,
) -> StrucDocText {
    match section.custom_narrative() {
        Some(custom) => custom.clone(),
        None => generator.generate(section),
    }
}

/// Narrative generator selected by configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NarrativeMode {
    #[default]
    Table,
    Empty,
}

impl NarrativeMode {
    pub fn generator(&self) -> Box<dyn NarrativeGenerator + Send + Sync> {
        match self {
            NarrativeMode::Table => Box::new(TableNarrativeGenerator),
            NarrativeMode::Empty => Box::new(EmptyNarrativeGenerator),
        }
    }
}

impl FromStr for NarrativeMode {
    type Err = CdaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "empty" | "none" => Ok(Self::Empty),
            _ => Err(CdaError::Configuration(format!(
                "Invalid narrative mode: {s}. Expected 'table' or 'empty'"
            ))),
        }
    }
}

impl fmt::Display for NarrativeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NarrativeMode::Table => f.write_str("table"),
            NarrativeMode::Empty => f.write_str("empty"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::codes::GlobalStatement;
    use crate::domain::common::ExclusionStatement;

    #[test]
    fn test_custom_narrative_wins() {
        let section = AdverseReactions {
            exclusion_statement: Some(ExclusionStatement::new(GlobalStatement::NoneKnown)),
            custom_narrative: Some(StrucDocText::paragraph("Reviewed with patient")),
            ..Default::default()
        };
        let text = section_narrative(
            NarrativeSection::AdverseReactions(&section),
            &TableNarrativeGenerator,
        );
        assert_eq!(text, StrucDocText::paragraph("Reviewed with patient"));
    }

    #[test]
    fn test_generated_when_no_custom_narrative() {
        let section = AdverseReactions::none_known(ExclusionStatement::new(GlobalStatement::NotAsked));
        let table = section_narrative(NarrativeSection::AdverseReactions(&section), &TableNarrativeGenerator);
        assert!(!table.is_empty());
        let empty = section_narrative(NarrativeSection::AdverseReactions(&section), &EmptyNarrativeGenerator);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("TABLE".parse::<NarrativeMode>().unwrap(), NarrativeMode::Table);
        assert_eq!("empty".parse::<NarrativeMode>().unwrap(), NarrativeMode::Empty);
        assert!("html".parse::<NarrativeMode>().is_err());
        assert_eq!(NarrativeMode::Empty.to_string(), "empty");
    }
}
