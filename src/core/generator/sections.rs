//! Section mapping
//!
//! [`SectionMapper`] turns each content section into a `component/section`
//! element: fixed code and title, narrative, entries, then nested
//! subsections. Optional subsections that hold nothing are left out rather
//! than written as empty shells.

use super::entries::{
    create_acd_custodian_entry, create_adverse_reaction_entry, create_alert_entry,
    create_arranged_service_entry, create_ceased_medication_entry,
    create_childhood_immunisation_entry, create_consumer_note_entry, create_dispense_item_entry,
    create_exclusion_entry, create_funded_service_entry, create_medical_history_item_entry,
    create_medication_entry, create_organ_donor_entry, create_pharmaceutical_benefit_entry,
    create_physical_measurement_entry, create_prescription_item_entry,
    create_problem_diagnosis_entry, create_procedure_entry, create_recommendation_entry,
    create_therapeutic_good_entry,
};
use super::helper::{
    create_code_from_descriptor, create_entry, create_interval, create_text_act, create_time,
    required, required_text,
};
use crate::core::narrative::{render_text, section_narrative, NarrativeGenerator, NarrativeSection};
use crate::domain::clinical::{
    AcdCustodians, AdverseReactions, Alerts, ArrangedServices, CeasedMedications,
    ChildhoodImmunisations, ClinicalInterventions, ClinicalSynopsis, ConsumerNote,
    CurrentMedicationsOnDischarge, DischargeMedications, DispenseItem, Event, HealthProfile,
    MedicalHistory, MedicareDvaFundedServices, Medications, OrganDonorRegistration,
    PharmaceuticalBenefitItems, PhysicalMeasurementsSection, Plan, PrescriptionItem,
    ProblemDiagnosesThisVisit, Recommendations, ReferralDetail,
};
use crate::domain::codes::{entries as entry_codes, sections, CodeDescriptor};
use crate::domain::common::ExclusionStatement;
use crate::domain::Result;
use crate::xml::XmlElement;
use tracing::debug;

/// `component/section` with code, title, narrative, entries and subsections
pub fn create_component(
    code: &CodeDescriptor,
    text: XmlElement,
    entries: Vec<XmlElement>,
    subsections: Vec<XmlElement>,
) -> XmlElement {
    debug!(
        section = code.display_name,
        entries = entries.len(),
        subsections = subsections.len(),
        "Assembled section"
    );

    XmlElement::new("component").child(
        XmlElement::new("section")
            .child(create_code_from_descriptor("code", code))
            .child(XmlElement::new("title").text(code.display_name))
            .child(text)
            .children_from(entries)
            .children_from(subsections),
    )
}

/// Entries for a list, or the exclusion statement standing in for it
fn list_or_exclusion<T>(
    items: &[T],
    exclusion: Option<&ExclusionStatement>,
    map: impl Fn(&T) -> Result<XmlElement>,
) -> Result<Vec<XmlElement>> {
    let mut entries = items.iter().map(map).collect::<Result<Vec<_>>>()?;
    if items.is_empty() {
        if let Some(statement) = exclusion {
            entries.push(create_exclusion_entry(statement)?);
        }
    }
    Ok(entries)
}

fn each<T>(items: &[T], map: impl Fn(&T) -> Result<XmlElement>) -> Result<Vec<XmlElement>> {
    items.iter().map(map).collect()
}

/// Maps content sections with a narrative generator
pub struct SectionMapper<'a> {
    narrative: &'a dyn NarrativeGenerator,
}

impl<'a> SectionMapper<'a> {
    pub fn new(narrative: &'a dyn NarrativeGenerator) -> Self {
        Self { narrative }
    }

    fn text(&self, section: NarrativeSection<'_>) -> XmlElement {
        render_text(&section_narrative(section, self.narrative))
    }

    fn component(
        &self,
        code: &CodeDescriptor,
        section: NarrativeSection<'_>,
        entries: Vec<XmlElement>,
        subsections: Vec<XmlElement>,
    ) -> XmlElement {
        create_component(code, self.text(section), entries, subsections)
    }

    pub fn referral_detail(&self, detail: &ReferralDetail) -> Result<XmlElement> {
        let referred = required(detail.referral_date_time.as_ref(), "ReferralDetail.ReferralDateTime")?;
        let reason = required_text(&detail.reason_for_referral, "ReferralDetail.ReasonForReferral")?;

        let mut entries = vec![
            create_entry(
                XmlElement::new("act")
                    .attr("classCode", "ACT")
                    .attr("moodCode", "EVN")
                    .child(create_code_from_descriptor("code", &entry_codes::REFERRAL_DATETIME))
                    .child(create_time("effectiveTime", referred)),
            ),
            create_entry(create_text_act(&entry_codes::REASON_FOR_REFERRAL, reason)),
        ];
        if let Some(validity) = &detail.validity_duration {
            entries.push(create_entry(
                XmlElement::new("observation")
                    .attr("classCode", "OBS")
                    .attr("moodCode", "EVN")
                    .child(create_code_from_descriptor(
                        "code",
                        &entry_codes::REFERRAL_VALIDITY_DURATION,
                    ))
                    .child(create_interval("effectiveTime", validity)),
            ));
        }

        Ok(self.component(
            &sections::REFERRAL_DETAIL,
            NarrativeSection::ReferralDetail(detail),
            entries,
            Vec::new(),
        ))
    }

    pub fn adverse_reactions(&self, reactions: &AdverseReactions) -> Result<XmlElement> {
        let entries = list_or_exclusion(
            &reactions.reactions,
            reactions.exclusion_statement.as_ref(),
            create_adverse_reaction_entry,
        )?;
        Ok(self.component(
            &sections::ADVERSE_REACTIONS,
            NarrativeSection::AdverseReactions(reactions),
            entries,
            Vec::new(),
        ))
    }

    pub fn medications(&self, medications: &Medications) -> Result<XmlElement> {
        let entries = list_or_exclusion(
            &medications.medications,
            medications.exclusion_statement.as_ref(),
            create_medication_entry,
        )?;
        Ok(self.component(
            &sections::MEDICATIONS,
            NarrativeSection::Medications(medications),
            entries,
            Vec::new(),
        ))
    }

    /// Problems, then procedures, then other history items
    pub fn medical_history(&self, history: &MedicalHistory) -> Result<XmlElement> {
        let mut entries = list_or_exclusion(
            &history.problem_diagnoses,
            history.problem_diagnosis_exclusion.as_ref(),
            create_problem_diagnosis_entry,
        )?;
        entries.extend(list_or_exclusion(
            &history.procedures,
            history.procedure_exclusion.as_ref(),
            create_procedure_entry,
        )?);
        entries.extend(each(
            &history.medical_history_items,
            create_medical_history_item_entry,
        )?);

        Ok(self.component(
            &sections::MEDICAL_HISTORY,
            NarrativeSection::MedicalHistory(history),
            entries,
            Vec::new(),
        ))
    }

    pub fn event(&self, event: &Event) -> Result<XmlElement> {
        let problems = required(
            event.problem_diagnoses_this_visit.as_ref(),
            "Event.ProblemDiagnosesThisVisit",
        )?;

        let mut subsections = vec![self.problem_diagnoses_this_visit(problems)?];
        if let Some(interventions) = &event.clinical_interventions {
            subsections.push(self.clinical_interventions(interventions)?);
        }
        if let Some(synopsis) = &event.clinical_synopsis {
            subsections.push(self.clinical_synopsis(synopsis)?);
        }

        Ok(self.component(
            &sections::EVENT,
            NarrativeSection::Event(event),
            Vec::new(),
            subsections,
        ))
    }

    fn problem_diagnoses_this_visit(&self, problems: &ProblemDiagnosesThisVisit) -> Result<XmlElement> {
        let entries = list_or_exclusion(
            &problems.problem_diagnoses,
            problems.exclusion_statement.as_ref(),
            create_problem_diagnosis_entry,
        )?;
        Ok(self.component(
            &sections::PROBLEMS_DIAGNOSES_THIS_VISIT,
            NarrativeSection::ProblemDiagnosesThisVisit(problems),
            entries,
            Vec::new(),
        ))
    }

    fn clinical_interventions(&self, interventions: &ClinicalInterventions) -> Result<XmlElement> {
        let entries = each(&interventions.procedures, create_procedure_entry)?;
        Ok(self.component(
            &sections::CLINICAL_INTERVENTIONS,
            NarrativeSection::ClinicalInterventions(interventions),
            entries,
            Vec::new(),
        ))
    }

    fn clinical_synopsis(&self, synopsis: &ClinicalSynopsis) -> Result<XmlElement> {
        let description = required_text(&synopsis.description, "ClinicalSynopsis.Description")?;
        Ok(self.component(
            &sections::CLINICAL_SYNOPSIS,
            NarrativeSection::ClinicalSynopsis(synopsis),
            vec![create_entry(create_text_act(
                &entry_codes::CLINICAL_SYNOPSIS_DESCRIPTION,
                description,
            ))],
            Vec::new(),
        ))
    }

    /// Discharge medications, or `None` when neither subsection is present
    pub fn discharge_medications(&self, medications: &DischargeMedications) -> Result<Option<XmlElement>> {
        if !medications.has_content() {
            return Ok(None);
        }

        let mut subsections = Vec::new();
        if let Some(current) = &medications.current_medications {
            subsections.push(self.current_medications(current)?);
        }
        if let Some(ceased) = &medications.ceased_medications {
            subsections.push(self.ceased_medications(ceased)?);
        }

        Ok(Some(self.component(
            &sections::DISCHARGE_MEDICATIONS,
            NarrativeSection::DischargeMedications(medications),
            Vec::new(),
            subsections,
        )))
    }

    fn current_medications(&self, current: &CurrentMedicationsOnDischarge) -> Result<XmlElement> {
        let entries = list_or_exclusion(
            &current.therapeutic_goods,
            current.exclusion_statement.as_ref(),
            create_therapeutic_good_entry,
        )?;
        Ok(self.component(
            &sections::CURRENT_MEDICATIONS_ON_DISCHARGE,
            NarrativeSection::CurrentMedications(current),
            entries,
            Vec::new(),
        ))
    }

    fn ceased_medications(&self, ceased: &CeasedMedications) -> Result<XmlElement> {
        let entries = list_or_exclusion(
            &ceased.medications,
            ceased.exclusion_statement.as_ref(),
            create_ceased_medication_entry,
        )?;
        Ok(self.component(
            &sections::CEASED_MEDICATIONS,
            NarrativeSection::CeasedMedications(ceased),
            entries,
            Vec::new(),
        ))
    }

    pub fn health_profile(&self, profile: &HealthProfile) -> Result<XmlElement> {
        let reactions = required(profile.adverse_reactions.as_ref(), "HealthProfile.AdverseReactions")?;

        let mut subsections = vec![self.adverse_reactions(reactions)?];
        if let Some(alerts) = profile.alerts.as_ref().filter(|a| !a.alerts.is_empty()) {
            subsections.push(self.alerts(alerts)?);
        }

        Ok(self.component(
            &sections::HEALTH_PROFILE,
            NarrativeSection::HealthProfile(profile),
            Vec::new(),
            subsections,
        ))
    }

    fn alerts(&self, alerts: &Alerts) -> Result<XmlElement> {
        let entries = each(&alerts.alerts, create_alert_entry)?;
        Ok(self.component(&sections::ALERTS, NarrativeSection::Alerts(alerts), entries, Vec::new()))
    }

    /// Plan, or `None` when it has no arranged services or recommendations
    pub fn plan(&self, plan: &Plan) -> Result<Option<XmlElement>> {
        if !plan.has_content() {
            return Ok(None);
        }

        let mut subsections = Vec::new();
        if let Some(services) = plan.arranged_services.as_ref().filter(|s| !s.services.is_empty()) {
            subsections.push(self.arranged_services(services)?);
        }
        if let Some(recommendations) = plan
            .recommendations
            .as_ref()
            .filter(|r| !r.recommendations.is_empty())
        {
            subsections.push(self.recommendations(recommendations)?);
        }

        Ok(Some(self.component(
            &sections::PLAN,
            NarrativeSection::Plan(plan),
            Vec::new(),
            subsections,
        )))
    }

    fn arranged_services(&self, services: &ArrangedServices) -> Result<XmlElement> {
        let entries = each(&services.services, create_arranged_service_entry)?;
        Ok(self.component(
            &sections::ARRANGED_SERVICES,
            NarrativeSection::ArrangedServices(services),
            entries,
            Vec::new(),
        ))
    }

    fn recommendations(&self, recommendations: &Recommendations) -> Result<XmlElement> {
        let entries = each(&recommendations.recommendations, create_recommendation_entry)?;
        Ok(self.component(
            &sections::RECOMMENDATIONS,
            NarrativeSection::Recommendations(recommendations),
            entries,
            Vec::new(),
        ))
    }

    pub fn physical_measurements(&self, section: &PhysicalMeasurementsSection) -> Result<XmlElement> {
        let entries = each(&section.measurements, create_physical_measurement_entry)?;
        Ok(self.component(
            &sections::PHYSICAL_MEASUREMENTS,
            NarrativeSection::PhysicalMeasurements(section),
            entries,
            Vec::new(),
        ))
    }

    pub fn prescription_item(&self, item: &PrescriptionItem) -> Result<XmlElement> {
        let entry = create_prescription_item_entry(item)?;
        Ok(self.component(
            &sections::PRESCRIPTION_ITEM,
            NarrativeSection::PrescriptionItem(item),
            vec![entry],
            Vec::new(),
        ))
    }

    pub fn dispense_item(&self, item: &DispenseItem) -> Result<XmlElement> {
        let entry = create_dispense_item_entry(item)?;
        Ok(self.component(
            &sections::DISPENSE_ITEM,
            NarrativeSection::DispenseItem(item),
            vec![entry],
            Vec::new(),
        ))
    }

    pub fn consumer_note(&self, note: &ConsumerNote) -> Result<XmlElement> {
        let title = required_text(&note.title, "ConsumerNote.Title")?;
        let description = required_text(&note.description, "ConsumerNote.Description")?;
        Ok(self.component(
            &sections::CONSUMER_ENTERED_NOTE,
            NarrativeSection::ConsumerNote(note),
            vec![create_consumer_note_entry(title, description)],
            Vec::new(),
        ))
    }

    pub fn acd_custodians(&self, custodians: &AcdCustodians) -> Result<XmlElement> {
        let entries = each(&custodians.custodians, create_acd_custodian_entry)?;
        Ok(self.component(
            &sections::ACD_CUSTODIANS,
            NarrativeSection::AcdCustodians(custodians),
            entries,
            Vec::new(),
        ))
    }

    pub fn funded_services(&self, services: &MedicareDvaFundedServices) -> Result<XmlElement> {
        let entries = list_or_exclusion(
            &services.services,
            services.exclusion_statement.as_ref(),
            create_funded_service_entry,
        )?;
        Ok(self.component(
            &sections::MEDICARE_DVA_FUNDED_SERVICES,
            NarrativeSection::MedicareDvaFundedServices(services),
            entries,
            Vec::new(),
        ))
    }

    pub fn pharmaceutical_benefit_items(&self, items: &PharmaceuticalBenefitItems) -> Result<XmlElement> {
        let entries = list_or_exclusion(
            &items.items,
            items.exclusion_statement.as_ref(),
            create_pharmaceutical_benefit_entry,
        )?;
        Ok(self.component(
            &sections::PHARMACEUTICAL_BENEFIT_ITEMS,
            NarrativeSection::PharmaceuticalBenefitItems(items),
            entries,
            Vec::new(),
        ))
    }

    pub fn childhood_immunisations(&self, immunisations: &ChildhoodImmunisations) -> Result<XmlElement> {
        let entries = list_or_exclusion(
            &immunisations.immunisations,
            immunisations.exclusion_statement.as_ref(),
            create_childhood_immunisation_entry,
        )?;
        Ok(self.component(
            &sections::CHILDHOOD_IMMUNISATIONS,
            NarrativeSection::ChildhoodImmunisations(immunisations),
            entries,
            Vec::new(),
        ))
    }

    pub fn organ_donor_register(&self, registration: &OrganDonorRegistration) -> Result<XmlElement> {
        Ok(self.component(
            &sections::ORGAN_DONOR_REGISTER,
            NarrativeSection::OrganDonorRegister(registration),
            vec![create_organ_donor_entry(registration)?],
            Vec::new(),
        ))
    }
}
