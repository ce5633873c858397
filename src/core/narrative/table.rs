//! Table-based narrative generator

use super::{NarrativeGenerator, NarrativeSection};
use crate::domain::clinical::{
    AcdCustodians, AdverseReactions, ArrangedServices, CeasedMedications, ChildhoodImmunisations,
    ClinicalInterventions, ConsumerNote, CurrentMedicationsOnDischarge, DispenseItem,
    MedicalHistory, MedicareDvaFundedServices, Medications, OrganDonorRegistration,
    PharmaceuticalBenefitItems, PhysicalMeasurementsSection, PrescriptionItem, ProblemDiagnosis,
    Procedure, Recommendations, ReferralDetail,
};
use crate::domain::codes::CodedValue;
use crate::domain::common::{
    CdaInterval, CodableText, ExclusionStatement, IsoDateTime, NarrativeBlock, NarrativeTable,
    Participant, StrucDocText,
};

/// Renders each section as tables, lists and paragraphs
#[derive(Debug, Clone, Copy, Default)]
pub struct TableNarrativeGenerator;

impl NarrativeGenerator for TableNarrativeGenerator {
    fn generate(&self, section: NarrativeSection<'_>) -> StrucDocText {
        match section {
            NarrativeSection::ReferralDetail(s) => referral_detail(s),
            NarrativeSection::AdverseReactions(s) => adverse_reactions(s),
            NarrativeSection::Medications(s) => medications(s),
            NarrativeSection::MedicalHistory(s) => medical_history(s),
            NarrativeSection::ProblemDiagnosesThisVisit(s) => list_or_exclusion(
                problems_table(&s.problem_diagnoses),
                s.exclusion_statement.as_ref(),
            ),
            NarrativeSection::ClinicalInterventions(s) => clinical_interventions(s),
            NarrativeSection::ClinicalSynopsis(s) => s
                .description
                .as_deref()
                .map(StrucDocText::paragraph)
                .unwrap_or_default(),
            NarrativeSection::CurrentMedications(s) => current_medications(s),
            NarrativeSection::CeasedMedications(s) => ceased_medications(s),
            NarrativeSection::Alerts(s) => StrucDocText {
                blocks: vec![NarrativeBlock::List {
                    items: s.alerts.iter().map(|a| coded(a.alert_description.as_ref())).collect(),
                }],
            },
            NarrativeSection::ArrangedServices(s) => arranged_services(s),
            NarrativeSection::Recommendations(s) => recommendations(s),
            NarrativeSection::PhysicalMeasurements(s) => physical_measurements(s),
            NarrativeSection::PrescriptionItem(s) => prescription_item(s),
            NarrativeSection::DispenseItem(s) => dispense_item(s),
            NarrativeSection::ConsumerNote(s) => consumer_note(s),
            NarrativeSection::AcdCustodians(s) => acd_custodians(s),
            NarrativeSection::MedicareDvaFundedServices(s) => funded_services(s),
            NarrativeSection::PharmaceuticalBenefitItems(s) => pharmaceutical_benefit_items(s),
            NarrativeSection::ChildhoodImmunisations(s) => childhood_immunisations(s),
            NarrativeSection::OrganDonorRegister(s) => organ_donor_register(s),
            // Container sections only hold subsections
            NarrativeSection::Event(_)
            | NarrativeSection::DischargeMedications(_)
            | NarrativeSection::HealthProfile(_)
            | NarrativeSection::Plan(_) => StrucDocText::default(),
        }
    }
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn coded(value: Option<&CodableText>) -> String {
    value.map(CodableText::narrative_text).unwrap_or_default()
}

fn time(value: Option<&IsoDateTime>) -> String {
    value.map(IsoDateTime::to_display_string).unwrap_or_default()
}

fn interval(value: Option<&CdaInterval>) -> String {
    value.map(CdaInterval::to_display_string).unwrap_or_default()
}

fn code_name<C: CodedValue>(value: Option<C>) -> String {
    value.map(|v| v.display_name().to_string()).unwrap_or_default()
}

fn exclusion_paragraph(statement: &ExclusionStatement) -> NarrativeBlock {
    NarrativeBlock::Paragraph {
        text: code_name(statement.global_statement),
    }
}

/// Table rows, or the exclusion statement when there are no rows
fn list_or_exclusion(table: NarrativeTable, exclusion: Option<&ExclusionStatement>) -> StrucDocText {
    match exclusion {
        Some(statement) if table.rows.is_empty() => StrucDocText {
            blocks: vec![exclusion_paragraph(statement)],
        },
        _ => StrucDocText::table(table),
    }
}

fn field_table(rows: Vec<(&str, String)>) -> StrucDocText {
    let mut table = NarrativeTable::new(["Field", "Value"]);
    for (name, value) in rows.into_iter().filter(|(_, value)| !value.is_empty()) {
        table.push_row([name.to_string(), value]);
    }
    StrucDocText::table(table)
}

fn referral_detail(s: &ReferralDetail) -> StrucDocText {
    field_table(vec![
        ("Referral Date", time(s.referral_date_time.as_ref())),
        ("Reason for Referral", text(&s.reason_for_referral)),
        ("Validity Duration", interval(s.validity_duration.as_ref())),
    ])
}

fn adverse_reactions(s: &AdverseReactions) -> StrucDocText {
    let mut table = NarrativeTable::new(["Substance/Agent", "Manifestations"]);
    for reaction in &s.reactions {
        let manifestations = reaction
            .reaction_events
            .iter()
            .flat_map(|event| event.manifestations.iter().map(CodableText::narrative_text))
            .collect::<Vec<_>>()
            .join(", ");
        table.push_row([coded(reaction.substance_or_agent.as_ref()), manifestations]);
    }
    list_or_exclusion(table, s.exclusion_statement.as_ref())
}

fn medications(s: &Medications) -> StrucDocText {
    let mut table = NarrativeTable::new(["Medicine", "Directions", "Clinical Indication", "Comment"]);
    for item in &s.medications {
        table.push_row([
            coded(item.medicine.as_ref()),
            text(&item.directions),
            text(&item.clinical_indication),
            text(&item.comment),
        ]);
    }
    list_or_exclusion(table, s.exclusion_statement.as_ref())
}

fn problems_table(problems: &[ProblemDiagnosis]) -> NarrativeTable {
    let mut table = NarrativeTable::new(["Problem/Diagnosis", "Onset", "Resolution", "Comment"])
        .with_caption("Problems/Diagnoses");
    for problem in problems {
        table.push_row([
            coded(problem.identification.as_ref()),
            time(problem.date_of_onset.as_ref()),
            time(problem.date_of_resolution_remission.as_ref()),
            text(&problem.comment),
        ]);
    }
    table
}

fn procedures_table(procedures: &[Procedure]) -> NarrativeTable {
    let mut table = NarrativeTable::new(["Procedure", "Date", "Comment"]).with_caption("Procedures");
    for procedure in procedures {
        table.push_row([
            coded(procedure.procedure_name.as_ref()),
            time(procedure.procedure_date.as_ref()),
            text(&procedure.comment),
        ]);
    }
    table
}

fn medical_history(s: &MedicalHistory) -> StrucDocText {
    let mut narrative = list_or_exclusion(
        problems_table(&s.problem_diagnoses),
        s.problem_diagnosis_exclusion.as_ref(),
    );
    narrative.blocks.extend(
        list_or_exclusion(procedures_table(&s.procedures), s.procedure_exclusion.as_ref()).blocks,
    );
    if !s.medical_history_items.is_empty() {
        let mut table = NarrativeTable::new(["Item", "Time", "Comment"]).with_caption("Other Medical History");
        for item in &s.medical_history_items {
            table.push_row([
                text(&item.item_description),
                interval(item.date_time_interval.as_ref()),
                text(&item.comment),
            ]);
        }
        narrative.push(NarrativeBlock::Table(table));
    }
    narrative
}

fn clinical_interventions(s: &ClinicalInterventions) -> StrucDocText {
    StrucDocText::table(procedures_table(&s.procedures))
}

fn current_medications(s: &CurrentMedicationsOnDischarge) -> StrucDocText {
    let mut table = NarrativeTable::new([
        "Medicine",
        "Directions",
        "Clinical Indication",
        "Change Type",
        "Change Status",
        "Reason for Change",
        "Quantity Dispensed",
        "Comments",
    ]);
    for good in &s.therapeutic_goods {
        table.push_row([
            coded(good.medicine.as_ref()),
            text(&good.directions),
            text(&good.clinical_indication),
            code_name(good.change_type),
            code_name(good.change_status),
            text(&good.reason_for_change),
            text(&good.unit_of_use_quantity_dispensed),
            text(&good.additional_comments),
        ]);
    }
    list_or_exclusion(table, s.exclusion_statement.as_ref())
}

fn ceased_medications(s: &CeasedMedications) -> StrucDocText {
    let mut table = NarrativeTable::new(["Medicine", "Change Type", "Change Status", "Reason for Change"]);
    for medication in &s.medications {
        table.push_row([
            coded(medication.medicine.as_ref()),
            code_name(medication.change_type),
            code_name(medication.change_status),
            text(&medication.reason_for_change),
        ]);
    }
    list_or_exclusion(table, s.exclusion_statement.as_ref())
}

fn participant_name(participant: Option<&Participant>) -> String {
    participant.map(Participant::display_name).unwrap_or_default()
}

fn arranged_services(s: &ArrangedServices) -> StrucDocText {
    let mut table = NarrativeTable::new(["Service", "Status", "Commencement", "Provider"]);
    for service in &s.services {
        table.push_row([
            coded(service.description.as_ref()),
            code_name(service.booking_status),
            interval(service.commencement.as_ref()),
            participant_name(service.provider.as_ref()),
        ]);
    }
    StrucDocText::table(table)
}

fn recommendations(s: &Recommendations) -> StrucDocText {
    let mut table = NarrativeTable::new(["Addressee", "Recommendation", "Time Frame"]);
    for recommendation in &s.recommendations {
        table.push_row([
            participant_name(recommendation.addressee.as_ref()),
            text(&recommendation.narrative),
            interval(recommendation.time_frame.as_ref()),
        ]);
    }
    StrucDocText::table(table)
}

fn physical_measurements(s: &PhysicalMeasurementsSection) -> StrucDocText {
    let mut table = NarrativeTable::new(["Measurement", "Value", "Time", "Comment"]);
    for measurement in &s.measurements {
        table.push_row([
            code_name(measurement.measurement_type),
            measurement
                .value
                .as_ref()
                .map(|v| v.to_display_string())
                .unwrap_or_default(),
            time(measurement.observation_time.as_ref()),
            text(&measurement.comment),
        ]);
    }
    StrucDocText::table(table)
}

fn prescription_item(s: &PrescriptionItem) -> StrucDocText {
    field_table(vec![
        ("Medicine", coded(s.therapeutic_good_id.as_ref())),
        ("Date Written", time(s.date_time_prescription_written.as_ref())),
        ("Directions", text(&s.directions)),
        ("Quantity", text(&s.quantity_of_therapeutic_good)),
        (
            "Maximum Repeats",
            s.maximum_number_of_repeats.map(|n| n.to_string()).unwrap_or_default(),
        ),
        (
            "Minimum Interval Between Repeats",
            s.minimum_interval_between_repeats
                .as_ref()
                .map(|q| q.to_display_string())
                .unwrap_or_default(),
        ),
        ("Grounds for Concurrent Supply", code_name(s.grounds_for_concurrent_supply)),
        ("Clinical Indication", text(&s.clinical_indication)),
        ("Comments", text(&s.additional_comments)),
    ])
}

fn dispense_item(s: &DispenseItem) -> StrucDocText {
    field_table(vec![
        ("Medicine", coded(s.therapeutic_good_id.as_ref())),
        ("Date Dispensed", time(s.date_time_of_dispense.as_ref())),
        ("Quantity Dispensed", text(&s.unit_of_use_quantity_dispensed)),
        (
            "Dispense Number",
            match (s.number_of_this_dispense, s.maximum_number_of_repeats) {
                (Some(number), Some(maximum)) => format!("{number} of {}", maximum.saturating_add(1)),
                (Some(number), None) => number.to_string(),
                _ => String::new(),
            },
        ),
        ("Comments", text(&s.additional_comments)),
    ])
}

fn consumer_note(s: &ConsumerNote) -> StrucDocText {
    let mut narrative = StrucDocText::default();
    for value in [&s.title, &s.description].into_iter().flatten() {
        narrative.push(NarrativeBlock::Paragraph { text: value.clone() });
    }
    narrative
}

fn acd_custodians(s: &AcdCustodians) -> StrucDocText {
    let mut table = NarrativeTable::new(["Custodian", "Address", "Contact"]);
    for custodian in &s.custodians {
        let participant = custodian.participant.as_ref();
        table.push_row([
            participant_name(participant),
            participant
                .and_then(|p| p.addresses.first())
                .map(|a| a.to_display_string())
                .unwrap_or_default(),
            participant
                .map(|p| {
                    p.electronic_communication_details
                        .iter()
                        .filter_map(|d| d.address.clone())
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .unwrap_or_default(),
        ]);
    }
    StrucDocText::table(table)
}

fn yes_no(value: Option<bool>) -> String {
    match value {
        Some(true) => "Yes".into(),
        Some(false) => "No".into(),
        None => String::new(),
    }
}

fn count(value: Option<u32>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

fn funded_services(s: &MedicareDvaFundedServices) -> StrucDocText {
    let mut table = NarrativeTable::new(["Date of Service", "Service", "In Hospital", "Provider"]);
    for service in &s.services {
        table.push_row([
            time(service.date_of_service.as_ref()),
            coded(service.service.as_ref()),
            yes_no(service.service_in_hospital),
            participant_name(service.service_provider.as_ref()),
        ]);
    }
    list_or_exclusion(table, s.exclusion_statement.as_ref())
}

fn pharmaceutical_benefit_items(s: &PharmaceuticalBenefitItems) -> StrucDocText {
    let mut table = NarrativeTable::new([
        "Date of Supply",
        "Item Code",
        "Medicine",
        "Quantity",
        "Repeats",
        "Date of Prescribing",
    ]);
    for item in &s.items {
        table.push_row([
            time(item.date_of_supply.as_ref()),
            coded(item.item_code.as_ref()),
            coded(item.medicine.as_ref()),
            text(&item.quantity),
            count(item.number_of_repeats),
            time(item.date_of_prescribing.as_ref()),
        ]);
    }
    list_or_exclusion(table, s.exclusion_statement.as_ref())
}

fn childhood_immunisations(s: &ChildhoodImmunisations) -> StrucDocText {
    let mut table = NarrativeTable::new(["Date Administered", "Vaccine", "Dose"]);
    for immunisation in &s.immunisations {
        table.push_row([
            time(immunisation.date_administered.as_ref()),
            coded(immunisation.vaccine.as_ref()),
            count(immunisation.dose_number),
        ]);
    }
    list_or_exclusion(table, s.exclusion_statement.as_ref())
}

fn organ_donor_register(s: &OrganDonorRegistration) -> StrucDocText {
    field_table(vec![
        ("Date of Initial Registration", time(s.date_of_initial_registration.as_ref())),
        ("Donation Decision", yes_no(s.donation_decision)),
        (
            "Organs and Tissues",
            s.organs_and_tissues
                .iter()
                .map(CodableText::narrative_text)
                .collect::<Vec<_>>()
                .join(", "),
        ),
    ])
}
