//! CDA tree structure for each document type

mod common;

use common::*;
use pcehr_cda::config::GeneratorConfig;
use pcehr_cda::core::narrative::{EmptyNarrativeGenerator, TableNarrativeGenerator};
use pcehr_cda::domain::clinical::{DischargeMedications, ProblemDiagnosis};
use pcehr_cda::domain::codes::EntitlementType;
use pcehr_cda::domain::common::{Entitlement, Identifier};
use pcehr_cda::xml::XmlElement;
use pcehr_cda::{generate, CdaDocument, CdaGenerator, Validated};

fn tree<D: CdaDocument>(document: D) -> XmlElement {
    let validated = Validated::new(document).expect("fixture validates");
    generate(&validated, &TableNarrativeGenerator).expect("fixture generates")
}

fn lenient_generator() -> CdaGenerator {
    CdaGenerator::from_config(&GeneratorConfig {
        fail_on_validation_errors: false,
        ..Default::default()
    })
    .expect("default narrative mode")
}

fn section_of(component: &XmlElement) -> &XmlElement {
    component.first_child("section").expect("component holds a section")
}

fn title(section: &XmlElement) -> String {
    section
        .first_child("title")
        .map(XmlElement::text_content)
        .unwrap_or_default()
}

/// Titles of the top-level body sections
fn body_titles(root: &XmlElement) -> Vec<String> {
    root.path(&["component", "structuredBody"])
        .expect("structured body")
        .children_named("component")
        .map(|c| title(section_of(c)))
        .collect()
}

/// Titles of the subsections directly under `section`
fn subsection_titles(section: &XmlElement) -> Vec<String> {
    section
        .children_named("component")
        .map(|c| title(section_of(c)))
        .collect()
}

fn body_section<'a>(root: &'a XmlElement, wanted: &str) -> &'a XmlElement {
    root.path(&["component", "structuredBody"])
        .expect("structured body")
        .children_named("component")
        .map(section_of)
        .find(|s| title(s) == wanted)
        .unwrap_or_else(|| panic!("no section titled {wanted}"))
}

fn child_names(element: &XmlElement) -> Vec<&str> {
    element.elements().map(|e| e.name.as_str()).collect()
}

#[test]
fn test_header_element_order() {
    let root = tree(maximal_discharge_summary());
    let names = child_names(&root);
    let expected_prefix = [
        "typeId",
        "templateId",
        "id",
        "code",
        "title",
        "effectiveTime",
        "confidentialityCode",
        "languageCode",
        "ext:completionCode",
        "recordTarget",
        "author",
        "custodian",
        "legalAuthenticator",
        "participant",
        "ext:coverage2",
        "componentOf",
        "component",
    ];
    assert_eq!(names, expected_prefix);
}

#[test]
fn test_minimal_referral_has_no_optional_header_parts() {
    let root = tree(minimal_e_referral());
    assert!(root.first_child("legalAuthenticator").is_none());
    assert!(root.first_child("componentOf").is_none());
    assert!(root.first_child("setId").is_none());
    assert_eq!(root.children_named("participant").count(), 1);
    assert_eq!(
        body_titles(&root),
        vec!["Referral Detail", "Adverse Reactions", "Medications", "Medical History"]
    );
}

#[test]
fn test_referral_participant_type_codes() {
    let root = tree(maximal_e_referral());
    let type_codes: Vec<_> = root
        .children_named("participant")
        .filter_map(|p| p.attribute("typeCode"))
        .collect();
    assert_eq!(type_codes, vec!["REFT", "PART"]);

    let usual_gp = root.children_named("participant").nth(1).unwrap();
    assert_eq!(usual_gp.path(&["functionCode"]).and_then(|f| f.attribute("code")), Some("PCP"));
}

#[test]
fn test_minimal_discharge_summary_skeleton() {
    let root = tree(minimal_discharge_summary());
    assert_eq!(body_titles(&root), vec!["Event", "Health Profile"]);

    let event = body_section(&root, "Event");
    assert_eq!(subsection_titles(event), vec!["Problems/Diagnoses This Visit"]);

    let profile = body_section(&root, "Health Profile");
    assert_eq!(subsection_titles(profile), vec!["Adverse Reactions"]);
}

#[test]
fn test_maximal_discharge_summary_subsection_order() {
    let root = tree(maximal_discharge_summary());
    assert_eq!(
        body_titles(&root),
        vec!["Event", "Medications", "Health Profile", "Plan"]
    );
    assert_eq!(
        subsection_titles(body_section(&root, "Event")),
        vec![
            "Problems/Diagnoses This Visit",
            "Clinical Interventions Performed This Visit",
            "Clinical Synopsis",
        ]
    );
    assert_eq!(
        subsection_titles(body_section(&root, "Medications")),
        vec!["Current Medications On Discharge", "Ceased Medications"]
    );
    assert_eq!(
        subsection_titles(body_section(&root, "Health Profile")),
        vec!["Adverse Reactions", "Alerts"]
    );
    assert_eq!(
        subsection_titles(body_section(&root, "Plan")),
        vec!["Arranged Services", "Record of Recommendations and Information Provided"]
    );
}

#[test]
fn test_only_ceased_medications_are_written() {
    let mut summary = minimal_discharge_summary();
    summary.content.medications = Some(DischargeMedications {
        ceased_medications: Some(ceased_medications()),
        ..Default::default()
    });

    let root = tree(summary);
    let medications = body_section(&root, "Medications");
    assert_eq!(subsection_titles(medications), vec!["Ceased Medications"]);
}

#[test]
fn test_empty_discharge_medications_are_omitted() {
    let mut summary = minimal_discharge_summary();
    summary.content.medications = Some(DischargeMedications::default());
    let root = tree(summary);
    assert_eq!(body_titles(&root), vec!["Event", "Health Profile"]);
}

#[test]
fn test_onset_only_problem() {
    let mut summary = minimal_discharge_summary();
    if let Some(problems) = summary
        .content
        .event
        .as_mut()
        .and_then(|e| e.problem_diagnoses_this_visit.as_mut())
    {
        problems.exclusion_statement = None;
        problems.problem_diagnoses = vec![ProblemDiagnosis {
            date_of_onset: Some(date(2024, 2, 20)),
            ..ProblemDiagnosis::new(snomed("195967001", "Asthma"))
        }];
    }

    let root = tree(summary);
    let problems = body_section(&root, "Event")
        .children_named("component")
        .map(section_of)
        .next()
        .unwrap();
    let observation = problems.path(&["entry", "observation"]).unwrap();

    let effective = observation.first_child("effectiveTime").unwrap();
    assert_eq!(child_names(effective), vec!["low"]);
    assert_eq!(effective.path(&["low"]).and_then(|l| l.attribute("value")), Some("20240220"));
    assert!(observation.first_child("entryRelationship").is_none());
}

#[test]
fn test_exclusion_statement_replaces_entries() {
    let root = tree(minimal_e_referral());
    let reactions = body_section(&root, "Adverse Reactions");
    assert_eq!(reactions.children_named("entry").count(), 1);
    assert!(reactions.find_all("act").len() + reactions.find_all("observation").len() >= 1);
}

#[test]
fn test_narrative_and_entries_agree_when_list_and_exclusion_are_both_given() {
    let mut referral = minimal_e_referral();
    if let Some(reactions) = referral.content.adverse_reactions.as_mut() {
        reactions.reactions = vec![penicillin_reaction()];
    }
    assert!(!pcehr_cda::validate(&referral).is_empty());

    let root = lenient_generator().validate_and_generate(&referral).unwrap();
    let reactions = body_section(&root, "Adverse Reactions");

    assert_eq!(reactions.children_named("entry").count(), 1);
    assert_eq!(reactions.find_all("playingEntity").len(), 1);

    let text = reactions.first_child("text").unwrap();
    assert!(text.find_all("paragraph").is_empty());
    assert_eq!(text.find_all("table").len(), 1);
    assert!(text.text_content().contains("Penicillin"));
    assert!(!text.text_content().contains("None known"));
}

#[test]
fn test_unbounded_repeats_render() {
    let mut record = dispense_record();
    if let Some(item) = record.dispense_item.as_mut() {
        item.maximum_number_of_repeats = Some(u32::MAX);
    }
    let xml = CdaGenerator::default().render(&record).unwrap();
    assert!(xml.contains("1 of 4294967296"));
    assert!(xml.contains("value=\"4294967295\""));
}

#[test]
fn test_encounter_participant_entitlements_become_coverage() {
    let mut summary = minimal_discharge_summary();
    let before = tree(summary.clone()).children_named("ext:coverage2").count();

    if let Some(participant) = summary
        .encounter
        .as_mut()
        .and_then(|e| e.responsible_health_professionals.first_mut())
        .and_then(|p| p.participant.as_mut())
    {
        participant.entitlements.push(Entitlement::new(
            EntitlementType::MedicarePrescriberNumber,
            Identifier::new("1.2.36.174030967.0.3", Some("2448921T".to_string())),
        ));
    }

    let root = tree(summary);
    let coverage: Vec<_> = root.children_named("ext:coverage2").collect();
    assert_eq!(coverage.len(), before + 1);

    let beneficiary = coverage
        .last()
        .and_then(|c| c.path(&["ext:entitlement", "ext:participant", "ext:participantRole", "ext:id"]))
        .unwrap();
    assert_eq!(beneficiary.attribute("root"), Some(id(121).to_string().as_str()));
}

#[test]
fn test_coverage_links_to_patient_participant() {
    let root = tree(minimal_e_referral());
    let coverage: Vec<_> = root.children_named("ext:coverage2").collect();
    assert_eq!(coverage.len(), 1);

    let beneficiary = coverage[0]
        .path(&["ext:entitlement", "ext:participant", "ext:participantRole", "ext:id"])
        .unwrap();
    assert_eq!(beneficiary.attribute("root"), Some(id(100).to_string().as_str()));

    let patient_id = root.path(&["recordTarget", "patientRole", "id"]).unwrap();
    assert_eq!(patient_id.attribute("root"), beneficiary.attribute("root"));
}

#[test]
fn test_component_of_for_discharge() {
    let root = tree(maximal_discharge_summary());
    let encounter = root.path(&["componentOf", "encompassingEncounter"]).unwrap();
    assert!(encounter.first_child("responsibleParty").is_some());
    assert_eq!(encounter.children_named("encounterParticipant").count(), 1);
    assert!(encounter.path(&["location", "healthCareFacility", "code"]).is_some());
}

#[test]
fn test_single_section_records() {
    assert_eq!(body_titles(&tree(physical_measurements())), vec!["Physical Measurements"]);
    assert_eq!(body_titles(&tree(prescription_record())), vec!["Prescription Item"]);
    assert_eq!(body_titles(&tree(dispense_record())), vec!["Dispense Item"]);
    assert_eq!(body_titles(&tree(consumer_notes())), vec!["Consumer Entered Note"]);
    assert_eq!(
        body_titles(&tree(acd_custodian_record())),
        vec!["Advance Care Directive Custodians"]
    );
}

#[test]
fn test_medicare_overview_sections_in_order() {
    let root = tree(medicare_overview());
    assert_eq!(
        body_titles(&root),
        vec![
            "Medicare/DVA Funded Services",
            "Pharmaceutical Benefit Items",
            "Australian Childhood Immunisation Register",
            "Australian Organ Donor Register",
        ]
    );
    let services = body_section(&root, "Medicare/DVA Funded Services");
    assert_eq!(
        services
            .path(&["entry", "act", "code"])
            .and_then(|code| code.attribute("codeSystem")),
        Some("1.2.36.1.2001.1005.34")
    );
}

#[test]
fn test_medicare_overview_writes_only_given_views() {
    let mut overview = medicare_overview();
    overview.content.funded_services = None;
    overview.content.organ_donor_registration = None;
    if let Some(items) = overview.content.pharmaceutical_benefit_items.as_mut() {
        items.items.clear();
        items.exclusion_statement = Some(none_known());
    }
    let root = tree(overview);
    assert_eq!(
        body_titles(&root),
        vec!["Pharmaceutical Benefit Items", "Australian Childhood Immunisation Register"]
    );
    let items = body_section(&root, "Pharmaceutical Benefit Items");
    assert_eq!(items.children_named("entry").count(), 1);
    assert_eq!(
        items.first_child("text").map(XmlElement::text_content),
        Some("None known".to_string())
    );
}

#[test]
fn test_service_provider_entitlements_become_coverage() {
    let mut overview = medicare_overview();
    let before = tree(overview.clone()).children_named("ext:coverage2").count();

    if let Some(provider) = overview
        .content
        .funded_services
        .as_mut()
        .and_then(|s| s.services.first_mut())
        .and_then(|service| service.service_provider.as_mut())
    {
        provider.entitlements.push(Entitlement::new(
            EntitlementType::MedicarePrescriberNumber,
            Identifier::new("1.2.36.174030967.0.3", Some("2448921T".to_string())),
        ));
    }

    let root = tree(overview);
    let coverage: Vec<_> = root.children_named("ext:coverage2").collect();
    assert_eq!(coverage.len(), before + 1);
    let beneficiary = coverage
        .last()
        .and_then(|c| c.path(&["ext:entitlement", "ext:participant", "ext:participantRole", "ext:id"]))
        .unwrap();
    assert_eq!(beneficiary.attribute("root"), Some(id(160).to_string().as_str()));
}

#[test]
fn test_generation_is_idempotent() {
    for document in all_documents() {
        let validated = Validated::new(document).unwrap();
        let first = generate(&validated, &TableNarrativeGenerator).unwrap();
        let second = generate(&validated, &TableNarrativeGenerator).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_rendered_output_is_deterministic() {
    let generator = CdaGenerator::default();
    for document in all_documents() {
        let first = generator.render(&document).unwrap();
        let second = generator.render(&document).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_empty_narrative_leaves_text_blank() {
    let validated = Validated::new(minimal_e_referral()).unwrap();
    let root = generate(&validated, &EmptyNarrativeGenerator).unwrap();
    let text = body_section(&root, "Adverse Reactions").first_child("text").unwrap();
    assert!(text.is_empty());
}
