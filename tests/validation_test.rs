//! Validation behaviour across whole documents

mod common;

use common::*;
use pcehr_cda::core::validation::ValidationMessage;
use pcehr_cda::domain::clinical::{AdverseReactions, ProblemDiagnosis};
use pcehr_cda::domain::common::{Address, AustralianAddress, InternationalAddress};
use pcehr_cda::domain::codes::AddressPurpose;
use pcehr_cda::domain::documents::EReferral;
use pcehr_cda::{validate, CdaError, Validated};
use test_case::test_case;

fn messages_at<'a>(messages: &'a [ValidationMessage], location_suffix: &str) -> Vec<&'a ValidationMessage> {
    messages
        .iter()
        .filter(|m| m.location().ends_with(location_suffix))
        .collect()
}

#[test]
fn test_every_fixture_is_valid() {
    for document in all_documents() {
        let messages = validate(&document);
        assert!(messages.is_empty(), "unexpected messages: {messages:?}");
    }
}

#[test]
fn test_empty_referral_reports_every_missing_part() {
    let messages = validate(&EReferral::default());
    let locations: Vec<_> = messages.iter().map(|m| m.location()).collect();
    for expected in [
        "EReferral.Header.DocumentId",
        "EReferral.Header.CreationTime",
        "EReferral.Context.SubjectOfCare",
        "EReferral.Context.Author",
        "EReferral.Context.Custodian",
        "EReferral.Referee",
        "EReferral.Content.ReferralDetail",
        "EReferral.Content.MedicalHistory",
    ] {
        assert!(locations.iter().any(|l| l == expected), "missing {expected} in {locations:?}");
    }
}

#[test_case(true, true, 1; "both populated")]
#[test_case(false, false, 1; "neither populated")]
#[test_case(true, false, 0; "only reactions")]
#[test_case(false, true, 0; "only exclusion")]
fn test_adverse_reaction_choice(reactions: bool, exclusion: bool, expected: usize) {
    let mut referral = minimal_e_referral();
    referral.content.adverse_reactions = Some(AdverseReactions {
        reactions: if reactions { vec![penicillin_reaction()] } else { vec![] },
        exclusion_statement: exclusion.then(none_known),
        custom_narrative: None,
    });

    let messages = validate(&referral);
    assert_eq!(messages.len(), expected, "{messages:?}");
    if let Some(message) = messages.first() {
        assert_eq!(message.path, "EReferral.Content.AdverseReactions");
        assert!(message.field_name.contains("Reactions"));
        assert!(message.field_name.contains("ExclusionStatement"));
    }
}

#[test]
fn test_address_choice_names_both_variants() {
    let mut referral = minimal_e_referral();
    let mut both = Address::australian(AddressPurpose::Business, AustralianAddress::default());
    both.international_address = Some(InternationalAddress {
        country: Some("New Zealand".to_string()),
        ..Default::default()
    });
    if let Some(participant) = referral
        .referee
        .as_mut()
        .and_then(|r| r.participant.as_mut())
    {
        participant.addresses = vec![both];
    }

    let messages = validate(&referral);
    assert_eq!(messages.len(), 1, "{messages:?}");
    assert_eq!(messages[0].field_name, "AustralianAddress, InternationalAddress");
    assert!(messages[0].path.ends_with("Referee.Participant.Addresses[0]"));
}

#[test]
fn test_invalid_list_element_reports_its_index() {
    let mut referral = maximal_e_referral();
    if let Some(history) = referral.content.medical_history.as_mut() {
        history.problem_diagnoses = vec![asthma(), ProblemDiagnosis::default(), ProblemDiagnosis::default()];
    }

    let messages = validate(&referral);
    let problems = messages_at(&messages, "ProblemDiagnosisIdentification");
    assert_eq!(problems.len(), 2);
    assert!(problems[0].path.ends_with("ProblemDiagnoses[1]"));
    assert!(problems[1].path.ends_with("ProblemDiagnoses[2]"));
}

#[test]
fn test_messages_are_not_truncated_at_first_error() {
    let mut summary = maximal_discharge_summary();
    summary.encounter = None;
    if let Some(profile) = summary.content.health_profile.as_mut() {
        profile.adverse_reactions = None;
    }
    summary.header.creation_time = None;

    let messages = validate(&summary);
    let locations: Vec<_> = messages.iter().map(|m| m.location()).collect();
    assert_eq!(messages.len(), 3, "{locations:?}");
    assert!(locations.contains(&"DischargeSummary.Header.CreationTime".to_string()));
    assert!(locations.contains(&"DischargeSummary.Encounter".to_string()));
    assert!(locations.contains(&"DischargeSummary.Content.HealthProfile.AdverseReactions".to_string()));
}

#[test]
fn test_resolution_before_onset_is_rejected() {
    let mut referral = maximal_e_referral();
    if let Some(history) = referral.content.medical_history.as_mut() {
        history.problem_diagnoses[0].date_of_resolution_remission = Some(date(2000, 1, 1));
    }
    let messages = validate(&referral);
    assert_eq!(messages_at(&messages, "DateOfResolutionRemission").len(), 1);
}

#[test]
fn test_wrong_party_kind_for_custodian() {
    let mut notes = consumer_notes();
    if let Some(custodian) = notes.context.custodian.as_mut() {
        custodian.participant = Some(patient());
    }
    let messages = validate(&notes);
    assert_eq!(messages.len(), 1, "{messages:?}");
    assert_eq!(messages[0].field_name, "Party");
    assert!(messages[0].message.contains("Organisation"));
}

#[test]
fn test_validated_carries_messages_in_error() {
    let mut record = dispense_record();
    if let Some(item) = record.dispense_item.as_mut() {
        item.number_of_this_dispense = Some(5);
    }
    match Validated::new(record) {
        Err(CdaError::Validation { messages }) => {
            assert_eq!(messages.len(), 1);
            assert_eq!(messages[0].field_name, "NumberOfThisDispense");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_device_author_is_accepted() {
    let mut notes = consumer_notes();
    notes.context.author = Some(device_author());
    assert!(validate(&notes).is_empty());
}

#[test]
fn test_medicare_overview_needs_a_view() {
    let mut overview = medicare_overview();
    overview.content = Default::default();
    let messages = validate(&overview);
    assert_eq!(messages.len(), 1, "{messages:?}");
    assert_eq!(messages[0].location(), "MedicareOverview.Content.Views");
}

#[test_case(true, true, 1 ; "both services and exclusion")]
#[test_case(false, false, 1 ; "neither")]
#[test_case(true, false, 0 ; "services only")]
#[test_case(false, true, 0 ; "exclusion only")]
fn test_funded_services_choice(services: bool, exclusion: bool, expected: usize) {
    let mut overview = medicare_overview();
    if let Some(funded) = overview.content.funded_services.as_mut() {
        if !services {
            funded.services.clear();
        }
        if exclusion {
            funded.exclusion_statement = Some(none_known());
        }
    }
    let messages = validate(&overview);
    assert_eq!(messages_at(&messages, "Services, ExclusionStatement").len(), expected);
    assert_eq!(messages.len(), expected, "{messages:?}");
}
