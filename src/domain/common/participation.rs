//! Participation roles
//!
//! One small struct per role. Each wraps a [`Participant`] and adds the
//! role-specific data and rules (allowed party kinds, authoring time, role
//! code).

use super::codable_text::CodableText;
use super::datetime::IsoDateTime;
use super::participant::Participant;
use super::party::{Party, PartyKind};
use crate::core::validation::{join_path, Presence, Validate, ValidationBuilder};
use serde::{Deserialize, Serialize};

const PERSON: &[PartyKind] = &[PartyKind::Person];
const ORGANISATION: &[PartyKind] = &[PartyKind::Organisation];
const PERSON_OR_ORGANISATION: &[PartyKind] = &[PartyKind::Person, PartyKind::Organisation];
const PERSON_OR_DEVICE: &[PartyKind] = &[PartyKind::Person, PartyKind::Device];

/// Requires the participant and validates it against the allowed party kinds
fn validate_participant<'a>(
    path: &str,
    participant: Option<&'a Participant>,
    allowed: &[PartyKind],
    vb: &mut ValidationBuilder,
) -> Option<&'a Party> {
    if !vb.argument_required_check(path, "Participant", &participant) {
        return None;
    }
    participant?.validate_as(&join_path(path, "Participant"), allowed, vb)
}

fn require_organisation_identifier(path: &str, party: Option<&Party>, vb: &mut ValidationBuilder) {
    if let Some(organisation) = party.and_then(Party::as_organisation) {
        vb.argument_required_check(
            &join_path(&join_path(path, "Participant.Party"), "Organisation"),
            "Identifiers",
            &organisation.identifiers,
        );
    }
}

/// The patient the document is about
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubjectOfCare {
    pub participant: Option<Participant>,
}

impl Presence for SubjectOfCare {}

impl Validate for SubjectOfCare {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        let party = validate_participant(path, self.participant.as_ref(), PERSON, vb);
        if let Some(person) = party.and_then(Party::as_person) {
            let person_path = join_path(path, "Participant.Party.Person");
            vb.argument_required_check(&person_path, "Sex", &person.sex);
            vb.argument_required_check(&person_path, "DateOfBirth", &person.date_of_birth);
        }
    }
}

/// Who wrote the document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub participant: Option<Participant>,
    /// Time the author participated
    pub participation_period: Option<IsoDateTime>,
    pub role: Option<CodableText>,
}

impl Presence for Author {}

impl Validate for Author {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        validate_participant(path, self.participant.as_ref(), PERSON_OR_DEVICE, vb);
        vb.argument_required_check(path, "ParticipationPeriod", &self.participation_period);
        if vb.argument_required_check(path, "Role", &self.role) {
            if let Some(role) = &self.role {
                role.validate_mandatory(&join_path(path, "Role"), vb);
            }
        }
    }
}

/// Organisation responsible for maintaining the document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Custodian {
    pub participant: Option<Participant>,
}

impl Presence for Custodian {}

impl Validate for Custodian {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        let party = validate_participant(path, self.participant.as_ref(), ORGANISATION, vb);
        require_organisation_identifier(path, party, vb);
    }
}

/// Person who signed the document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegalAuthenticator {
    pub participant: Option<Participant>,
    pub time_of_signature: Option<IsoDateTime>,
}

impl Presence for LegalAuthenticator {}

impl Validate for LegalAuthenticator {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        validate_participant(path, self.participant.as_ref(), PERSON, vb);
        vb.argument_required_check(path, "TimeOfSignature", &self.time_of_signature);
    }
}

/// Recipient of a referral
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Referee {
    pub participant: Option<Participant>,
    pub role: Option<CodableText>,
}

impl Presence for Referee {}

impl Validate for Referee {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        validate_participant(path, self.participant.as_ref(), PERSON_OR_ORGANISATION, vb);
        vb.validate_optional(path, "Role", self.role.as_ref());
    }
}

/// The patient's usual general practitioner
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsualGp {
    pub participant: Option<Participant>,
}

impl Presence for UsualGp {}

impl Validate for UsualGp {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        validate_participant(path, self.participant.as_ref(), PERSON_OR_ORGANISATION, vb);
    }
}

/// Organisation at which a prescription was written
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrescriberOrganisation {
    pub participant: Option<Participant>,
}

impl Presence for PrescriberOrganisation {}

impl Validate for PrescriberOrganisation {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        let party = validate_participant(path, self.participant.as_ref(), ORGANISATION, vb);
        require_organisation_identifier(path, party, vb);
    }
}

/// Pharmacy that dispensed an item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispensingOrganisation {
    pub participant: Option<Participant>,
}

impl Presence for DispensingOrganisation {}

impl Validate for DispensingOrganisation {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        let party = validate_participant(path, self.participant.as_ref(), ORGANISATION, vb);
        require_organisation_identifier(path, party, vb);
    }
}

/// Facility where an encounter took place
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthcareFacility {
    pub participant: Option<Participant>,
}

impl Presence for HealthcareFacility {}

impl Validate for HealthcareFacility {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        validate_participant(path, self.participant.as_ref(), ORGANISATION, vb);
    }
}

/// Clinician responsible for the patient during an encounter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponsibleHealthProfessional {
    pub participant: Option<Participant>,
    pub role: Option<CodableText>,
}

impl Presence for ResponsibleHealthProfessional {}

impl Validate for ResponsibleHealthProfessional {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        validate_participant(path, self.participant.as_ref(), PERSON, vb);
        vb.validate_optional(path, "Role", self.role.as_ref());
    }
}

/// Provider nominated to receive a copy of a discharge summary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NominatedPrimaryHealthcareProvider {
    pub participant: Option<Participant>,
}

impl Presence for NominatedPrimaryHealthcareProvider {}

impl Validate for NominatedPrimaryHealthcareProvider {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        validate_participant(path, self.participant.as_ref(), PERSON_OR_ORGANISATION, vb);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::codes::{Occupation, Sex};
    use crate::domain::common::{Organisation, Person, PersonName};

    fn person() -> Participant {
        Participant::new(Party::Person(Person::named(PersonName::new("Jane", "Citizen"))))
    }

    #[test]
    fn test_subject_of_care_requires_demographics() {
        let mut vb = ValidationBuilder::new();
        SubjectOfCare {
            participant: Some(person()),
        }
        .validate("Doc.SubjectOfCare", &mut vb);

        let fields: Vec<_> = vb.messages().iter().map(|m| m.field_name.as_str()).collect();
        assert_eq!(fields, vec!["Sex", "DateOfBirth"]);
        assert_eq!(vb.messages()[0].path, "Doc.SubjectOfCare.Participant.Party.Person");
    }

    #[test]
    fn test_complete_subject_of_care() {
        let mut participant = person();
        if let Some(Party::Person(p)) = participant.party.as_mut() {
            p.sex = Some(Sex::Female);
            p.date_of_birth = IsoDateTime::date(1970, 1, 1);
        }
        let mut vb = ValidationBuilder::new();
        SubjectOfCare {
            participant: Some(participant),
        }
        .validate("S", &mut vb);
        assert!(vb.is_empty(), "{:?}", vb.messages());
    }

    #[test]
    fn test_author_collects_all_missing_fields() {
        let mut vb = ValidationBuilder::new();
        Author::default().validate("Doc.Author", &mut vb);
        let fields: Vec<_> = vb.messages().iter().map(|m| m.field_name.as_str()).collect();
        assert_eq!(fields, vec!["Participant", "ParticipationPeriod", "Role"]);
    }

    #[test]
    fn test_author_role_must_be_described() {
        let mut vb = ValidationBuilder::new();
        Author {
            participant: Some(person()),
            participation_period: IsoDateTime::date(2024, 1, 1),
            role: Some(CodableText {
                code: Some("253111".into()),
                code_system: Some("2.16.840.1.113883.13.62".into()),
                ..Default::default()
            }),
        }
        .validate("A", &mut vb);
        assert_eq!(vb.len(), 1);
        assert_eq!(vb.messages()[0].path, "A.Role");

        let mut vb = ValidationBuilder::new();
        Author {
            participant: Some(person()),
            participation_period: IsoDateTime::date(2024, 1, 1),
            role: Some(CodableText::from_coded(&Occupation::GeneralMedicalPractitioner)),
        }
        .validate("A", &mut vb);
        assert!(vb.is_empty());
    }

    #[test]
    fn test_custodian_needs_organisation_identifier() {
        let mut vb = ValidationBuilder::new();
        Custodian {
            participant: Some(Participant::new(Party::Organisation(Organisation::named("Hospital")))),
        }
        .validate("Doc.Custodian", &mut vb);
        assert_eq!(vb.len(), 1);
        assert_eq!(
            vb.messages()[0].location(),
            "Doc.Custodian.Participant.Party.Organisation.Identifiers"
        );
    }

    #[test]
    fn test_custodian_rejects_person() {
        let mut vb = ValidationBuilder::new();
        Custodian {
            participant: Some(person()),
        }
        .validate("C", &mut vb);
        assert_eq!(vb.messages()[0].message, "Party must be Organisation, found Person");
    }
}
