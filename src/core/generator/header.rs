//! CDA header mapping
//!
//! Builds the `ClinicalDocument` root and the header participations that
//! precede the body: record target, author, custodian, legal authenticator,
//! document participants, coverage and the encompassing encounter.

use super::helper::{
    create_address, create_code_from_descriptor, create_codable_text, create_coded,
    create_contact_details, create_entity_identifiers, create_identifier, create_interval,
    create_organisation, create_participant_id, create_party_entity, create_person,
    create_person_name, create_telecom, create_time, party, required, CDA_NAMESPACE,
    EXT_NAMESPACE, XSI_NAMESPACE,
};
use crate::domain::clinical::Encounter;
use crate::domain::codes::{CodeDescriptor, CodingSystem, DocumentKind};
use crate::domain::common::{
    Author, CodableText, Custodian, LegalAuthenticator, Participant, Party, SubjectOfCare,
};
use crate::domain::documents::DocumentHeader;
use crate::domain::errors::GenerationError;
use crate::domain::{CdaError, Result};
use crate::xml::XmlElement;

const CDA_TYPE_ID_ROOT: &str = "2.16.840.1.113883.1.3";
const CDA_TYPE_ID_EXTENSION: &str = "POCD_HD000040";

const PRIMARY_CARE_PHYSICIAN: CodeDescriptor = CodeDescriptor::new(
    "PCP",
    "primary care physician",
    CodingSystem::Hl7ParticipationFunction,
);

/// How a document-level participant is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticipantRole {
    /// `participant/@typeCode`
    pub type_code: &'static str,
    pub function_code: Option<CodeDescriptor>,
    /// `associatedEntity/@classCode`
    pub class_code: &'static str,
}

impl ParticipantRole {
    pub const REFEREE: Self = Self::new("REFT", "PROV");
    pub const USUAL_GP: Self = Self {
        type_code: "PART",
        function_code: Some(PRIMARY_CARE_PHYSICIAN),
        class_code: "PROV",
    };
    pub const PRESCRIBER_ORGANISATION: Self = Self::new("PRF", "PROV");
    pub const DISPENSING_ORGANISATION: Self = Self::new("PRF", "PROV");
    pub const NOMINATED_PRIMARY_HEALTHCARE_PROVIDER: Self = Self::new("IRCP", "PROV");

    const fn new(type_code: &'static str, class_code: &'static str) -> Self {
        Self {
            type_code,
            function_code: None,
            class_code,
        }
    }
}

/// `ClinicalDocument` root with the administrative header elements
pub fn create_clinical_document(kind: DocumentKind, header: &DocumentHeader) -> Result<XmlElement> {
    let document_id = required(header.document_id.as_ref(), "Header.DocumentId")?;
    let creation_time = required(header.creation_time.as_ref(), "Header.CreationTime")?;
    let status = required(header.status.as_ref(), "Header.Status")?;

    Ok(XmlElement::new("ClinicalDocument")
        .attr("xmlns", CDA_NAMESPACE)
        .attr("xmlns:ext", EXT_NAMESPACE)
        .attr("xmlns:xsi", XSI_NAMESPACE)
        .child(
            XmlElement::new("typeId")
                .attr("root", CDA_TYPE_ID_ROOT)
                .attr("extension", CDA_TYPE_ID_EXTENSION),
        )
        .child(
            XmlElement::new("templateId")
                .attr("root", kind.template_id())
                .attr("extension", kind.template_version()),
        )
        .child(create_identifier("id", document_id))
        .child(create_code_from_descriptor("code", &kind.code()))
        .child(XmlElement::new("title").text(kind.title()))
        .child(create_time("effectiveTime", creation_time))
        .child(XmlElement::new("confidentialityCode").attr("nullFlavor", "NA"))
        .child(XmlElement::new("languageCode").attr("code", "en-AU"))
        .child_opt(header.set_id.as_ref().map(|id| create_identifier("setId", id)))
        .child_opt(
            header
                .version_number
                .map(|v| XmlElement::new("versionNumber").attr("value", v.to_string())),
        )
        .child(create_coded("ext:completionCode", status)))
}

pub fn create_record_target(subject: &SubjectOfCare) -> Result<XmlElement> {
    let participant = required(subject.participant.as_ref(), "SubjectOfCare.Participant")?;
    let person = match party(participant, "SubjectOfCare.Participant.Party")? {
        Party::Person(person) => person,
        other => return Err(wrong_party("SubjectOfCare.Participant.Party", other)),
    };

    let patient = XmlElement::new("patient")
        .attr("classCode", "PSN")
        .attr("determinerCode", "INSTANCE")
        .children_from(person.names.iter().map(create_person_name))
        .child_opt(person.sex.map(|sex| create_coded("administrativeGenderCode", &sex)))
        .child_opt(person.date_of_birth.as_ref().map(|dob| create_time("birthTime", dob)))
        .children_from(create_entity_identifiers(&person.identifiers));

    Ok(XmlElement::new("recordTarget").attr("typeCode", "RCT").child(
        XmlElement::new("patientRole")
            .attr("classCode", "PAT")
            .child(create_participant_id(participant))
            .children_from(create_contact_details(participant))
            .child(patient),
    ))
}

pub fn create_author(author: &Author) -> Result<XmlElement> {
    let participant = required(author.participant.as_ref(), "Author.Participant")?;
    let time = required(author.participation_period.as_ref(), "Author.ParticipationPeriod")?;

    let entity = match party(participant, "Author.Participant.Party")? {
        Party::Person(person) => create_person("assignedPerson", person),
        Party::Device(device) => XmlElement::new("assignedAuthoringDevice")
            .attr("classCode", "DEV")
            .attr("determinerCode", "INSTANCE")
            .child_opt(
                device
                    .manufacturer_model_name
                    .as_ref()
                    .map(|m| XmlElement::new("manufacturerModelName").text(m.as_str())),
            )
            .child_opt(
                device
                    .software_name
                    .as_ref()
                    .map(|s| XmlElement::new("softwareName").text(s.as_str())),
            )
            .children_from(create_entity_identifiers(&device.identifiers)),
        other => return Err(wrong_party("Author.Participant.Party", other)),
    };

    Ok(XmlElement::new("author").attr("typeCode", "AUT").child(create_time("time", time)).child(
        XmlElement::new("assignedAuthor")
            .attr("classCode", "ASSIGNED")
            .child(create_participant_id(participant))
            .child_opt(author.role.as_ref().map(|r| create_codable_text("code", r)))
            .children_from(create_contact_details(participant))
            .child(entity),
    ))
}

pub fn create_custodian(custodian: &Custodian) -> Result<XmlElement> {
    let participant = required(custodian.participant.as_ref(), "Custodian.Participant")?;
    let organisation = match party(participant, "Custodian.Participant.Party")? {
        Party::Organisation(organisation) => organisation,
        other => return Err(wrong_party("Custodian.Participant.Party", other)),
    };

    let represented = XmlElement::new("representedCustodianOrganization")
        .attr("classCode", "ORG")
        .attr("determinerCode", "INSTANCE")
        .child(create_participant_id(participant))
        .child_opt(
            organisation
                .name
                .as_ref()
                .map(|n| XmlElement::new("name").text(n.as_str())),
        )
        .children_from(
            participant
                .electronic_communication_details
                .iter()
                .map(create_telecom),
        )
        .children_from(participant.addresses.iter().map(create_address))
        .children_from(create_entity_identifiers(&organisation.identifiers));

    Ok(XmlElement::new("custodian").attr("typeCode", "CST").child(
        XmlElement::new("assignedCustodian")
            .attr("classCode", "ASSIGNED")
            .child(represented),
    ))
}

pub fn create_legal_authenticator(authenticator: &LegalAuthenticator) -> Result<XmlElement> {
    let participant = required(authenticator.participant.as_ref(), "LegalAuthenticator.Participant")?;
    let signed = required(
        authenticator.time_of_signature.as_ref(),
        "LegalAuthenticator.TimeOfSignature",
    )?;
    let person = create_party_entity(
        participant,
        "assignedPerson",
        "representedOrganization",
        "LegalAuthenticator.Participant.Party",
    )?;

    Ok(XmlElement::new("legalAuthenticator")
        .attr("typeCode", "LA")
        .child(create_time("time", signed))
        .child(XmlElement::new("signatureCode").attr("code", "S"))
        .child(
            XmlElement::new("assignedEntity")
                .attr("classCode", "ASSIGNED")
                .child(create_participant_id(participant))
                .children_from(create_contact_details(participant))
                .child(person),
        ))
}

/// Document-level `participant` for a person or organisation
pub fn create_participant(
    role: ParticipantRole,
    participant: &Participant,
    role_code: Option<&CodableText>,
    field: &str,
) -> Result<XmlElement> {
    let entity = create_party_entity(participant, "associatedPerson", "scopingOrganization", field)?;

    Ok(XmlElement::new("participant")
        .attr("typeCode", role.type_code)
        .child_opt(role.function_code.map(|f| create_code_from_descriptor("functionCode", &f)))
        .child(
            XmlElement::new("associatedEntity")
                .attr("classCode", role.class_code)
                .child(create_participant_id(participant))
                .child_opt(role_code.map(|r| create_codable_text("code", r)))
                .children_from(create_contact_details(participant))
                .child(entity),
        ))
}

/// One `ext:coverage2` per entitlement, linked to the owner by its id
pub fn create_coverage(participant: &Participant) -> Vec<XmlElement> {
    participant
        .entitlements
        .iter()
        .map(|entitlement| {
            let beneficiary = XmlElement::new("ext:participant").attr("typeCode", "BEN").child(
                XmlElement::new("ext:participantRole").child(
                    XmlElement::new("ext:id").attr("root", participant.id.to_string()),
                ),
            );
            XmlElement::new("ext:coverage2").attr("typeCode", "COVBY").child(
                XmlElement::new("ext:entitlement")
                    .attr("classCode", "COV")
                    .attr("moodCode", "EVN")
                    .child_opt(entitlement.id.as_ref().map(|id| create_identifier("ext:id", id)))
                    .child_opt(
                        entitlement
                            .entitlement_type
                            .map(|t| create_coded("ext:code", &t)),
                    )
                    .child_opt(
                        entitlement
                            .validity_duration
                            .as_ref()
                            .map(|d| create_interval("ext:effectiveTime", d)),
                    )
                    .child(beneficiary),
            )
        })
        .collect()
}

/// `componentOf/encompassingEncounter` for a discharge
///
/// The first responsible health professional is the responsible party; any
/// others are attending encounter participants.
pub fn create_component_of(encounter: &Encounter) -> Result<XmlElement> {
    let period = required(encounter.encounter_period.as_ref(), "Encounter.EncounterPeriod")?;
    let separation = required(encounter.separation_mode.as_ref(), "Encounter.SeparationMode")?;
    let facility = required(encounter.healthcare_facility.as_ref(), "Encounter.HealthcareFacility")?;
    let facility_participant = required(
        facility.participant.as_ref(),
        "Encounter.HealthcareFacility.Participant",
    )?;
    let facility_field = "Encounter.HealthcareFacility.Participant.Party";
    let facility_organisation = match party(facility_participant, facility_field)? {
        Party::Organisation(organisation) => organisation,
        other => return Err(wrong_party(facility_field, other)),
    };

    let mut professionals = Vec::new();
    for (index, professional) in encounter.responsible_health_professionals.iter().enumerate() {
        let field = format!("Encounter.ResponsibleHealthProfessionals[{index}].Participant");
        let participant = required(professional.participant.as_ref(), &field)?;
        let assigned = XmlElement::new("assignedEntity")
            .attr("classCode", "ASSIGNED")
            .child(create_participant_id(participant))
            .child_opt(professional.role.as_ref().map(|r| create_codable_text("code", r)))
            .children_from(create_contact_details(participant))
            .child(create_party_entity(
                participant,
                "assignedPerson",
                "representedOrganization",
                &format!("{field}.Party"),
            )?);
        professionals.push(assigned);
    }
    let mut professionals = professionals.into_iter();
    let responsible = professionals
        .next()
        .ok_or_else(|| GenerationError::missing("Encounter.ResponsibleHealthProfessionals"))?;

    let location = XmlElement::new("location").attr("typeCode", "LOC").child(
        XmlElement::new("healthCareFacility")
            .attr("classCode", "SDLOC")
            .child(create_participant_id(facility_participant))
            .child_opt(encounter.specialty.as_ref().map(|s| create_codable_text("code", s)))
            .child(create_organisation("serviceProviderOrganization", facility_organisation)),
    );

    Ok(XmlElement::new("componentOf").child(
        XmlElement::new("encompassingEncounter")
            .attr("classCode", "ENC")
            .attr("moodCode", "EVN")
            .child(create_interval("effectiveTime", period))
            .child(create_coded("dischargeDispositionCode", separation))
            .child(
                XmlElement::new("responsibleParty")
                    .attr("typeCode", "RESP")
                    .child(responsible),
            )
            .children_from(professionals.map(|assigned| {
                XmlElement::new("encounterParticipant")
                    .attr("typeCode", "ATND")
                    .child(assigned)
            }))
            .child(location),
    ))
}

fn wrong_party(field: &str, party: &Party) -> CdaError {
    GenerationError::InvalidValue {
        field: field.to_string(),
        reason: format!("unexpected {} party", party.kind().name()),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::codes::{DocumentStatus, EntitlementType, Sex};
    use crate::domain::common::{
        Entitlement, Identifier, IsoDateTime, Organisation, Person, PersonName,
    };
    use uuid::Uuid;

    fn patient() -> Participant {
        let mut person = Person::named(PersonName::new("Jane", "Citizen"));
        person.sex = Some(Sex::Female);
        person.date_of_birth = IsoDateTime::date(1970, 1, 1);
        Participant::with_id(Uuid::from_u128(7), Some(Party::Person(person)))
    }

    #[test]
    fn test_header_element_order() {
        let header = DocumentHeader::new(
            Identifier::from_uuid(Uuid::from_u128(1)),
            IsoDateTime::date(2024, 3, 1).unwrap(),
            DocumentStatus::Final,
        );
        let root = create_clinical_document(DocumentKind::EReferral, &header).unwrap();
        let names: Vec<_> = root.elements().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "typeId",
                "templateId",
                "id",
                "code",
                "title",
                "effectiveTime",
                "confidentialityCode",
                "languageCode",
                "ext:completionCode"
            ]
        );
        assert_eq!(root.attribute("xmlns"), Some(CDA_NAMESPACE));
    }

    #[test]
    fn test_missing_header_field_is_a_generation_error() {
        let err = create_clinical_document(DocumentKind::EReferral, &DocumentHeader::default()).unwrap_err();
        assert!(err.to_string().contains("Header.DocumentId"));
    }

    #[test]
    fn test_record_target_patient() {
        let subject = SubjectOfCare {
            participant: Some(patient()),
        };
        let target = create_record_target(&subject).unwrap();
        let role = target.first_child("patientRole").unwrap();
        assert_eq!(
            role.first_child("id").unwrap().attribute("root"),
            Some("00000000-0000-0000-0000-000000000007")
        );
        let patient = role.first_child("patient").unwrap();
        assert_eq!(
            patient.first_child("administrativeGenderCode").unwrap().attribute("code"),
            Some("F")
        );
        assert_eq!(patient.first_child("birthTime").unwrap().attribute("value"), Some("19700101"));
    }

    #[test]
    fn test_usual_gp_function_code() {
        let gp = Participant::new(Party::Organisation(Organisation::named("Nehta Clinic")));
        let element = create_participant(ParticipantRole::USUAL_GP, &gp, None, "UsualGp").unwrap();
        assert_eq!(element.attribute("typeCode"), Some("PART"));
        assert_eq!(element.first_child("functionCode").unwrap().attribute("code"), Some("PCP"));
        assert!(element.path(&["associatedEntity", "scopingOrganization"]).is_some());
    }

    #[test]
    fn test_coverage_references_participant() {
        let participant = patient().with_entitlement(Entitlement::new(
            EntitlementType::MedicareBenefits,
            Identifier::new("1.2.36.1.5001.1.0.7.1", Some("2951234561".into())),
        ));
        let coverage = create_coverage(&participant);
        assert_eq!(coverage.len(), 1);
        let id = coverage[0]
            .path(&["ext:entitlement", "ext:participant", "ext:participantRole", "ext:id"])
            .unwrap();
        assert_eq!(id.attribute("root"), Some(participant.id.to_string().as_str()));
    }
}
