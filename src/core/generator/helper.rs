//! Element builders shared by header and body mapping
//!
//! Every function is a pure mapping from a model value to an [`XmlElement`].
//! Functions that dereference fields validation treats as mandatory return a
//! [`GenerationError::MissingField`] instead of panicking.

use crate::domain::codes::{CodeDescriptor, CodedValue, NullFlavour};
use crate::domain::common::{
    Address, CdaInterval, CodableText, ElectronicCommunicationDetail, Identifier, IsoDateTime,
    Organisation, Participant, Party, Person, PersonName, Quantity,
};
use crate::domain::errors::GenerationError;
use crate::domain::Result;
use crate::xml::XmlElement;

pub const CDA_NAMESPACE: &str = "urn:hl7-org:v3";
pub const EXT_NAMESPACE: &str = "http://ns.electronichealth.net.au/Ci/Cda/Extensions/3.0";
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Unwraps a field that validation requires
pub fn required<'a, T>(value: Option<&'a T>, field: &str) -> Result<&'a T> {
    value.ok_or_else(|| GenerationError::missing(field).into())
}

/// Unwraps a text field that validation requires
pub fn required_text<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str> {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| GenerationError::missing(field).into())
}

/// Space-separated codes, as HL7 `set<CS>` attributes are written
pub fn join_codes<C: CodedValue>(values: &[C]) -> Option<String> {
    (!values.is_empty()).then(|| values.iter().map(|v| v.code()).collect::<Vec<_>>().join(" "))
}

/// `<{name} code=.. codeSystem=.. codeSystemName=.. displayName=../>` from a fixed code
pub fn create_code_from_descriptor(name: &str, descriptor: &CodeDescriptor) -> XmlElement {
    XmlElement::new(name)
        .attr("code", descriptor.code)
        .attr("codeSystem", descriptor.code_system.oid())
        .attr("codeSystemName", descriptor.code_system.name())
        .attr("displayName", descriptor.display_name)
}

pub fn create_coded<C: CodedValue>(name: &str, value: &C) -> XmlElement {
    create_code_from_descriptor(name, &value.descriptor())
}

/// Coded element from a [`CodableText`], with original text and translations
pub fn create_codable_text(name: &str, text: &CodableText) -> XmlElement {
    let system = text.resolved_code_system();
    let mut element = XmlElement::new(name)
        .attr_opt("code", text.code.clone())
        .attr_opt("codeSystem", text.code_system.clone())
        .attr_opt(
            "codeSystemName",
            text.code_system_name
                .clone()
                .or_else(|| system.map(|s| s.name().to_string())),
        )
        .attr_opt("codeSystemVersion", text.code_system_version.clone())
        .attr_opt("displayName", text.display_name.clone());

    if text.code.is_none() {
        let null_flavour = text.null_flavour.unwrap_or(NullFlavour::NoInformation);
        element.set_attr("nullFlavor", null_flavour.code());
    }
    if let Some(original) = &text.original_text {
        element.push(XmlElement::new("originalText").text(original.as_str()));
    }
    element.children_from(
        text.translations
            .iter()
            .map(|translation| create_codable_text("translation", translation)),
    )
}

/// `<value xsi:type="CD" ...>` for a coded observation value
pub fn create_value_cd(text: &CodableText) -> XmlElement {
    create_codable_text("value", text).attr("xsi:type", "CD")
}

pub fn create_value_st(text: &str) -> XmlElement {
    XmlElement::new("value").attr("xsi:type", "ST").text(text)
}

pub fn create_value_pq(quantity: &Quantity) -> Result<XmlElement> {
    let value = required(quantity.value.as_ref(), "Quantity.Value")?;
    Ok(XmlElement::new("value")
        .attr("xsi:type", "PQ")
        .attr("value", value.normalize().to_string())
        .attr("unit", quantity.units_or_unity()))
}

/// `<{name} value=..>` holding a timestamp
pub fn create_time(name: &str, time: &IsoDateTime) -> XmlElement {
    XmlElement::new(name).attr("value", time.to_cda_string())
}

/// `IVL_TS` element with low, high and width children
pub fn create_interval(name: &str, interval: &CdaInterval) -> XmlElement {
    let mut element = XmlElement::new(name);
    if let Some(null_flavour) = interval.null_flavour {
        return element.attr("nullFlavor", null_flavour.code());
    }
    if let Some(low) = &interval.low {
        element.push(create_time("low", low));
    }
    if let Some(high) = &interval.high {
        element.push(create_time("high", high));
    }
    if let Some(width) = &interval.width {
        if let Some(value) = width.value {
            element.push(
                XmlElement::new("width")
                    .attr("value", value.normalize().to_string())
                    .attr("unit", width.units_or_unity()),
            );
        }
    }
    element
}

/// `<{name} root=.. extension=.. assigningAuthorityName=../>`
pub fn create_identifier(name: &str, identifier: &Identifier) -> XmlElement {
    XmlElement::new(name)
        .attr_opt("root", identifier.root.clone())
        .attr_opt("extension", identifier.extension.clone())
        .attr_opt("assigningAuthorityName", identifier.assigning_authority_name.clone())
}

/// Entity identifiers in the Australian extension form
pub fn create_entity_identifiers(identifiers: &[Identifier]) -> Vec<XmlElement> {
    identifiers
        .iter()
        .map(|identifier| {
            XmlElement::new("ext:asEntityIdentifier")
                .attr("classCode", "IDENT")
                .child(create_identifier("ext:id", identifier))
        })
        .collect()
}

/// A participant's own id, the root every coverage entry refers to
pub fn create_participant_id(participant: &Participant) -> XmlElement {
    XmlElement::new("id").attr("root", participant.id.to_string())
}

pub fn create_person_name(name: &PersonName) -> XmlElement {
    let mut element = XmlElement::new("name").attr_opt("use", join_codes(&name.usages));
    for title in &name.titles {
        element.push(XmlElement::new("prefix").text(title.as_str()));
    }
    for given in &name.given_names {
        element.push(XmlElement::new("given").text(given.as_str()));
    }
    if let Some(family) = &name.family_name {
        element.push(XmlElement::new("family").text(family.as_str()));
    }
    for suffix in &name.suffixes {
        element.push(XmlElement::new("suffix").text(suffix.as_str()));
    }
    element
}

pub fn create_address(address: &Address) -> XmlElement {
    let element = XmlElement::new("addr").attr_opt("use", address.purpose.map(|p| p.code()));

    if let Some(australian) = &address.australian_address {
        return element
            .children_from(
                australian
                    .unstructured_address_lines
                    .iter()
                    .map(|line| XmlElement::new("streetAddressLine").text(line.as_str())),
            )
            .child_opt(australian.suburb_town_locality.as_ref().map(|s| XmlElement::new("city").text(s.as_str())))
            .child_opt(australian.state.map(|s| XmlElement::new("state").text(s.abbreviation())))
            .child_opt(australian.postcode.as_ref().map(|p| XmlElement::new("postalCode").text(p.as_str())))
            .child(XmlElement::new("country").text("Australia"));
    }

    match &address.international_address {
        Some(international) => element
            .children_from(
                international
                    .address_lines
                    .iter()
                    .map(|line| XmlElement::new("streetAddressLine").text(line.as_str())),
            )
            .child_opt(international.city.as_ref().map(|c| XmlElement::new("city").text(c.as_str())))
            .child_opt(
                international
                    .state_province
                    .as_ref()
                    .map(|s| XmlElement::new("state").text(s.as_str())),
            )
            .child_opt(international.postcode.as_ref().map(|p| XmlElement::new("postalCode").text(p.as_str())))
            .child_opt(international.country.as_ref().map(|c| XmlElement::new("country").text(c.as_str()))),
        None => element,
    }
}

pub fn create_telecom(detail: &ElectronicCommunicationDetail) -> XmlElement {
    XmlElement::new("telecom")
        .attr_opt("use", join_codes(&detail.usage))
        .attr("value", detail.to_uri())
}

/// Address and telecom children of a role element, in CDA order
pub fn create_contact_details(participant: &Participant) -> Vec<XmlElement> {
    participant
        .addresses
        .iter()
        .map(create_address)
        .chain(
            participant
                .electronic_communication_details
                .iter()
                .map(create_telecom),
        )
        .collect()
}

/// Person entity element (`assignedPerson`, `associatedPerson`, ...)
pub fn create_person(name: &str, person: &Person) -> XmlElement {
    XmlElement::new(name)
        .attr("classCode", "PSN")
        .attr("determinerCode", "INSTANCE")
        .children_from(person.names.iter().map(create_person_name))
        .child_opt(create_employment(person))
        .children_from(create_entity_identifiers(&person.identifiers))
}

fn create_employment(person: &Person) -> Option<XmlElement> {
    if person.occupation.is_none() && person.employer.is_none() {
        return None;
    }
    Some(
        XmlElement::new("ext:asEmployment")
            .attr("classCode", "EMP")
            .child_opt(person.occupation.as_ref().map(|o| create_codable_text("ext:jobCode", o)))
            .child_opt(
                person
                    .employer
                    .as_ref()
                    .map(|e| create_organisation("ext:employerOrganization", e)),
            ),
    )
}

/// Organisation entity element (`representedOrganization`, `scopingOrganization`, ...)
pub fn create_organisation(name: &str, organisation: &Organisation) -> XmlElement {
    let display = organisation.name.as_deref().unwrap_or_default();
    XmlElement::new(name)
        .attr("classCode", "ORG")
        .attr("determinerCode", "INSTANCE")
        .child(XmlElement::new("name").text(display))
        .children_from(create_entity_identifiers(&organisation.identifiers))
}

pub fn party<'a>(participant: &'a Participant, field: &str) -> Result<&'a Party> {
    required(participant.party.as_ref(), field)
}

/// Entity element for a person or organisation party
///
/// Persons are written under `person_name`, organisations under
/// `organisation_name`. Devices are only valid as authors and are mapped there.
pub fn create_party_entity(
    participant: &Participant,
    person_name: &str,
    organisation_name: &str,
    field: &str,
) -> Result<XmlElement> {
    match party(participant, field)? {
        Party::Person(person) => Ok(create_person(person_name, person)),
        Party::Organisation(organisation) => Ok(create_organisation(organisation_name, organisation)),
        Party::Device(_) => Err(GenerationError::InvalidValue {
            field: field.to_string(),
            reason: "a device cannot fill this role".to_string(),
        }
        .into()),
    }
}

/// Observation relationship holding a single coded or text value
pub fn create_value_observation(code: &CodeDescriptor, value: XmlElement) -> XmlElement {
    XmlElement::new("observation")
        .attr("classCode", "OBS")
        .attr("moodCode", "EVN")
        .child(create_code_from_descriptor("code", code))
        .child(value)
}

/// `INFRM` act carrying free text
pub fn create_text_act(code: &CodeDescriptor, text: &str) -> XmlElement {
    XmlElement::new("act")
        .attr("classCode", "INFRM")
        .attr("moodCode", "EVN")
        .child(create_code_from_descriptor("code", code))
        .child(XmlElement::new("text").text(text))
}

pub fn create_entry_relationship(type_code: &str, target: XmlElement) -> XmlElement {
    XmlElement::new("entryRelationship")
        .attr("typeCode", type_code)
        .child(target)
}

pub fn create_entry(target: XmlElement) -> XmlElement {
    XmlElement::new("entry").attr("typeCode", "DRIV").child(target)
}

/// Manufactured material for a medicine
pub fn create_consumable(medicine: &CodableText) -> XmlElement {
    XmlElement::new("consumable").child(
        XmlElement::new("manufacturedProduct").child(
            XmlElement::new("manufacturedMaterial").child(create_codable_text("code", medicine)),
        ),
    )
}
