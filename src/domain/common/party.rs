//! People, organisations and devices
//!
//! A participant is exactly one of a person, an organisation or a device.
//! [`Party`] makes that choice a tagged union instead of three nullable
//! fields.

use super::codable_text::CodableText;
use super::datetime::IsoDateTime;
use super::identifier::Identifier;
use crate::core::validation::{Presence, Validate, ValidationBuilder};
use crate::domain::codes::{NameUsage, Sex};
use serde::{Deserialize, Serialize};

/// A person name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonName {
    pub titles: Vec<String>,
    pub given_names: Vec<String>,
    pub family_name: Option<String>,
    pub suffixes: Vec<String>,
    pub usages: Vec<NameUsage>,
}

impl PersonName {
    pub fn new(given: impl Into<String>, family: impl Into<String>) -> Self {
        Self {
            given_names: vec![given.into()],
            family_name: Some(family.into()),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.titles.push(title.into());
        self
    }

    /// "Dr Jane Citizen" style rendering
    pub fn to_display_string(&self) -> String {
        self.titles
            .iter()
            .chain(self.given_names.iter())
            .chain(self.family_name.iter())
            .chain(self.suffixes.iter())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Presence for PersonName {}

impl Validate for PersonName {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.argument_required_check(path, "FamilyName", &self.family_name);
    }
}

/// A person taking part in the document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    pub names: Vec<PersonName>,
    pub identifiers: Vec<Identifier>,
    pub sex: Option<Sex>,
    pub date_of_birth: Option<IsoDateTime>,
    /// Occupation or role, e.g. an ANZSCO code
    pub occupation: Option<CodableText>,
    /// Organisation the person acts for
    pub employer: Option<Organisation>,
}

impl Person {
    pub fn named(name: PersonName) -> Self {
        Self {
            names: vec![name],
            ..Self::default()
        }
    }

    pub fn display_name(&self) -> String {
        self.names
            .first()
            .map(PersonName::to_display_string)
            .unwrap_or_default()
    }
}

impl Validate for Person {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        if vb.argument_required_check(path, "Names", &self.names) {
            vb.validate_each(path, "Names", &self.names);
        }
        vb.validate_each(path, "Identifiers", &self.identifiers);
        vb.validate_optional(path, "Occupation", self.occupation.as_ref());
        vb.validate_optional(path, "Employer", self.employer.as_ref());
    }
}

/// An organisation taking part in the document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organisation {
    pub name: Option<String>,
    pub department: Option<String>,
    pub identifiers: Vec<Identifier>,
}

impl Organisation {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn display_name(&self) -> String {
        match (&self.name, &self.department) {
            (Some(name), Some(department)) => format!("{name} ({department})"),
            (Some(name), None) => name.clone(),
            (None, Some(department)) => department.clone(),
            (None, None) => String::new(),
        }
    }
}

impl Presence for Organisation {}

impl Validate for Organisation {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.argument_required_check(path, "Name", &self.name);
        vb.validate_each(path, "Identifiers", &self.identifiers);
    }
}

/// A software system acting as a participant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Device {
    pub software_name: Option<String>,
    pub manufacturer_model_name: Option<String>,
    pub identifiers: Vec<Identifier>,
}

impl Validate for Device {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.argument_required_check(path, "SoftwareName", &self.software_name);
        vb.validate_each(path, "Identifiers", &self.identifiers);
    }
}

/// Which kind of party a participant is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartyKind {
    Person,
    Organisation,
    Device,
}

impl PartyKind {
    pub fn name(&self) -> &'static str {
        match self {
            PartyKind::Person => "Person",
            PartyKind::Organisation => "Organisation",
            PartyKind::Device => "Device",
        }
    }
}

/// Person, organisation or device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "party_type", rename_all = "snake_case")]
pub enum Party {
    Person(Person),
    Organisation(Organisation),
    Device(Device),
}

impl Party {
    pub fn kind(&self) -> PartyKind {
        match self {
            Party::Person(_) => PartyKind::Person,
            Party::Organisation(_) => PartyKind::Organisation,
            Party::Device(_) => PartyKind::Device,
        }
    }

    pub fn as_person(&self) -> Option<&Person> {
        match self {
            Party::Person(person) => Some(person),
            _ => None,
        }
    }

    pub fn as_organisation(&self) -> Option<&Organisation> {
        match self {
            Party::Organisation(organisation) => Some(organisation),
            _ => None,
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            Party::Person(person) => person.display_name(),
            Party::Organisation(organisation) => organisation.display_name(),
            Party::Device(device) => device.software_name.clone().unwrap_or_default(),
        }
    }
}

impl Presence for Party {}

impl Validate for Party {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        let kind = self.kind().name();
        match self {
            Party::Person(person) => vb.validate_optional(path, kind, Some(person)),
            Party::Organisation(organisation) => vb.validate_optional(path, kind, Some(organisation)),
            Party::Device(device) => vb.validate_optional(path, kind, Some(device)),
        }
    }
}
