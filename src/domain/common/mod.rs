//! Value types shared by every document
//!
//! Coded text, identifiers, time values, addresses, parties and the
//! participation roles that wrap them.

pub mod address;
pub mod codable_text;
pub mod datetime;
pub mod identifier;
pub mod narrative;
pub mod participant;
pub mod participation;
pub mod party;
pub mod quantity;
pub mod statement;

pub use address::{Address, AustralianAddress, ElectronicCommunicationDetail, InternationalAddress};
pub use codable_text::CodableText;
pub use datetime::{CdaInterval, DatePrecision, IsoDateTime};
pub use identifier::Identifier;
pub use narrative::{NarrativeBlock, NarrativeTable, StrucDocText};
pub use participant::{Entitlement, Participant};
pub use participation::{
    Author, Custodian, DispensingOrganisation, HealthcareFacility, LegalAuthenticator,
    NominatedPrimaryHealthcareProvider, PrescriberOrganisation, Referee,
    ResponsibleHealthProfessional, SubjectOfCare, UsualGp,
};
pub use party::{Device, Organisation, Party, PartyKind, Person, PersonName};
pub use quantity::Quantity;
pub use statement::{validate_list_or_exclusion, ExclusionStatement};
