//! Participants and their entitlements

use super::address::{Address, ElectronicCommunicationDetail};
use super::datetime::CdaInterval;
use super::identifier::Identifier;
use super::party::{Party, PartyKind};
use crate::core::validation::{Presence, Validate, ValidationBuilder};
use crate::domain::codes::EntitlementType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A party together with its contact details and entitlements
///
/// `id` is assigned once when the participant is created. Coverage elements
/// generated from [`entitlements`](Self::entitlements) refer back to the
/// participant by this value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Participant {
    pub id: Uuid,
    pub party: Option<Party>,
    pub addresses: Vec<Address>,
    pub electronic_communication_details: Vec<ElectronicCommunicationDetail>,
    pub entitlements: Vec<Entitlement>,
}

impl Default for Participant {
    fn default() -> Self {
        Self::with_id(Uuid::new_v4(), None)
    }
}

impl Participant {
    pub fn new(party: Party) -> Self {
        Self::with_id(Uuid::new_v4(), Some(party))
    }

    /// Participant with a caller-chosen identifier
    pub fn with_id(id: Uuid, party: Option<Party>) -> Self {
        Self {
            id,
            party,
            addresses: Vec::new(),
            electronic_communication_details: Vec::new(),
            entitlements: Vec::new(),
        }
    }

    pub fn with_address(mut self, address: Address) -> Self {
        self.addresses.push(address);
        self
    }

    pub fn with_communication(mut self, detail: ElectronicCommunicationDetail) -> Self {
        self.electronic_communication_details.push(detail);
        self
    }

    pub fn with_entitlement(mut self, entitlement: Entitlement) -> Self {
        self.entitlements.push(entitlement);
        self
    }

    pub fn display_name(&self) -> String {
        self.party.as_ref().map(Party::display_name).unwrap_or_default()
    }

    /// Validates the participant and requires its party to be one of `allowed`
    ///
    /// Returns the party when it is present and of an allowed kind.
    pub fn validate_as<'a>(
        &'a self,
        path: &str,
        allowed: &[PartyKind],
        vb: &mut ValidationBuilder,
    ) -> Option<&'a Party> {
        self.validate(path, vb);
        let party = self.party.as_ref()?;
        let kind = party.kind();
        if allowed.contains(&kind) {
            return Some(party);
        }
        let names = allowed.iter().map(PartyKind::name).collect::<Vec<_>>().join(" or ");
        vb.add_validation_message(
            path,
            "Party",
            format!("Party must be {names}, found {}", kind.name()),
        );
        None
    }
}

impl Presence for Participant {}

impl Validate for Participant {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        if vb.argument_required_check(path, "Party", &self.party) {
            vb.validate_optional(path, "Party", self.party.as_ref());
        }
        vb.validate_each(path, "Addresses", &self.addresses);
        vb.validate_each(
            path,
            "ElectronicCommunicationDetails",
            &self.electronic_communication_details,
        );
        vb.validate_each(path, "Entitlements", &self.entitlements);
    }
}

/// A benefit or registration held by a participant, e.g. a Medicare number
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entitlement {
    pub entitlement_type: Option<EntitlementType>,
    pub id: Option<Identifier>,
    pub validity_duration: Option<CdaInterval>,
}

impl Entitlement {
    pub fn new(entitlement_type: EntitlementType, id: Identifier) -> Self {
        Self {
            entitlement_type: Some(entitlement_type),
            id: Some(id),
            validity_duration: None,
        }
    }
}

impl Presence for Entitlement {}

impl Validate for Entitlement {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.argument_required_check(path, "EntitlementType", &self.entitlement_type);
        vb.validate_required(path, "Id", self.id.as_ref());
        vb.validate_optional(path, "ValidityDuration", self.validity_duration.as_ref());
    }
}
