//! Advance care directive custodians

use crate::core::validation::{join_path, Presence, Validate, ValidationBuilder};
use crate::domain::common::{Participant, PartyKind, StrucDocText};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcdCustodians {
    pub custodians: Vec<AcdCustodian>,
    pub custom_narrative: Option<StrucDocText>,
}

impl Presence for AcdCustodians {}

impl Validate for AcdCustodians {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        if vb.argument_required_check(path, "Custodians", &self.custodians) {
            vb.validate_each(path, "Custodians", &self.custodians);
        }
    }
}

/// Person or organisation holding a copy of an advance care directive
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcdCustodian {
    pub participant: Option<Participant>,
}

impl AcdCustodian {
    pub fn new(participant: Participant) -> Self {
        Self {
            participant: Some(participant),
        }
    }
}

impl Validate for AcdCustodian {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        if !vb.argument_required_check(path, "Participant", &self.participant) {
            return;
        }
        let Some(participant) = &self.participant else {
            return;
        };
        let participant_path = join_path(path, "Participant");
        participant.validate_as(
            &participant_path,
            &[PartyKind::Person, PartyKind::Organisation],
            vb,
        );
        vb.condition_check(
            &participant_path,
            "ElectronicCommunicationDetails",
            !participant.addresses.is_empty() || !participant.electronic_communication_details.is_empty(),
            "At least one address or electronic communication detail is required",
        );
    }
}
