//! Discharge plan: arranged services and recommendations

use crate::core::validation::{join_path, Presence, Validate, ValidationBuilder};
use crate::domain::codes::ServiceBookingStatus;
use crate::domain::common::{CdaInterval, CodableText, Participant, PartyKind, StrucDocText};
use serde::{Deserialize, Serialize};

const PROVIDER_KINDS: &[PartyKind] = &[PartyKind::Person, PartyKind::Organisation];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Plan {
    pub arranged_services: Option<ArrangedServices>,
    pub recommendations: Option<Recommendations>,
    pub custom_narrative: Option<StrucDocText>,
}

impl Plan {
    /// True when at least one arranged service or recommendation is present
    pub fn has_content(&self) -> bool {
        self.arranged_services.as_ref().is_some_and(|s| !s.services.is_empty())
            || self.recommendations.as_ref().is_some_and(|r| !r.recommendations.is_empty())
    }
}

impl Presence for Plan {}

impl Validate for Plan {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.validate_optional(path, "ArrangedServices", self.arranged_services.as_ref());
        vb.validate_optional(path, "Recommendations", self.recommendations.as_ref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrangedServices {
    pub services: Vec<ArrangedService>,
    pub custom_narrative: Option<StrucDocText>,
}

impl Presence for ArrangedServices {}

impl Validate for ArrangedServices {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        if vb.argument_required_check(path, "Services", &self.services) {
            vb.validate_each(path, "Services", &self.services);
        }
    }
}

/// A follow-up service booked or requested for the patient
///
/// The booking status becomes the act's `moodCode`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrangedService {
    pub description: Option<CodableText>,
    pub booking_status: Option<ServiceBookingStatus>,
    pub commencement: Option<CdaInterval>,
    pub provider: Option<Participant>,
}

impl Validate for ArrangedService {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        if vb.argument_required_check(path, "Description", &self.description) {
            if let Some(description) = &self.description {
                description.validate_mandatory(&join_path(path, "Description"), vb);
            }
        }
        vb.argument_required_check(path, "BookingStatus", &self.booking_status);
        vb.validate_optional(path, "Commencement", self.commencement.as_ref());
        if let Some(provider) = &self.provider {
            provider.validate_as(&join_path(path, "Provider"), PROVIDER_KINDS, vb);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recommendations {
    pub recommendations: Vec<Recommendation>,
    pub custom_narrative: Option<StrucDocText>,
}

impl Presence for Recommendations {}

impl Validate for Recommendations {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        if vb.argument_required_check(path, "Recommendations", &self.recommendations) {
            vb.validate_each(path, "Recommendations", &self.recommendations);
        }
    }
}

/// Advice addressed to a person or organisation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recommendation {
    pub addressee: Option<Participant>,
    pub narrative: Option<String>,
    pub time_frame: Option<CdaInterval>,
}

impl Validate for Recommendation {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        if vb.argument_required_check(path, "Addressee", &self.addressee) {
            if let Some(addressee) = &self.addressee {
                addressee.validate_as(&join_path(path, "Addressee"), PROVIDER_KINDS, vb);
            }
        }
        vb.argument_required_check(path, "Narrative", &self.narrative);
        vb.validate_optional(path, "TimeFrame", self.time_frame.as_ref());
    }
}
