//! Referral detail

use crate::core::validation::{Presence, Validate, ValidationBuilder};
use crate::domain::common::{CdaInterval, IsoDateTime, StrucDocText};
use serde::{Deserialize, Serialize};

/// Why and when the patient was referred
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferralDetail {
    pub referral_date_time: Option<IsoDateTime>,
    pub reason_for_referral: Option<String>,
    /// Period for which the referral is valid
    pub validity_duration: Option<CdaInterval>,
    pub custom_narrative: Option<StrucDocText>,
}

impl ReferralDetail {
    pub fn new(referral_date_time: IsoDateTime, reason_for_referral: impl Into<String>) -> Self {
        Self {
            referral_date_time: Some(referral_date_time),
            reason_for_referral: Some(reason_for_referral.into()),
            ..Default::default()
        }
    }
}

impl Presence for ReferralDetail {}

impl Validate for ReferralDetail {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.argument_required_check(path, "ReferralDateTime", &self.referral_date_time);
        vb.argument_required_check(path, "ReasonForReferral", &self.reason_for_referral);
        vb.validate_optional(path, "ValidityDuration", self.validity_duration.as_ref());
    }
}
