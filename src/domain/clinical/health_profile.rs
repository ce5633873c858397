//! Discharge health profile

use super::adverse_reactions::AdverseReactions;
use crate::core::validation::{join_path, Presence, Validate, ValidationBuilder};
use crate::domain::common::{CodableText, StrucDocText};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthProfile {
    pub adverse_reactions: Option<AdverseReactions>,
    pub alerts: Option<Alerts>,
    pub custom_narrative: Option<StrucDocText>,
}

impl Presence for HealthProfile {}

impl Validate for HealthProfile {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.validate_required(path, "AdverseReactions", self.adverse_reactions.as_ref());
        vb.validate_optional(path, "Alerts", self.alerts.as_ref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Alerts {
    pub alerts: Vec<Alert>,
    pub custom_narrative: Option<StrucDocText>,
}

impl Presence for Alerts {}

impl Validate for Alerts {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        if vb.argument_required_check(path, "Alerts", &self.alerts) {
            vb.validate_each(path, "Alerts", &self.alerts);
        }
    }
}

/// A clinically significant warning
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Alert {
    pub alert_description: Option<CodableText>,
}

impl Alert {
    pub fn new(alert_description: CodableText) -> Self {
        Self {
            alert_description: Some(alert_description),
        }
    }
}

impl Validate for Alert {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        if vb.argument_required_check(path, "AlertDescription", &self.alert_description) {
            if let Some(description) = &self.alert_description {
                description.validate_mandatory(&join_path(path, "AlertDescription"), vb);
            }
        }
    }
}
