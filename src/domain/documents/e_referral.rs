//! e-Referral

use super::header::{DocumentContext, DocumentHeader};
use crate::core::validation::{join_path, Validate, ValidationBuilder};
use crate::domain::clinical::{AdverseReactions, MedicalHistory, Medications, ReferralDetail};
use crate::domain::common::{Referee, UsualGp};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EReferral {
    pub header: DocumentHeader,
    pub context: DocumentContext,
    pub referee: Option<Referee>,
    pub usual_gp: Option<UsualGp>,
    pub content: EReferralContent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EReferralContent {
    pub referral_detail: Option<ReferralDetail>,
    pub adverse_reactions: Option<AdverseReactions>,
    pub medications: Option<Medications>,
    pub medical_history: Option<MedicalHistory>,
}

impl Validate for EReferral {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        self.header.validate(&join_path(path, "Header"), vb);
        self.context.validate(&join_path(path, "Context"), vb);
        vb.validate_required(path, "Referee", self.referee.as_ref());
        vb.validate_optional(path, "UsualGp", self.usual_gp.as_ref());

        let content = join_path(path, "Content");
        vb.validate_required(&content, "ReferralDetail", self.content.referral_detail.as_ref());
        vb.validate_required(&content, "AdverseReactions", self.content.adverse_reactions.as_ref());
        vb.validate_required(&content, "Medications", self.content.medications.as_ref());
        vb.validate_required(&content, "MedicalHistory", self.content.medical_history.as_ref());
    }
}
