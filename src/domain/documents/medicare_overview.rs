//! Medicare Overview document

use super::header::{DocumentContext, DocumentHeader};
use crate::core::validation::{join_path, Validate, ValidationBuilder};
use crate::domain::clinical::{
    ChildhoodImmunisations, MedicareDvaFundedServices, OrganDonorRegistration,
    PharmaceuticalBenefitItems,
};
use serde::{Deserialize, Serialize};

/// Summary of a person's Medicare records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedicareOverview {
    pub header: DocumentHeader,
    pub context: DocumentContext,
    pub content: MedicareOverviewContent,
}

/// The four views; at least one must be present
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedicareOverviewContent {
    pub funded_services: Option<MedicareDvaFundedServices>,
    pub pharmaceutical_benefit_items: Option<PharmaceuticalBenefitItems>,
    pub childhood_immunisations: Option<ChildhoodImmunisations>,
    pub organ_donor_registration: Option<OrganDonorRegistration>,
}

impl MedicareOverviewContent {
    pub fn has_content(&self) -> bool {
        self.funded_services.is_some()
            || self.pharmaceutical_benefit_items.is_some()
            || self.childhood_immunisations.is_some()
            || self.organ_donor_registration.is_some()
    }
}

impl Validate for MedicareOverviewContent {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.condition_check(
            path,
            "Views",
            self.has_content(),
            "At least one Medicare view must be provided",
        );
        vb.validate_optional(path, "FundedServices", self.funded_services.as_ref());
        vb.validate_optional(
            path,
            "PharmaceuticalBenefitItems",
            self.pharmaceutical_benefit_items.as_ref(),
        );
        vb.validate_optional(path, "ChildhoodImmunisations", self.childhood_immunisations.as_ref());
        vb.validate_optional(
            path,
            "OrganDonorRegistration",
            self.organ_donor_registration.as_ref(),
        );
    }
}

impl Validate for MedicareOverview {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        self.header.validate(&join_path(path, "Header"), vb);
        self.context.validate(&join_path(path, "Context"), vb);
        self.content.validate(&join_path(path, "Content"), vb);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content_needs_a_view() {
        let mut vb = ValidationBuilder::new();
        MedicareOverviewContent::default().validate("MedicareOverview.Content", &mut vb);
        assert_eq!(vb.len(), 1);
        assert_eq!(vb.messages()[0].location(), "MedicareOverview.Content.Views");
    }
}
