//! Medicare views
//!
//! Read-only summaries assembled from Medicare records: services funded under
//! the MBS or by DVA, medicines supplied under the PBS or RPBS, childhood
//! immunisations and organ donor registration. The three history lists each
//! hold either items or an exclusion statement.

use crate::core::validation::{join_path, Presence, Validate, ValidationBuilder};
use crate::domain::common::{
    validate_list_or_exclusion, CodableText, ExclusionStatement, IsoDateTime, Participant, PartyKind,
    StrucDocText,
};
use serde::{Deserialize, Serialize};

const PROVIDER_KINDS: &[PartyKind] = &[PartyKind::Person, PartyKind::Organisation];

fn validate_coded(path: &str, name: &str, value: Option<&CodableText>, vb: &mut ValidationBuilder) {
    if vb.argument_required_check(path, name, &value) {
        if let Some(value) = value {
            value.validate_mandatory(&join_path(path, name), vb);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedicareDvaFundedServices {
    pub services: Vec<MedicareDvaFundedService>,
    pub exclusion_statement: Option<ExclusionStatement>,
    pub custom_narrative: Option<StrucDocText>,
}

impl Presence for MedicareDvaFundedServices {}

impl Validate for MedicareDvaFundedServices {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        validate_list_or_exclusion(path, "Services", &self.services, self.exclusion_statement.as_ref(), vb);
    }
}

/// A service claimed against an MBS or DVA item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedicareDvaFundedService {
    pub date_of_service: Option<IsoDateTime>,
    /// MBS or DVA item
    pub service: Option<CodableText>,
    pub service_in_hospital: Option<bool>,
    pub service_provider: Option<Participant>,
}

impl MedicareDvaFundedService {
    pub fn new(service: CodableText, date_of_service: IsoDateTime) -> Self {
        Self {
            date_of_service: Some(date_of_service),
            service: Some(service),
            ..Default::default()
        }
    }
}

impl Presence for MedicareDvaFundedService {}

impl Validate for MedicareDvaFundedService {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.argument_required_check(path, "DateOfService", &self.date_of_service);
        validate_coded(path, "Service", self.service.as_ref(), vb);
        if let Some(provider) = &self.service_provider {
            provider.validate_as(&join_path(path, "ServiceProvider"), PROVIDER_KINDS, vb);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PharmaceuticalBenefitItems {
    pub items: Vec<PharmaceuticalBenefitItem>,
    pub exclusion_statement: Option<ExclusionStatement>,
    pub custom_narrative: Option<StrucDocText>,
}

impl Presence for PharmaceuticalBenefitItems {}

impl Validate for PharmaceuticalBenefitItems {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        validate_list_or_exclusion(path, "Items", &self.items, self.exclusion_statement.as_ref(), vb);
    }
}

/// A medicine supplied under the PBS or RPBS
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PharmaceuticalBenefitItem {
    pub item_code: Option<CodableText>,
    pub medicine: Option<CodableText>,
    pub date_of_prescribing: Option<IsoDateTime>,
    pub date_of_supply: Option<IsoDateTime>,
    /// Free text such as "60 tablets"
    pub quantity: Option<String>,
    pub number_of_repeats: Option<u32>,
}

impl Presence for PharmaceuticalBenefitItem {}

impl Validate for PharmaceuticalBenefitItem {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        validate_coded(path, "ItemCode", self.item_code.as_ref(), vb);
        validate_coded(path, "Medicine", self.medicine.as_ref(), vb);
        vb.argument_required_check(path, "DateOfSupply", &self.date_of_supply);
        if let (Some(prescribed), Some(supplied)) = (&self.date_of_prescribing, &self.date_of_supply) {
            vb.condition_check(
                path,
                "DateOfSupply",
                supplied.value >= prescribed.value,
                "DateOfSupply must not be before DateOfPrescribing",
            );
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChildhoodImmunisations {
    pub immunisations: Vec<ChildhoodImmunisation>,
    pub exclusion_statement: Option<ExclusionStatement>,
    pub custom_narrative: Option<StrucDocText>,
}

impl Presence for ChildhoodImmunisations {}

impl Validate for ChildhoodImmunisations {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        validate_list_or_exclusion(
            path,
            "Immunisations",
            &self.immunisations,
            self.exclusion_statement.as_ref(),
            vb,
        );
    }
}

/// A vaccine recorded on the childhood immunisation register
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChildhoodImmunisation {
    pub vaccine: Option<CodableText>,
    pub date_administered: Option<IsoDateTime>,
    pub dose_number: Option<u32>,
}

impl ChildhoodImmunisation {
    pub fn new(vaccine: CodableText, date_administered: IsoDateTime) -> Self {
        Self {
            vaccine: Some(vaccine),
            date_administered: Some(date_administered),
            dose_number: None,
        }
    }
}

impl Presence for ChildhoodImmunisation {}

impl Validate for ChildhoodImmunisation {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        validate_coded(path, "Vaccine", self.vaccine.as_ref(), vb);
        vb.argument_required_check(path, "DateAdministered", &self.date_administered);
        if let Some(dose) = self.dose_number {
            vb.condition_check(path, "DoseNumber", dose >= 1, "DoseNumber must be at least 1");
        }
    }
}

/// Organ donor register entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganDonorRegistration {
    pub date_of_initial_registration: Option<IsoDateTime>,
    /// True when the person consents to donate
    pub donation_decision: Option<bool>,
    pub organs_and_tissues: Vec<CodableText>,
    pub custom_narrative: Option<StrucDocText>,
}

impl Presence for OrganDonorRegistration {}

impl Validate for OrganDonorRegistration {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.argument_required_check(
            path,
            "DateOfInitialRegistration",
            &self.date_of_initial_registration,
        );
        if vb.argument_required_check(path, "DonationDecision", &self.donation_decision) {
            vb.condition_check(
                path,
                "OrgansAndTissues",
                self.donation_decision == Some(true) || self.organs_and_tissues.is_empty(),
                "OrgansAndTissues must be empty when DonationDecision is false",
            );
        }
        vb.validate_each(path, "OrgansAndTissues", &self.organs_and_tissues);
    }
}
