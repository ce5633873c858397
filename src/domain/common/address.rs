//! Postal addresses and electronic communication details

use crate::core::validation::{Presence, Validate, ValidationBuilder};
use crate::domain::codes::{AddressPurpose, AustralianState, TelecomMedium, TelecomUsage};
use serde::{Deserialize, Serialize};

/// An address with exactly one of an Australian or international form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub purpose: Option<AddressPurpose>,
    pub australian_address: Option<AustralianAddress>,
    pub international_address: Option<InternationalAddress>,
}

impl Address {
    pub fn australian(purpose: AddressPurpose, address: AustralianAddress) -> Self {
        Self {
            purpose: Some(purpose),
            australian_address: Some(address),
            international_address: None,
        }
    }

    pub fn international(purpose: AddressPurpose, address: InternationalAddress) -> Self {
        Self {
            purpose: Some(purpose),
            australian_address: None,
            international_address: Some(address),
        }
    }

    /// Single-line form used in narrative
    pub fn to_display_string(&self) -> String {
        if let Some(au) = &self.australian_address {
            let mut parts = au.unstructured_address_lines.clone();
            parts.extend(au.suburb_town_locality.clone());
            parts.extend(au.state.map(|s| s.abbreviation().to_string()));
            parts.extend(au.postcode.clone());
            return parts.join(", ");
        }
        if let Some(intl) = &self.international_address {
            let mut parts = intl.address_lines.clone();
            parts.extend(intl.city.clone());
            parts.extend(intl.state_province.clone());
            parts.extend(intl.postcode.clone());
            parts.extend(intl.country.clone());
            return parts.join(", ");
        }
        String::new()
    }
}

/// Australian address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AustralianAddress {
    pub unstructured_address_lines: Vec<String>,
    pub suburb_town_locality: Option<String>,
    pub state: Option<AustralianState>,
    pub postcode: Option<String>,
}

/// Address outside Australia
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InternationalAddress {
    pub address_lines: Vec<String>,
    pub city: Option<String>,
    pub state_province: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
}

impl Presence for Address {}

impl Validate for Address {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.argument_required_check(path, "Purpose", &self.purpose);

        if vb.choice_check(
            path,
            &[
                ("AustralianAddress", self.australian_address.is_some()),
                ("InternationalAddress", self.international_address.is_some()),
            ],
        ) {
            vb.validate_optional(path, "AustralianAddress", self.australian_address.as_ref());
            vb.validate_optional(path, "InternationalAddress", self.international_address.as_ref());
        }
    }
}

impl Validate for AustralianAddress {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        if let Some(postcode) = &self.postcode {
            vb.condition_check(
                path,
                "Postcode",
                postcode.len() == 4 && postcode.chars().all(|c| c.is_ascii_digit()),
                "Postcode must be four digits",
            );
        }
    }
}

impl Validate for InternationalAddress {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.argument_required_check(path, "Country", &self.country);
    }
}

/// Telephone, fax, email or web address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElectronicCommunicationDetail {
    pub medium: Option<TelecomMedium>,
    pub usage: Vec<TelecomUsage>,
    pub address: Option<String>,
}

impl ElectronicCommunicationDetail {
    pub fn new(medium: TelecomMedium, usage: TelecomUsage, address: impl Into<String>) -> Self {
        Self {
            medium: Some(medium),
            usage: vec![usage],
            address: Some(address.into()),
        }
    }

    /// `telecom/@value` with the medium's URI scheme
    pub fn to_uri(&self) -> String {
        let address = self.address.as_deref().unwrap_or_default();
        match self.medium {
            Some(medium) if !address.starts_with(medium.scheme()) => {
                format!("{}{address}", medium.scheme())
            }
            _ => address.to_string(),
        }
    }
}

impl Presence for ElectronicCommunicationDetail {}

impl Validate for ElectronicCommunicationDetail {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.argument_required_check(path, "Medium", &self.medium);
        vb.argument_required_check(path, "Address", &self.address);
    }
}
