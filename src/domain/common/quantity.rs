//! Physical quantities

use crate::core::validation::{Presence, Validate, ValidationBuilder};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A `PQ` value with UCUM units
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quantity {
    pub value: Option<Decimal>,
    pub units: Option<String>,
}

impl Quantity {
    pub fn new(value: Decimal, units: impl Into<String>) -> Self {
        Self {
            value: Some(value),
            units: Some(units.into()),
        }
    }

    /// Units attribute, `1` for dimensionless values
    pub fn units_or_unity(&self) -> &str {
        self.units.as_deref().filter(|u| !u.is_empty()).unwrap_or("1")
    }

    pub fn to_display_string(&self) -> String {
        match (&self.value, self.units.as_deref()) {
            (Some(value), Some(units)) if units != "1" => format!("{value} {units}"),
            (Some(value), _) => value.to_string(),
            (None, _) => String::new(),
        }
    }
}

impl Presence for Quantity {
    fn is_present(&self) -> bool {
        self.value.is_some()
    }
}

impl Validate for Quantity {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.argument_required_check(path, "Value", &self.value);
    }
}
