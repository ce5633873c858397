//! Physical measurements

use crate::core::validation::{join_path, Presence, Validate, ValidationBuilder};
use crate::domain::codes::PhysicalMeasurementType;
use crate::domain::common::{IsoDateTime, Quantity, StrucDocText};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalMeasurementsSection {
    pub measurements: Vec<PhysicalMeasurement>,
    pub custom_narrative: Option<StrucDocText>,
}

impl Presence for PhysicalMeasurementsSection {}

impl Validate for PhysicalMeasurementsSection {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        if vb.argument_required_check(path, "Measurements", &self.measurements) {
            vb.validate_each(path, "Measurements", &self.measurements);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalMeasurement {
    pub measurement_type: Option<PhysicalMeasurementType>,
    pub value: Option<Quantity>,
    pub observation_time: Option<IsoDateTime>,
    pub comment: Option<String>,
}

impl PhysicalMeasurement {
    pub fn new(
        measurement_type: PhysicalMeasurementType,
        value: Quantity,
        observation_time: IsoDateTime,
    ) -> Self {
        Self {
            measurement_type: Some(measurement_type),
            value: Some(value),
            observation_time: Some(observation_time),
            comment: None,
        }
    }
}

impl Validate for PhysicalMeasurement {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.argument_required_check(path, "MeasurementType", &self.measurement_type);
        if vb.validate_required(path, "Value", self.value.as_ref()) {
            if let Some(value) = &self.value {
                vb.argument_required_check(&join_path(path, "Value"), "Units", &value.units);
            }
        }
        vb.argument_required_check(path, "ObservationTime", &self.observation_time);
    }
}
