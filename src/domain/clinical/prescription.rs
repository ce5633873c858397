//! PCEHR prescription and dispense items

use crate::core::validation::{join_path, Presence, Validate, ValidationBuilder};
use crate::domain::codes::GroundsForConcurrentSupply;
use crate::domain::common::{CodableText, Identifier, IsoDateTime, Quantity, StrucDocText};
use serde::{Deserialize, Serialize};

fn validate_medicine(path: &str, medicine: Option<&CodableText>, vb: &mut ValidationBuilder) {
    if vb.argument_required_check(path, "TherapeuticGoodId", &medicine) {
        if let Some(medicine) = medicine {
            medicine.validate_mandatory(&join_path(path, "TherapeuticGoodId"), vb);
        }
    }
}

/// A single prescribed item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrescriptionItem {
    pub prescription_item_id: Option<Identifier>,
    pub therapeutic_good_id: Option<CodableText>,
    pub date_time_prescription_written: Option<IsoDateTime>,
    pub directions: Option<String>,
    /// Free text such as "30 tablets"
    pub quantity_of_therapeutic_good: Option<String>,
    pub maximum_number_of_repeats: Option<u32>,
    pub minimum_interval_between_repeats: Option<Quantity>,
    pub grounds_for_concurrent_supply: Option<GroundsForConcurrentSupply>,
    pub clinical_indication: Option<String>,
    pub additional_comments: Option<String>,
    pub custom_narrative: Option<StrucDocText>,
}

impl Presence for PrescriptionItem {}

impl Validate for PrescriptionItem {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.validate_required(path, "PrescriptionItemId", self.prescription_item_id.as_ref());
        validate_medicine(path, self.therapeutic_good_id.as_ref(), vb);
        vb.argument_required_check(
            path,
            "DateTimePrescriptionWritten",
            &self.date_time_prescription_written,
        );
        vb.argument_required_check(path, "Directions", &self.directions);
        vb.argument_required_check(path, "QuantityOfTherapeuticGood", &self.quantity_of_therapeutic_good);
        vb.argument_required_check(path, "MaximumNumberOfRepeats", &self.maximum_number_of_repeats);
        vb.validate_optional(
            path,
            "MinimumIntervalBetweenRepeats",
            self.minimum_interval_between_repeats.as_ref(),
        );
    }
}

/// A single dispensed item, referring back to its prescription
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispenseItem {
    pub dispense_item_id: Option<Identifier>,
    pub prescription_item_id: Option<Identifier>,
    pub therapeutic_good_id: Option<CodableText>,
    pub date_time_of_dispense: Option<IsoDateTime>,
    pub unit_of_use_quantity_dispensed: Option<String>,
    /// 1 for the original supply, 2 for the first repeat and so on
    pub number_of_this_dispense: Option<u32>,
    pub maximum_number_of_repeats: Option<u32>,
    pub additional_comments: Option<String>,
    pub custom_narrative: Option<StrucDocText>,
}

impl Presence for DispenseItem {}

impl Validate for DispenseItem {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.validate_required(path, "DispenseItemId", self.dispense_item_id.as_ref());
        vb.validate_required(path, "PrescriptionItemId", self.prescription_item_id.as_ref());
        validate_medicine(path, self.therapeutic_good_id.as_ref(), vb);
        vb.argument_required_check(path, "DateTimeOfDispense", &self.date_time_of_dispense);
        vb.argument_required_check(
            path,
            "UnitOfUseQuantityDispensed",
            &self.unit_of_use_quantity_dispensed,
        );
        let has_number = vb.argument_required_check(path, "NumberOfThisDispense", &self.number_of_this_dispense);
        let has_maximum =
            vb.argument_required_check(path, "MaximumNumberOfRepeats", &self.maximum_number_of_repeats);

        if let (true, true, Some(number), Some(maximum)) = (
            has_number,
            has_maximum,
            self.number_of_this_dispense,
            self.maximum_number_of_repeats,
        ) {
            let last = maximum.saturating_add(1);
            vb.condition_check(
                path,
                "NumberOfThisDispense",
                (1..=last).contains(&number),
                format!("NumberOfThisDispense must be between 1 and {last}"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn dispense(number: u32, maximum: u32) -> DispenseItem {
        DispenseItem {
            dispense_item_id: Some(Identifier::new("1.2.36.1.2001.1005.52", Some("D-1".into()))),
            prescription_item_id: Some(Identifier::new("1.2.36.1.2001.1005.52", Some("P-1".into()))),
            therapeutic_good_id: Some(CodableText::original_text("Amoxicillin 500mg capsule")),
            date_time_of_dispense: IsoDateTime::date(2024, 2, 1),
            unit_of_use_quantity_dispensed: Some("20 capsules".into()),
            number_of_this_dispense: Some(number),
            maximum_number_of_repeats: Some(maximum),
            ..Default::default()
        }
    }

    #[test_case(1, 0, true ; "original supply without repeats")]
    #[test_case(3, 2, true ; "last repeat")]
    #[test_case(4, 2, false ; "beyond last repeat")]
    #[test_case(0, 2, false ; "zero")]
    #[test_case(1, u32::MAX, true ; "unbounded repeats")]
    #[test_case(u32::MAX, u32::MAX, true ; "largest dispense number")]
    fn test_number_of_this_dispense(number: u32, maximum: u32, valid: bool) {
        let mut vb = ValidationBuilder::new();
        dispense(number, maximum).validate("DispenseItem", &mut vb);
        assert_eq!(vb.is_empty(), valid, "{:?}", vb.messages());
    }

    #[test]
    fn test_empty_prescription_lists_all_required_fields() {
        let mut vb = ValidationBuilder::new();
        PrescriptionItem::default().validate("PrescriptionItem", &mut vb);
        let fields: Vec<_> = vb.messages().iter().map(|m| m.field_name.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "PrescriptionItemId",
                "TherapeuticGoodId",
                "DateTimePrescriptionWritten",
                "Directions",
                "QuantityOfTherapeuticGood",
                "MaximumNumberOfRepeats"
            ]
        );
    }
}
