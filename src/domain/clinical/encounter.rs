//! Discharge encounter

use crate::core::validation::{Presence, Validate, ValidationBuilder};
use crate::domain::codes::SeparationMode;
use crate::domain::common::{
    CdaInterval, CodableText, HealthcareFacility, Participant, ResponsibleHealthProfessional,
};
use serde::{Deserialize, Serialize};

/// The hospital stay a discharge summary describes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Encounter {
    pub encounter_period: Option<CdaInterval>,
    pub separation_mode: Option<SeparationMode>,
    pub specialty: Option<CodableText>,
    pub healthcare_facility: Option<HealthcareFacility>,
    pub responsible_health_professionals: Vec<ResponsibleHealthProfessional>,
}

impl Encounter {
    /// Facility then responsible health professionals
    pub fn participants(&self) -> Vec<&Participant> {
        self.healthcare_facility
            .iter()
            .filter_map(|f| f.participant.as_ref())
            .chain(
                self.responsible_health_professionals
                    .iter()
                    .filter_map(|p| p.participant.as_ref()),
            )
            .collect()
    }
}

impl Presence for Encounter {}

impl Validate for Encounter {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.validate_required(path, "EncounterPeriod", self.encounter_period.as_ref());
        vb.argument_required_check(path, "SeparationMode", &self.separation_mode);
        vb.validate_optional(path, "Specialty", self.specialty.as_ref());
        vb.validate_required(path, "HealthcareFacility", self.healthcare_facility.as_ref());
        if vb.argument_required_check(
            path,
            "ResponsibleHealthProfessionals",
            &self.responsible_health_professionals,
        ) {
            vb.validate_each(
                path,
                "ResponsibleHealthProfessionals",
                &self.responsible_health_professionals,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::{Organisation, Party};

    #[test]
    fn test_participants_in_order() {
        let facility = Participant::new(Party::Organisation(Organisation::named("General Hospital")));
        let clinician = Participant::new(Party::Organisation(Organisation::named("Cardiology Unit")));
        let encounter = Encounter {
            healthcare_facility: Some(HealthcareFacility {
                participant: Some(facility.clone()),
            }),
            responsible_health_professionals: vec![
                ResponsibleHealthProfessional {
                    participant: Some(clinician.clone()),
                    role: None,
                },
                ResponsibleHealthProfessional::default(),
            ],
            ..Default::default()
        };
        let ids: Vec<_> = encounter.participants().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![facility.id, clinician.id]);
    }

    #[test]
    fn test_empty_encounter_reports_every_field() {
        let mut vb = ValidationBuilder::new();
        Encounter::default().validate("DischargeSummary.Encounter", &mut vb);
        let fields: Vec<_> = vb.messages().iter().map(|m| m.field_name.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "EncounterPeriod",
                "SeparationMode",
                "HealthcareFacility",
                "ResponsibleHealthProfessionals"
            ]
        );
    }
}
