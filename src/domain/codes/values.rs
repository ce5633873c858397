//! Coded value sets used by the document model
//!
//! Only the values the implemented documents actually emit are listed.

use super::code_system::CodingSystem;
use crate::core::validation::Presence;
use serde::{Deserialize, Serialize};

crate::coded_enum! {
    /// Administrative sex (AS 5017)
    pub enum Sex [CodingSystem::As5017Sex] {
        Male => ("M", "Male"),
        Female => ("F", "Female"),
        Intersex => ("I", "Intersex or Indeterminate"),
        NotStated => ("N", "Not Stated/Inadequately Described"),
    }
}

crate::coded_enum! {
    /// Placeholder recorded instead of a list when no items apply
    pub enum GlobalStatement [CodingSystem::NctisGlobalStatement] {
        NoneKnown => ("01", "None known"),
        NotAsked => ("02", "Not asked"),
        NoneSupplied => ("03", "None supplied"),
    }
}

crate::coded_enum! {
    /// Benefit or registration type of an entitlement
    pub enum EntitlementType [CodingSystem::NctisEntitlementType] {
        MedicareBenefits => ("1", "Medicare Benefits"),
        PensionerConcession => ("2", "Pensioner Concession"),
        CommonwealthSeniorsHealthConcession => ("3", "Commonwealth Seniors Health Concession"),
        HealthCareConcession => ("4", "Health Care Concession"),
        RepatriationHealthGoldCard => ("5", "Repatriation Health Gold Card"),
        RepatriationHealthWhiteCard => ("6", "Repatriation Health White Card"),
        RepatriationHealthOrangeCard => ("7", "Repatriation Health Orange Card"),
        SafetyNetConcession => ("8", "Safety Net Concession"),
        SafetyNetEntitlement => ("9", "Safety Net Entitlement"),
        MedicarePrescriberNumber => ("10", "Medicare Prescriber Number"),
        MedicarePharmacyApprovalNumber => ("11", "Medicare Pharmacy Approval Number"),
    }
}

crate::coded_enum! {
    /// Completion status of the document
    pub enum DocumentStatus [CodingSystem::NctisDocumentStatus] {
        Final => ("F", "Final"),
        Interim => ("I", "Interim"),
        Withdrawn => ("W", "Withdrawn"),
    }
}

crate::coded_enum! {
    /// How a medication changed during the episode
    pub enum ChangeType [CodingSystem::NctisChangeType] {
        Added => ("01", "Added"),
        Changed => ("02", "Changed"),
        Ceased => ("03", "Ceased"),
        Suspended => ("04", "Suspended"),
        Unchanged => ("05", "Unchanged"),
        Prescribed => ("06", "Prescribed"),
    }
}

crate::coded_enum! {
    /// Whether a medication change was made or only recommended
    pub enum ChangeStatus [CodingSystem::NctisChangeStatus] {
        ChangeMade => ("01", "Change Made"),
        Recommendation => ("02", "Recommendation"),
    }
}

crate::coded_enum! {
    /// Mode of separation at the end of an encounter
    pub enum SeparationMode [CodingSystem::AihwSeparationMode] {
        AcuteHospital => ("1", "Discharge/transfer to (an)other acute hospital"),
        ResidentialAgedCare => ("2", "Discharge/transfer to a residential aged care service"),
        PsychiatricHospital => ("3", "Discharge/transfer to (an)other psychiatric hospital"),
        OtherHealthCareAccommodation => ("4", "Discharge/transfer to other health care accommodation"),
        StatisticalTypeChange => ("5", "Statistical discharge - type change"),
        LeftAgainstMedicalAdvice => ("6", "Left against medical advice/discharge at own risk"),
        StatisticalFromLeave => ("7", "Statistical discharge from leave"),
        Died => ("8", "Died"),
        UsualResidence => ("9", "Other (includes discharge to usual residence)"),
    }
}

crate::coded_enum! {
    /// Grounds on which a concurrent supply was authorised
    pub enum GroundsForConcurrentSupply [CodingSystem::NctisGroundsForConcurrentSupply] {
        NotApplicable => ("01", "Not Applicable"),
        Regulation24 => ("02", "Pharmaceutical Benefits Scheme Regulation 24"),
        UnusualCircumstances => ("03", "Unusual circumstances"),
    }
}

crate::coded_enum! {
    /// Occupation of a healthcare provider (ANZSCO subset)
    pub enum Occupation [CodingSystem::Anzsco] {
        GeneralMedicalPractitioner => ("253111", "General Medical Practitioner"),
        ResidentMedicalOfficer => ("253112", "Resident Medical Officer"),
        SpecialistPhysician => ("253399", "Specialist Physicians nec"),
        HospitalPharmacist => ("251511", "Hospital Pharmacist"),
        RetailPharmacist => ("251513", "Retail Pharmacist"),
        RegisteredNurse => ("254499", "Registered Nurses nec"),
    }
}

crate::coded_enum! {
    /// Kind of physical measurement observation
    pub enum PhysicalMeasurementType [CodingSystem::Loinc] {
        BodyHeight => ("8302-2", "Body height"),
        BodyWeight => ("29463-7", "Body weight"),
        HeadCircumference => ("9843-4", "Head Occipital-frontal circumference"),
        BodyMassIndex => ("39156-5", "Body mass index (BMI) [Ratio]"),
        WaistCircumference => ("8280-0", "Waist Circumference at umbilicus by Tape measure"),
    }
}

crate::coded_enum! {
    /// HL7 null flavours accepted on coded and temporal values
    pub enum NullFlavour [CodingSystem::Hl7NullFlavor] {
        NoInformation => ("NI", "No information"),
        Unknown => ("UNK", "Unknown"),
        AskedButUnknown => ("ASKU", "Asked but unknown"),
        NotAsked => ("NASK", "Not asked"),
        NotApplicable => ("NA", "Not applicable"),
        Masked => ("MSK", "Masked"),
        Other => ("OTH", "Other"),
    }
}

crate::coded_enum! {
    /// Purpose of an address
    pub enum AddressPurpose [CodingSystem::Hl7AddressUse] {
        Business => ("WP", "Business"),
        Residential => ("H", "Residential (permanent)"),
        Temporary => ("TMP", "Temporary accommodation"),
        Mailing => ("PST", "Mailing or postal"),
    }
}

crate::coded_enum! {
    /// Use of an electronic communication detail
    pub enum TelecomUsage [CodingSystem::Hl7TelecomUse] {
        Business => ("WP", "Business"),
        Personal => ("H", "Personal"),
        Mobile => ("MC", "Mobile contact"),
        Emergency => ("EC", "Emergency contact"),
    }
}

crate::coded_enum! {
    /// Usage of a person name
    pub enum NameUsage [CodingSystem::Hl7EntityNameUse] {
        Legal => ("L", "Registered name (legal name)"),
        Alias => ("P", "Other name (alias)"),
        Newborn => ("NB", "Newborn name"),
        Reported => ("R", "Reported name"),
    }
}

crate::coded_enum! {
    /// Booking state of an arranged service, rendered as the act mood
    pub enum ServiceBookingStatus [CodingSystem::Hl7ActMood] {
        Appointment => ("APT", "Appointment"),
        AppointmentRequest => ("ARQ", "Appointment Request"),
        Event => ("EVN", "Event"),
        Intent => ("INT", "Intent"),
        Promise => ("PRMS", "Promise"),
        Proposal => ("PRP", "Proposal"),
        Request => ("RQO", "Request"),
    }
}

/// Australian state or territory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AustralianState {
    Nsw,
    Vic,
    Qld,
    Sa,
    Wa,
    Tas,
    Nt,
    Act,
}

impl AustralianState {
    pub fn abbreviation(&self) -> &'static str {
        match self {
            AustralianState::Nsw => "NSW",
            AustralianState::Vic => "VIC",
            AustralianState::Qld => "QLD",
            AustralianState::Sa => "SA",
            AustralianState::Wa => "WA",
            AustralianState::Tas => "TAS",
            AustralianState::Nt => "NT",
            AustralianState::Act => "ACT",
        }
    }
}

/// Medium of an electronic communication detail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TelecomMedium {
    Telephone,
    Mobile,
    Fax,
    Email,
    Url,
}

impl TelecomMedium {
    /// URI scheme prefixed to the `telecom/@value`
    pub fn scheme(&self) -> &'static str {
        match self {
            TelecomMedium::Telephone | TelecomMedium::Mobile => "tel:",
            TelecomMedium::Fax => "fax:",
            TelecomMedium::Email => "mailto:",
            TelecomMedium::Url => "",
        }
    }
}

impl Presence for AustralianState {}
impl Presence for TelecomMedium {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::codes::CodedValue;

    #[test]
    fn test_global_statement_table() {
        let d = GlobalStatement::NoneKnown.descriptor();
        assert_eq!(d.code, "01");
        assert_eq!(d.display_name, "None known");
        assert_eq!(d.code_system.oid(), "1.2.36.1.2001.1001.101.104.16299");
        assert_eq!(GlobalStatement::from_code("02"), Some(GlobalStatement::NotAsked));
    }

    #[test]
    fn test_codes_are_unique_within_each_table() {
        fn unique<T: CodedValue>(values: &[T]) -> bool {
            let mut codes: Vec<_> = values.iter().map(|v| v.code()).collect();
            codes.sort_unstable();
            codes.dedup();
            codes.len() == values.len()
        }
        assert!(unique(Sex::ALL));
        assert!(unique(EntitlementType::ALL));
        assert!(unique(ChangeType::ALL));
        assert!(unique(SeparationMode::ALL));
        assert!(unique(Occupation::ALL));
        assert!(unique(PhysicalMeasurementType::ALL));
        assert!(unique(ServiceBookingStatus::ALL));
    }

    #[test]
    fn test_state_serde_uses_abbreviation_case() {
        let json = serde_json::to_string(&AustralianState::Nsw).unwrap();
        assert_eq!(json, "\"NSW\"");
        assert_eq!(AustralianState::Act.abbreviation(), "ACT");
    }

    #[test]
    fn test_mood_code_for_booking_status() {
        assert_eq!(ServiceBookingStatus::Appointment.code(), "APT");
        assert_eq!(ServiceBookingStatus::Intent.code_system(), CodingSystem::Hl7ActMood);
    }
}
