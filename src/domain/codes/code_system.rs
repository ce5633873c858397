//! Known code systems
//!
//! Every coded value written to a document names its code system by OID.
//! [`CodingSystem::from_oid`] is the resolution step behind the
//! "code system must be known" rule on [`CodableText`](crate::domain::common::CodableText).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A code system referenced by the documents this crate produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodingSystem {
    SnomedCtAu,
    Amt,
    Loinc,
    Nctis,
    Mbs,
    Pbs,
    As5017Sex,
    Anzsco,
    Hl7NullFlavor,
    Hl7ActCode,
    Hl7ActMood,
    Hl7AddressUse,
    Hl7EntityNameUse,
    Hl7TelecomUse,
    Hl7ParticipationFunction,
    NctisGlobalStatement,
    NctisEntitlementType,
    NctisDocumentStatus,
    NctisChangeType,
    NctisChangeStatus,
    NctisGroundsForConcurrentSupply,
    AihwSeparationMode,
}

impl CodingSystem {
    pub const ALL: &'static [CodingSystem] = &[
        CodingSystem::SnomedCtAu,
        CodingSystem::Amt,
        CodingSystem::Loinc,
        CodingSystem::Nctis,
        CodingSystem::Mbs,
        CodingSystem::Pbs,
        CodingSystem::As5017Sex,
        CodingSystem::Anzsco,
        CodingSystem::Hl7NullFlavor,
        CodingSystem::Hl7ActCode,
        CodingSystem::Hl7ActMood,
        CodingSystem::Hl7AddressUse,
        CodingSystem::Hl7EntityNameUse,
        CodingSystem::Hl7TelecomUse,
        CodingSystem::Hl7ParticipationFunction,
        CodingSystem::NctisGlobalStatement,
        CodingSystem::NctisEntitlementType,
        CodingSystem::NctisDocumentStatus,
        CodingSystem::NctisChangeType,
        CodingSystem::NctisChangeStatus,
        CodingSystem::NctisGroundsForConcurrentSupply,
        CodingSystem::AihwSeparationMode,
    ];

    /// OID written to `codeSystem`
    pub fn oid(&self) -> &'static str {
        match self {
            CodingSystem::SnomedCtAu => "2.16.840.1.113883.6.96",
            CodingSystem::Amt => "1.2.36.1.2001.1004.100",
            CodingSystem::Loinc => "2.16.840.1.113883.6.1",
            CodingSystem::Nctis => "1.2.36.1.2001.1001.101",
            CodingSystem::Mbs => "1.2.36.1.2001.1005.34",
            CodingSystem::Pbs => "1.2.36.1.2001.1005.35",
            CodingSystem::As5017Sex => "2.16.840.1.113883.13.68",
            CodingSystem::Anzsco => "2.16.840.1.113883.13.62",
            CodingSystem::Hl7NullFlavor => "2.16.840.1.113883.5.1008",
            CodingSystem::Hl7ActCode => "2.16.840.1.113883.5.4",
            CodingSystem::Hl7ActMood => "2.16.840.1.113883.5.1001",
            CodingSystem::Hl7AddressUse => "2.16.840.1.113883.5.1119",
            CodingSystem::Hl7EntityNameUse => "2.16.840.1.113883.5.45",
            CodingSystem::Hl7TelecomUse => "2.16.840.1.113883.5.1011",
            CodingSystem::Hl7ParticipationFunction => "2.16.840.1.113883.5.88",
            CodingSystem::NctisGlobalStatement => "1.2.36.1.2001.1001.101.104.16299",
            CodingSystem::NctisEntitlementType => "1.2.36.1.2001.1001.101.104.16047",
            CodingSystem::NctisDocumentStatus => "1.2.36.1.2001.1001.101.104.20104",
            CodingSystem::NctisChangeType => "1.2.36.1.2001.1001.101.104.16592",
            CodingSystem::NctisChangeStatus => "1.2.36.1.2001.1001.101.104.16594",
            CodingSystem::NctisGroundsForConcurrentSupply => "1.2.36.1.2001.1001.101.104.16288",
            CodingSystem::AihwSeparationMode => "2.16.840.1.113883.13.65",
        }
    }

    /// Human readable name written to `codeSystemName`
    pub fn name(&self) -> &'static str {
        match self {
            CodingSystem::SnomedCtAu => "SNOMED CT-AU",
            CodingSystem::Amt => "Australian Medicines Terminology (AMT)",
            CodingSystem::Loinc => "LOINC",
            CodingSystem::Nctis => "NCTIS Data Components",
            CodingSystem::Mbs => "Medicare Benefits Schedule",
            CodingSystem::Pbs => "Pharmaceutical Benefits Scheme Item Code",
            CodingSystem::As5017Sex => "AS 5017-2006 Health Care Client Identifier Sex",
            CodingSystem::Anzsco => "1220.0 - ANZSCO - Australian and New Zealand Standard Classification of Occupations, First Edition, 2006",
            CodingSystem::Hl7NullFlavor => "HL7 NullFlavor",
            CodingSystem::Hl7ActCode => "HL7 ActCode",
            CodingSystem::Hl7ActMood => "HL7 ActMood",
            CodingSystem::Hl7AddressUse => "HL7 AddressUse",
            CodingSystem::Hl7EntityNameUse => "HL7 EntityNameUse",
            CodingSystem::Hl7TelecomUse => "HL7 TelecommunicationAddressUse",
            CodingSystem::Hl7ParticipationFunction => "HL7 ParticipationFunction",
            CodingSystem::NctisGlobalStatement => "NCTIS Global Statement Values",
            CodingSystem::NctisEntitlementType => "NCTIS Entitlement Type Values",
            CodingSystem::NctisDocumentStatus => "NCTIS Document Status Values",
            CodingSystem::NctisChangeType => "NCTIS Change Type Values",
            CodingSystem::NctisChangeStatus => "NCTIS Recommendation or Change Values",
            CodingSystem::NctisGroundsForConcurrentSupply => {
                "NCTIS Grounds for Concurrent Supply Values"
            }
            CodingSystem::AihwSeparationMode => "AIHW Mode of Separation",
        }
    }

    /// Resolves a code system from its OID
    pub fn from_oid(oid: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|system| system.oid() == oid)
    }
}

impl fmt::Display for CodingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
