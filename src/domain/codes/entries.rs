//! Fixed codes for entries and entry relationships

use super::code_system::CodingSystem;
use super::coded_value::CodeDescriptor;

const fn nctis(code: &'static str, name: &'static str) -> CodeDescriptor {
    CodeDescriptor::new(code, name, CodingSystem::Nctis)
}

pub const GLOBAL_STATEMENT: CodeDescriptor = nctis("103.16302", "Global Statement");

// Adverse reactions
pub const ADVERSE_REACTION: CodeDescriptor = nctis("102.15517", "Adverse Reaction");
pub const REACTION_EVENT: CodeDescriptor = nctis("102.16474", "Reaction Event");
pub const MANIFESTATION: CodeDescriptor = nctis("103.16475", "Manifestation");

// Medications
pub const CLINICAL_INDICATION: CodeDescriptor = nctis("103.10141", "Clinical Indication");
pub const ADDITIONAL_COMMENTS: CodeDescriptor = nctis("103.16044", "Additional Comments");
pub const CHANGE_TYPE: CodeDescriptor = nctis("103.16593", "Change Type");
pub const CHANGE_STATUS: CodeDescriptor = nctis("103.16595", "Change Status");
pub const CHANGE_REASON: CodeDescriptor = nctis("103.10177", "Change Description");
pub const UNIT_OF_USE_QUANTITY_DISPENSED: CodeDescriptor =
    nctis("103.16311", "Unit of Use Quantity Dispensed");
pub const DIRECTIONS: CodeDescriptor = nctis("103.16133", "Directions");
pub const GROUNDS_FOR_CONCURRENT_SUPPLY: CodeDescriptor =
    nctis("103.16767", "Grounds for Concurrent Supply");

// Medical history
pub const DIAGNOSIS: CodeDescriptor =
    CodeDescriptor::new("282291009", "Diagnosis interpretation", CodingSystem::SnomedCtAu);
pub const PROCEDURE: CodeDescriptor =
    CodeDescriptor::new("71388002", "Procedure", CodingSystem::SnomedCtAu);
pub const DATE_OF_RESOLUTION_REMISSION: CodeDescriptor =
    nctis("103.15508", "Date of Resolution/Remission");
pub const PROBLEM_DIAGNOSIS_COMMENT: CodeDescriptor =
    nctis("103.16545", "Problem/Diagnosis Comment");
pub const MEDICAL_HISTORY_ITEM: CodeDescriptor = nctis("102.16627", "Other Medical History Item");
pub const MEDICAL_HISTORY_ITEM_COMMENT: CodeDescriptor =
    nctis("103.16630", "Medical History Item Comment");

// Referral
pub const REFERRAL_DATETIME: CodeDescriptor = nctis("103.16620", "Referral DateTime");
pub const REASON_FOR_REFERRAL: CodeDescriptor =
    CodeDescriptor::new("42349-1", "Reason for referral", CodingSystem::Loinc);
pub const REFERRAL_VALIDITY_DURATION: CodeDescriptor =
    nctis("103.16622", "Referral Validity Duration");

// Discharge summary content
pub const CLINICAL_SYNOPSIS_DESCRIPTION: CodeDescriptor =
    nctis("103.15582", "Clinical Synopsis Description");
pub const ALERT: CodeDescriptor = nctis("103.16430", "Alert");
pub const RECOMMENDATION: CodeDescriptor = nctis("102.20016", "Recommendation");
pub const RECOMMENDATION_RECIPIENT: CodeDescriptor =
    nctis("103.16617", "Recommendation Recipient");

// PCEHR records
pub const CONSUMER_NOTE: CodeDescriptor = nctis("102.16684", "Consumer Entered Note");
pub const CONSUMER_NOTE_TITLE: CodeDescriptor = nctis("103.16686", "Note Title");
pub const PRESCRIPTION_ITEM_REFERENCE: CodeDescriptor = nctis("102.16211", "Prescription Item");
pub const QUANTITY_OF_THERAPEUTIC_GOOD: CodeDescriptor =
    nctis("103.16306", "Quantity of Therapeutic Good");
pub const ACD_CUSTODIAN: CodeDescriptor = nctis("102.16975", "Advance Care Directive Custodian");

// Medicare views
pub const SERVICE_IN_HOSPITAL: CodeDescriptor = nctis("103.16648", "Service in Hospital Indicator");
pub const DATE_OF_PRESCRIBING: CodeDescriptor = nctis("103.16654", "Date of Prescribing");
pub const VACCINE_DOSE_NUMBER: CodeDescriptor = nctis("103.16663", "Vaccine Dose Number");
pub const ORGAN_DONATION_DECISION: CodeDescriptor = nctis("103.16674", "Donation Decision");
pub const ORGANS_AND_TISSUES: CodeDescriptor = nctis("103.16675", "Organs and Tissues");
