//! Fixed (code, title, code system) triplets for sections

use super::code_system::CodingSystem;
use super::coded_value::CodeDescriptor;

const fn nctis(code: &'static str, title: &'static str) -> CodeDescriptor {
    CodeDescriptor::new(code, title, CodingSystem::Nctis)
}

pub const REFERRAL_DETAIL: CodeDescriptor = nctis("102.16347", "Referral Detail");
pub const ADVERSE_REACTIONS: CodeDescriptor = nctis("101.20113", "Adverse Reactions");
pub const MEDICATIONS: CodeDescriptor = nctis("101.16022", "Medications");
pub const MEDICAL_HISTORY: CodeDescriptor = nctis("101.16117", "Medical History");

pub const EVENT: CodeDescriptor = nctis("101.16006", "Event");
pub const PROBLEMS_DIAGNOSES_THIS_VISIT: CodeDescriptor =
    nctis("101.16142", "Problems/Diagnoses This Visit");
pub const CLINICAL_INTERVENTIONS: CodeDescriptor =
    nctis("101.16141", "Clinical Interventions Performed This Visit");
pub const CLINICAL_SYNOPSIS: CodeDescriptor = nctis("102.15513", "Clinical Synopsis");

pub const DISCHARGE_MEDICATIONS: CodeDescriptor = nctis("101.16146", "Medications");
pub const CURRENT_MEDICATIONS_ON_DISCHARGE: CodeDescriptor =
    nctis("101.16146.4.1.1", "Current Medications On Discharge");
pub const CEASED_MEDICATIONS: CodeDescriptor = nctis("101.16146.4.1.2", "Ceased Medications");

pub const HEALTH_PROFILE: CodeDescriptor = nctis("101.16011", "Health Profile");
pub const ALERTS: CodeDescriptor = nctis("101.16010", "Alerts");

pub const PLAN: CodeDescriptor = nctis("101.16020", "Plan");
pub const ARRANGED_SERVICES: CodeDescriptor = nctis("101.16021", "Arranged Services");
pub const RECOMMENDATIONS: CodeDescriptor =
    nctis("101.16615", "Record of Recommendations and Information Provided");

pub const PHYSICAL_MEASUREMENTS: CodeDescriptor = nctis("101.16999", "Physical Measurements");
pub const PRESCRIPTION_ITEM: CodeDescriptor = nctis("101.16763", "Prescription Item");
pub const DISPENSE_ITEM: CodeDescriptor = nctis("101.16764", "Dispense Item");
pub const CONSUMER_ENTERED_NOTE: CodeDescriptor = nctis("101.16683", "Consumer Entered Note");
pub const ACD_CUSTODIANS: CodeDescriptor =
    nctis("101.16973", "Advance Care Directive Custodians");

pub const MEDICARE_DVA_FUNDED_SERVICES: CodeDescriptor =
    nctis("101.16644", "Medicare/DVA Funded Services");
pub const PHARMACEUTICAL_BENEFIT_ITEMS: CodeDescriptor =
    nctis("101.16650", "Pharmaceutical Benefit Items");
pub const CHILDHOOD_IMMUNISATIONS: CodeDescriptor =
    nctis("101.16659", "Australian Childhood Immunisation Register");
pub const ORGAN_DONOR_REGISTER: CodeDescriptor =
    nctis("101.16671", "Australian Organ Donor Register");
