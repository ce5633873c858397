//! Clinical content entities
//!
//! One module per section family. Every section struct carries an optional
//! `custom_narrative` that replaces the generated narrative verbatim.

pub mod acd;
pub mod adverse_reactions;
pub mod consumer_note;
pub mod encounter;
pub mod event;
pub mod health_profile;
pub mod measurements;
pub mod medical_history;
pub mod medicare;
pub mod medications;
pub mod plan;
pub mod prescription;
pub mod referral;

pub use acd::{AcdCustodian, AcdCustodians};
pub use adverse_reactions::{AdverseReaction, AdverseReactions, ReactionEvent};
pub use consumer_note::ConsumerNote;
pub use encounter::Encounter;
pub use event::{ClinicalInterventions, ClinicalSynopsis, Event, ProblemDiagnosesThisVisit};
pub use health_profile::{Alert, Alerts, HealthProfile};
pub use measurements::{PhysicalMeasurement, PhysicalMeasurementsSection};
pub use medical_history::{MedicalHistory, MedicalHistoryItem, ProblemDiagnosis, Procedure};
pub use medicare::{
    ChildhoodImmunisation, ChildhoodImmunisations, MedicareDvaFundedService,
    MedicareDvaFundedServices, OrganDonorRegistration, PharmaceuticalBenefitItem,
    PharmaceuticalBenefitItems,
};
pub use medications::{
    CeasedMedication, CeasedMedications, CurrentMedicationsOnDischarge, DischargeMedications,
    MedicationItem, Medications, TherapeuticGood,
};
pub use plan::{ArrangedService, ArrangedServices, Plan, Recommendation, Recommendations};
pub use prescription::{DispenseItem, PrescriptionItem};
pub use referral::ReferralDetail;
