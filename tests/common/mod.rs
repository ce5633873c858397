//! Shared document fixtures for integration tests
//!
//! `minimal_*` builders fill only mandatory data; `maximal_*` builders
//! populate every optional subsection exactly once.

#![allow(dead_code)]

use pcehr_cda::domain::clinical::{
    AcdCustodian, AcdCustodians, AdverseReaction, AdverseReactions, Alert, Alerts, ArrangedService,
    ArrangedServices, CeasedMedication, CeasedMedications, ChildhoodImmunisation,
    ChildhoodImmunisations, ClinicalInterventions, ClinicalSynopsis, ConsumerNote,
    CurrentMedicationsOnDischarge, DischargeMedications, DispenseItem, Encounter, Event,
    HealthProfile, MedicalHistory, MedicalHistoryItem, MedicareDvaFundedService,
    MedicareDvaFundedServices, MedicationItem, Medications, OrganDonorRegistration,
    PharmaceuticalBenefitItem, PharmaceuticalBenefitItems, PhysicalMeasurement,
    PhysicalMeasurementsSection, Plan, PrescriptionItem, ProblemDiagnosesThisVisit,
    ProblemDiagnosis, Procedure, Recommendation, Recommendations, ReferralDetail, TherapeuticGood,
};
use pcehr_cda::domain::codes::{
    AddressPurpose, AustralianState, ChangeStatus, ChangeType, CodingSystem, DocumentStatus,
    EntitlementType, GlobalStatement, GroundsForConcurrentSupply, Occupation,
    PhysicalMeasurementType, SeparationMode, ServiceBookingStatus, Sex, TelecomMedium, TelecomUsage,
};
use pcehr_cda::domain::common::{
    Address, Author, AustralianAddress, CdaInterval, CodableText, Custodian, Device,
    DispensingOrganisation, ElectronicCommunicationDetail, Entitlement, ExclusionStatement,
    HealthcareFacility, Identifier, IsoDateTime, LegalAuthenticator, NominatedPrimaryHealthcareProvider,
    Organisation, Participant, Party, Person, PersonName, PrescriberOrganisation, Quantity, Referee,
    ResponsibleHealthProfessional, SubjectOfCare, UsualGp,
};
use pcehr_cda::domain::documents::{
    AcdCustodianRecord, ConsumerEnteredNotes, DischargeSummary, DischargeSummaryContent,
    DocumentContext, DocumentHeader, EReferral, EReferralContent, MedicareOverview,
    MedicareOverviewContent, PcehrDispenseRecord, PcehrPrescriptionRecord, PhysicalMeasurements,
};
use pcehr_cda::domain::AnyDocument;
use rust_decimal::Decimal;
use uuid::Uuid;

pub const IHI_ROOT: &str = "1.2.36.1.2001.1003.0.8003608833357361";
pub const HPIO_ROOT: &str = "1.2.36.1.2001.1003.0.8003620833333789";
pub const HPII_ROOT: &str = "1.2.36.1.2001.1003.0.8003610000000000";

pub fn id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

pub fn date(year: i32, month: u32, day: u32) -> IsoDateTime {
    IsoDateTime::date(year, month, day).expect("valid fixture date")
}

pub fn snomed(code: &str, display: &str) -> CodableText {
    CodableText::new(code, CodingSystem::SnomedCtAu, display)
}

pub fn amt(code: &str, display: &str) -> CodableText {
    CodableText::new(code, CodingSystem::Amt, display)
}

pub fn header(n: u128) -> DocumentHeader {
    DocumentHeader::new(Identifier::from_uuid(id(n)), date(2024, 3, 1), DocumentStatus::Final)
}

pub fn business_address() -> Address {
    Address::australian(
        AddressPurpose::Business,
        AustralianAddress {
            unstructured_address_lines: vec!["1 Clinic Street".to_string()],
            suburb_town_locality: Some("Sydney".to_string()),
            state: Some(AustralianState::Nsw),
            postcode: Some("2000".to_string()),
        },
    )
}

pub fn work_phone() -> ElectronicCommunicationDetail {
    ElectronicCommunicationDetail::new(TelecomMedium::Telephone, TelecomUsage::Business, "0299990000")
}

pub fn person(given: &str, family: &str) -> Person {
    Person::named(PersonName::new(given, family))
}

pub fn clinician(n: u128, given: &str, family: &str) -> Participant {
    let mut doctor = person(given, family);
    doctor.identifiers = vec![Identifier::new(HPII_ROOT, None)];
    Participant::with_id(id(n), Some(Party::Person(doctor)))
        .with_address(business_address())
        .with_communication(work_phone())
}

pub fn organisation(n: u128, name: &str) -> Participant {
    let mut org = Organisation::named(name);
    org.identifiers = vec![Identifier::new(HPIO_ROOT, None)];
    Participant::with_id(id(n), Some(Party::Organisation(org)))
}

pub fn patient() -> Participant {
    let mut jane = person("Jane", "Citizen");
    jane.sex = Some(Sex::Female);
    jane.date_of_birth = Some(date(1970, 1, 1));
    jane.identifiers = vec![Identifier::new(IHI_ROOT, None)];
    Participant::with_id(id(100), Some(Party::Person(jane)))
        .with_address(Address::australian(
            AddressPurpose::Residential,
            AustralianAddress {
                unstructured_address_lines: vec!["2 Home Road".to_string()],
                suburb_town_locality: Some("Parramatta".to_string()),
                state: Some(AustralianState::Nsw),
                postcode: Some("2150".to_string()),
            },
        ))
        .with_entitlement(Entitlement::new(
            EntitlementType::MedicareBenefits,
            Identifier::new("1.2.36.1.5001.1.0.7.1", Some("29511613721".to_string())),
        ))
}

pub fn context() -> DocumentContext {
    DocumentContext {
        subject_of_care: Some(SubjectOfCare {
            participant: Some(patient()),
        }),
        author: Some(Author {
            participant: Some(clinician(101, "Gregory", "House")),
            participation_period: Some(date(2024, 3, 1)),
            role: Some(CodableText::from_coded(&Occupation::GeneralMedicalPractitioner)),
        }),
        custodian: Some(Custodian {
            participant: Some(organisation(102, "Good Health Clinic")),
        }),
        legal_authenticator: None,
    }
}

pub fn context_with_authenticator() -> DocumentContext {
    DocumentContext {
        legal_authenticator: Some(LegalAuthenticator {
            participant: Some(clinician(103, "Lisa", "Cuddy")),
            time_of_signature: Some(date(2024, 3, 1)),
        }),
        ..context()
    }
}

pub fn device_author() -> Author {
    Author {
        participant: Some(Participant::with_id(
            id(104),
            Some(Party::Device(Device {
                software_name: Some("Clinic Desktop".to_string()),
                manufacturer_model_name: Some("Acme Health 5".to_string()),
                identifiers: vec![],
            })),
        )),
        participation_period: Some(date(2024, 3, 1)),
        role: Some(CodableText::original_text("Clinical software")),
    }
}

pub fn none_known() -> ExclusionStatement {
    ExclusionStatement::new(GlobalStatement::NoneKnown)
}

pub fn penicillin_reaction() -> AdverseReaction {
    AdverseReaction::new(snomed("764146007", "Penicillin")).with_manifestation(snomed("271807003", "Rash"))
}

pub fn asthma() -> ProblemDiagnosis {
    ProblemDiagnosis {
        date_of_onset: Some(date(2010, 5, 1)),
        comment: Some("Mild, seasonal".to_string()),
        ..ProblemDiagnosis::new(snomed("195967001", "Asthma"))
    }
}

pub fn appendicectomy() -> Procedure {
    Procedure {
        procedure_date: Some(date(2001, 2, 3)),
        ..Procedure::new(snomed("80146002", "Appendicectomy"))
    }
}

// ---------------------------------------------------------------------------
// e-Referral
// ---------------------------------------------------------------------------

pub fn minimal_e_referral() -> EReferral {
    EReferral {
        header: header(1),
        context: context(),
        referee: Some(Referee {
            participant: Some(clinician(110, "James", "Wilson")),
            role: None,
        }),
        usual_gp: None,
        content: EReferralContent {
            referral_detail: Some(ReferralDetail::new(date(2024, 3, 1), "Specialist opinion")),
            adverse_reactions: Some(AdverseReactions::none_known(none_known())),
            medications: Some(Medications {
                exclusion_statement: Some(none_known()),
                ..Default::default()
            }),
            medical_history: Some(MedicalHistory {
                problem_diagnosis_exclusion: Some(none_known()),
                procedure_exclusion: Some(none_known()),
                ..Default::default()
            }),
        },
    }
}

pub fn maximal_e_referral() -> EReferral {
    let mut referral = minimal_e_referral();
    referral.context = context_with_authenticator();
    referral.referee = Some(Referee {
        participant: Some(clinician(110, "James", "Wilson")),
        role: Some(CodableText::from_coded(&Occupation::SpecialistPhysician)),
    });
    referral.usual_gp = Some(UsualGp {
        participant: Some(organisation(111, "Family Practice")),
    });
    referral.content = EReferralContent {
        referral_detail: Some(ReferralDetail {
            validity_duration: Some(CdaInterval::width(Quantity::new(Decimal::from(12), "mo"))),
            ..ReferralDetail::new(date(2024, 3, 1), "Specialist opinion")
        }),
        adverse_reactions: Some(AdverseReactions {
            reactions: vec![penicillin_reaction()],
            ..Default::default()
        }),
        medications: Some(Medications {
            medications: vec![MedicationItem {
                clinical_indication: Some("Asthma".to_string()),
                comment: Some("Uses spacer".to_string()),
                ..MedicationItem::new(amt("23215011000036106", "Ventolin inhaler"), "2 puffs as needed")
            }],
            ..Default::default()
        }),
        medical_history: Some(MedicalHistory {
            problem_diagnoses: vec![asthma()],
            procedures: vec![appendicectomy()],
            medical_history_items: vec![MedicalHistoryItem {
                item_description: Some("Broken arm".to_string()),
                date_time_interval: Some(CdaInterval::low_high(date(1990, 1, 1), date(1990, 3, 1))),
                comment: Some("Healed".to_string()),
            }],
            ..Default::default()
        }),
    };
    referral
}

// ---------------------------------------------------------------------------
// Discharge summary
// ---------------------------------------------------------------------------

pub fn encounter() -> Encounter {
    Encounter {
        encounter_period: Some(CdaInterval::low_high(date(2024, 2, 20), date(2024, 2, 28))),
        separation_mode: Some(SeparationMode::UsualResidence),
        specialty: None,
        healthcare_facility: Some(HealthcareFacility {
            participant: Some(organisation(120, "General Hospital")),
        }),
        responsible_health_professionals: vec![ResponsibleHealthProfessional {
            participant: Some(clinician(121, "Meredith", "Grey")),
            role: None,
        }],
    }
}

pub fn minimal_discharge_summary() -> DischargeSummary {
    DischargeSummary {
        header: header(2),
        context: context(),
        encounter: Some(encounter()),
        nominated_primary_healthcare_providers: vec![],
        content: DischargeSummaryContent {
            event: Some(Event {
                problem_diagnoses_this_visit: Some(ProblemDiagnosesThisVisit {
                    exclusion_statement: Some(none_known()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            medications: None,
            health_profile: Some(HealthProfile {
                adverse_reactions: Some(AdverseReactions::none_known(none_known())),
                ..Default::default()
            }),
            plan: None,
        },
    }
}

pub fn maximal_discharge_summary() -> DischargeSummary {
    let mut summary = minimal_discharge_summary();
    summary.context = context_with_authenticator();

    let mut encounter = encounter();
    encounter.specialty = Some(snomed("394579002", "Cardiology"));
    encounter.responsible_health_professionals.push(ResponsibleHealthProfessional {
        participant: Some(clinician(122, "Derek", "Shepherd")),
        role: Some(CodableText::from_coded(&Occupation::SpecialistPhysician)),
    });
    summary.encounter = Some(encounter);

    summary.nominated_primary_healthcare_providers = vec![NominatedPrimaryHealthcareProvider {
        participant: Some(organisation(123, "Family Practice")),
    }];

    summary.content = DischargeSummaryContent {
        event: Some(Event {
            problem_diagnoses_this_visit: Some(ProblemDiagnosesThisVisit {
                problem_diagnoses: vec![asthma()],
                ..Default::default()
            }),
            clinical_interventions: Some(ClinicalInterventions {
                procedures: vec![appendicectomy()],
                custom_narrative: None,
            }),
            clinical_synopsis: Some(ClinicalSynopsis {
                description: Some("Admitted with exacerbation of asthma".to_string()),
                custom_narrative: None,
            }),
            custom_narrative: None,
        }),
        medications: Some(DischargeMedications {
            current_medications: Some(CurrentMedicationsOnDischarge {
                therapeutic_goods: vec![TherapeuticGood {
                    clinical_indication: Some("Asthma".to_string()),
                    reason_for_change: Some("Better control".to_string()),
                    unit_of_use_quantity_dispensed: Some("1 inhaler".to_string()),
                    additional_comments: Some("Review in 2 weeks".to_string()),
                    ..TherapeuticGood::new(
                        amt("23215011000036106", "Ventolin inhaler"),
                        "2 puffs as needed",
                    )
                    .with_change(ChangeType::Changed, ChangeStatus::ChangeMade)
                }],
                ..Default::default()
            }),
            ceased_medications: Some(ceased_medications()),
            custom_narrative: None,
        }),
        health_profile: Some(HealthProfile {
            adverse_reactions: Some(AdverseReactions {
                reactions: vec![penicillin_reaction()],
                ..Default::default()
            }),
            alerts: Some(Alerts {
                alerts: vec![Alert::new(CodableText::original_text("Falls risk"))],
                custom_narrative: None,
            }),
            custom_narrative: None,
        }),
        plan: Some(Plan {
            arranged_services: Some(ArrangedServices {
                services: vec![ArrangedService {
                    description: Some(snomed("183519002", "Referral to cardiology service")),
                    booking_status: Some(ServiceBookingStatus::Appointment),
                    commencement: Some(CdaInterval::low(date(2024, 3, 15))),
                    provider: Some(clinician(124, "Preston", "Burke")),
                }],
                custom_narrative: None,
            }),
            recommendations: Some(Recommendations {
                recommendations: vec![Recommendation {
                    addressee: Some(organisation(125, "Family Practice")),
                    narrative: Some("Review inhaler technique".to_string()),
                    time_frame: Some(CdaInterval::width(Quantity::new(Decimal::from(2), "wk"))),
                }],
                custom_narrative: None,
            }),
            custom_narrative: None,
        }),
    };
    summary
}

pub fn ceased_medications() -> CeasedMedications {
    CeasedMedications {
        medications: vec![CeasedMedication {
            reason_for_change: Some("Replaced by inhaler".to_string()),
            ..CeasedMedication::new(
                amt("10001011000036106", "Prednisolone 5 mg tablet"),
                ChangeType::Ceased,
                ChangeStatus::ChangeMade,
            )
        }],
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Single-section records
// ---------------------------------------------------------------------------

pub fn physical_measurements() -> PhysicalMeasurements {
    PhysicalMeasurements {
        header: header(3),
        context: context(),
        physical_measurements: Some(PhysicalMeasurementsSection {
            measurements: vec![
                PhysicalMeasurement::new(
                    PhysicalMeasurementType::BodyHeight,
                    Quantity::new(Decimal::new(1725, 1), "cm"),
                    date(2024, 3, 1),
                ),
                PhysicalMeasurement {
                    comment: Some("Clothed".to_string()),
                    ..PhysicalMeasurement::new(
                        PhysicalMeasurementType::BodyWeight,
                        Quantity::new(Decimal::new(700, 1), "kg"),
                        date(2024, 3, 1),
                    )
                },
            ],
            custom_narrative: None,
        }),
    }
}

pub fn prescription_item() -> PrescriptionItem {
    PrescriptionItem {
        prescription_item_id: Some(Identifier::from_uuid(id(130))),
        therapeutic_good_id: Some(amt("23215011000036106", "Ventolin inhaler")),
        date_time_prescription_written: Some(date(2024, 3, 1)),
        directions: Some("2 puffs as needed".to_string()),
        quantity_of_therapeutic_good: Some("1 inhaler".to_string()),
        maximum_number_of_repeats: Some(2),
        minimum_interval_between_repeats: Some(Quantity::new(Decimal::from(28), "d")),
        grounds_for_concurrent_supply: Some(GroundsForConcurrentSupply::NotApplicable),
        clinical_indication: Some("Asthma".to_string()),
        additional_comments: Some("Brand substitution allowed".to_string()),
        custom_narrative: None,
    }
}

pub fn prescription_record() -> PcehrPrescriptionRecord {
    PcehrPrescriptionRecord {
        header: header(4),
        context: context(),
        prescriber_organisation: Some(PrescriberOrganisation {
            participant: Some(organisation(131, "Good Health Clinic")),
        }),
        prescription_item: Some(prescription_item()),
    }
}

pub fn dispense_record() -> PcehrDispenseRecord {
    PcehrDispenseRecord {
        header: header(5),
        context: context(),
        dispensing_organisation: Some(DispensingOrganisation {
            participant: Some(organisation(140, "Corner Pharmacy")),
        }),
        dispense_item: Some(DispenseItem {
            dispense_item_id: Some(Identifier::from_uuid(id(141))),
            prescription_item_id: Some(Identifier::from_uuid(id(130))),
            therapeutic_good_id: Some(amt("23215011000036106", "Ventolin inhaler")),
            date_time_of_dispense: Some(date(2024, 3, 2)),
            unit_of_use_quantity_dispensed: Some("1 inhaler".to_string()),
            number_of_this_dispense: Some(1),
            maximum_number_of_repeats: Some(2),
            additional_comments: None,
            custom_narrative: None,
        }),
    }
}

pub fn consumer_notes() -> ConsumerEnteredNotes {
    let mut context = context();
    if let Some(author) = context.author.as_mut() {
        author.participant = Some(patient());
        author.role = Some(CodableText::original_text("Consumer"));
    }
    ConsumerEnteredNotes {
        header: header(6),
        context,
        note: Some(ConsumerNote::new("My allergies", "Hay fever every spring")),
    }
}

pub fn acd_custodian_record() -> AcdCustodianRecord {
    AcdCustodianRecord {
        header: header(7),
        context: context(),
        acd_custodians: Some(AcdCustodians {
            custodians: vec![AcdCustodian::new(
                Participant::with_id(id(150), Some(Party::Person(person("John", "Citizen"))))
                    .with_communication(work_phone()),
            )],
            custom_narrative: None,
        }),
    }
}

pub fn medicare_overview() -> MedicareOverview {
    let mut consultation = MedicareDvaFundedService::new(
        CodableText::new("23", CodingSystem::Mbs, "Level B consultation"),
        date(2024, 1, 3),
    );
    consultation.service_in_hospital = Some(false);
    consultation.service_provider = Some(clinician(160, "Sam", "Jones"));

    MedicareOverview {
        header: header(8),
        context: context(),
        content: MedicareOverviewContent {
            funded_services: Some(MedicareDvaFundedServices {
                services: vec![consultation],
                ..Default::default()
            }),
            pharmaceutical_benefit_items: Some(PharmaceuticalBenefitItems {
                items: vec![PharmaceuticalBenefitItem {
                    item_code: Some(CodableText::new("2622B", CodingSystem::Pbs, "Salbutamol")),
                    medicine: Some(amt("21607011000036102", "Salbutamol 100 microgram/actuation inhaler")),
                    date_of_prescribing: Some(date(2024, 1, 3)),
                    date_of_supply: Some(date(2024, 1, 4)),
                    quantity: Some("1 inhaler".to_string()),
                    number_of_repeats: Some(5),
                }],
                ..Default::default()
            }),
            childhood_immunisations: Some(ChildhoodImmunisations {
                immunisations: vec![ChildhoodImmunisation {
                    dose_number: Some(1),
                    ..ChildhoodImmunisation::new(
                        CodableText::original_text("Infanrix hexa"),
                        date(1970, 3, 1),
                    )
                }],
                ..Default::default()
            }),
            organ_donor_registration: Some(OrganDonorRegistration {
                date_of_initial_registration: Some(date(2015, 7, 1)),
                donation_decision: Some(true),
                organs_and_tissues: vec![snomed("64033007", "Kidney")],
                custom_narrative: None,
            }),
        },
    }
}

/// One valid instance of every document type
pub fn all_documents() -> Vec<AnyDocument> {
    vec![
        minimal_e_referral().into(),
        maximal_e_referral().into(),
        minimal_discharge_summary().into(),
        maximal_discharge_summary().into(),
        physical_measurements().into(),
        prescription_record().into(),
        dispense_record().into(),
        consumer_notes().into(),
        acd_custodian_record().into(),
        medicare_overview().into(),
    ]
}
