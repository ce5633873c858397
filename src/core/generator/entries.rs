//! Entry mapping
//!
//! One builder per clinical statement kind. Each returns the `entry` element
//! ready to append to its section; nested relationships are written in a
//! fixed order.

use super::helper::{
    create_codable_text, create_code_from_descriptor, create_coded, create_consumable,
    create_contact_details, create_entry, create_entry_relationship, create_identifier,
    create_interval, create_participant_id, create_party_entity, create_person_name,
    create_text_act, create_time, create_value_cd, create_value_observation, create_value_pq,
    create_value_st, party, required, required_text,
};
use crate::domain::clinical::{
    AcdCustodian, AdverseReaction, Alert, ArrangedService, CeasedMedication, ChildhoodImmunisation,
    DispenseItem, MedicalHistoryItem, MedicareDvaFundedService, MedicationItem,
    OrganDonorRegistration, PharmaceuticalBenefitItem, PhysicalMeasurement, PrescriptionItem,
    ProblemDiagnosis, Procedure, Recommendation, TherapeuticGood,
};
use crate::domain::codes::{entries as codes, CodeDescriptor, CodedValue};
use crate::domain::common::{ExclusionStatement, Participant, Party};
use crate::domain::Result;
use crate::xml::XmlElement;

fn optional_text_act(type_code: &str, code: &CodeDescriptor, text: Option<&str>) -> Option<XmlElement> {
    text.filter(|t| !t.trim().is_empty())
        .map(|t| create_entry_relationship(type_code, create_text_act(code, t)))
}

fn observation(code: &CodeDescriptor) -> XmlElement {
    XmlElement::new("observation")
        .attr("classCode", "OBS")
        .attr("moodCode", "EVN")
        .child(create_code_from_descriptor("code", code))
}

/// Global statement recorded in place of an empty list
pub fn create_exclusion_entry(statement: &ExclusionStatement) -> Result<XmlElement> {
    let value = required(statement.global_statement.as_ref(), "ExclusionStatement.GlobalStatement")?;
    Ok(create_entry(create_value_observation(
        &codes::GLOBAL_STATEMENT,
        create_coded("value", value).attr("xsi:type", "CD"),
    )))
}

pub fn create_adverse_reaction_entry(reaction: &AdverseReaction) -> Result<XmlElement> {
    let substance = required(reaction.substance_or_agent.as_ref(), "AdverseReaction.SubstanceOrAgent")?;

    let causative_agent = XmlElement::new("participant").attr("typeCode", "CAUS").child(
        XmlElement::new("participantRole").attr("classCode", "MANU").child(
            XmlElement::new("playingEntity")
                .attr("classCode", "MMAT")
                .child(create_codable_text("code", substance)),
        ),
    );

    let events = reaction.reaction_events.iter().map(|event| {
        let manifestations = event.manifestations.iter().map(|manifestation| {
            create_entry_relationship(
                "MFST",
                create_value_observation(&codes::MANIFESTATION, create_value_cd(manifestation)),
            )
        });
        create_entry_relationship(
            "CAUS",
            observation(&codes::REACTION_EVENT).children_from(manifestations),
        )
    });

    Ok(create_entry(
        XmlElement::new("act")
            .attr("classCode", "ACT")
            .attr("moodCode", "EVN")
            .child(create_code_from_descriptor("code", &codes::ADVERSE_REACTION))
            .child(causative_agent)
            .children_from(events),
    ))
}

fn medicine_administration(mood: &str, directions: Option<&str>, medicine: XmlElement) -> XmlElement {
    XmlElement::new("substanceAdministration")
        .attr("classCode", "SBADM")
        .attr("moodCode", mood)
        .child_opt(directions.map(|d| XmlElement::new("text").text(d)))
        .child(medicine)
}

/// e-Referral medication
pub fn create_medication_entry(item: &MedicationItem) -> Result<XmlElement> {
    let medicine = required(item.medicine.as_ref(), "MedicationItem.Medicine")?;
    let directions = required_text(&item.directions, "MedicationItem.Directions")?;

    Ok(create_entry(
        medicine_administration("EVN", Some(directions), create_consumable(medicine))
            .child_opt(optional_text_act(
                "RSON",
                &codes::CLINICAL_INDICATION,
                item.clinical_indication.as_deref(),
            ))
            .child_opt(optional_text_act(
                "COMP",
                &codes::ADDITIONAL_COMMENTS,
                item.comment.as_deref(),
            )),
    ))
}

/// Medicine current at discharge
///
/// Relationships follow the order clinical indication, change type, change
/// status, reason for change, unit of use quantity dispensed, additional
/// comments.
pub fn create_therapeutic_good_entry(good: &TherapeuticGood) -> Result<XmlElement> {
    let medicine = required(good.medicine.as_ref(), "TherapeuticGood.Medicine")?;
    let directions = required_text(&good.directions, "TherapeuticGood.Directions")?;

    Ok(create_entry(
        medicine_administration("EVN", Some(directions), create_consumable(medicine))
            .child_opt(optional_text_act(
                "RSON",
                &codes::CLINICAL_INDICATION,
                good.clinical_indication.as_deref(),
            ))
            .children_from(item_status(good.change_type.as_ref(), good.change_status.as_ref()))
            .child_opt(optional_text_act(
                "RSON",
                &codes::CHANGE_REASON,
                good.reason_for_change.as_deref(),
            ))
            .child_opt(good.unit_of_use_quantity_dispensed.as_deref().map(|quantity| {
                create_entry_relationship(
                    "COMP",
                    create_value_observation(
                        &codes::UNIT_OF_USE_QUANTITY_DISPENSED,
                        create_value_st(quantity),
                    ),
                )
            }))
            .child_opt(optional_text_act(
                "COMP",
                &codes::ADDITIONAL_COMMENTS,
                good.additional_comments.as_deref(),
            )),
    ))
}

fn coded_observation<C: CodedValue>(code: &CodeDescriptor, value: &C) -> XmlElement {
    create_entry_relationship(
        "COMP",
        create_value_observation(code, create_coded("value", value).attr("xsi:type", "CD")),
    )
}

/// Change type then change status
fn item_status<T: CodedValue, S: CodedValue>(
    change_type: Option<&T>,
    change_status: Option<&S>,
) -> Vec<XmlElement> {
    change_type
        .map(|t| coded_observation(&codes::CHANGE_TYPE, t))
        .into_iter()
        .chain(change_status.map(|s| coded_observation(&codes::CHANGE_STATUS, s)))
        .collect()
}

pub fn create_ceased_medication_entry(medication: &CeasedMedication) -> Result<XmlElement> {
    let medicine = required(medication.medicine.as_ref(), "CeasedMedication.Medicine")?;
    let change_type = required(medication.change_type.as_ref(), "CeasedMedication.ChangeType")?;
    let change_status = required(medication.change_status.as_ref(), "CeasedMedication.ChangeStatus")?;

    Ok(create_entry(
        medicine_administration("EVN", None, create_consumable(medicine))
            .children_from(item_status(Some(change_type), Some(change_status)))
            .child_opt(optional_text_act(
                "RSON",
                &codes::CHANGE_REASON,
                medication.reason_for_change.as_deref(),
            )),
    ))
}

/// Problem or diagnosis observation
///
/// Onset is the low bound of the effective time; resolution is a separate
/// relationship so an onset-only problem has neither a high bound nor a
/// resolution observation.
pub fn create_problem_diagnosis_entry(problem: &ProblemDiagnosis) -> Result<XmlElement> {
    let identification = required(
        problem.identification.as_ref(),
        "ProblemDiagnosis.ProblemDiagnosisIdentification",
    )?;

    let onset = problem.date_of_onset.as_ref().map(|onset| {
        XmlElement::new("effectiveTime").child(create_time("low", onset))
    });
    let resolution = problem.date_of_resolution_remission.as_ref().map(|resolved| {
        create_entry_relationship(
            "COMP",
            observation(&codes::DATE_OF_RESOLUTION_REMISSION)
                .child(create_time("effectiveTime", resolved)),
        )
    });

    Ok(create_entry(
        observation(&codes::DIAGNOSIS)
            .child_opt(onset)
            .child(create_value_cd(identification))
            .child_opt(resolution)
            .child_opt(optional_text_act(
                "COMP",
                &codes::PROBLEM_DIAGNOSIS_COMMENT,
                problem.comment.as_deref(),
            )),
    ))
}

pub fn create_procedure_entry(procedure: &Procedure) -> Result<XmlElement> {
    let name = required(procedure.procedure_name.as_ref(), "Procedure.ProcedureName")?;

    Ok(create_entry(
        XmlElement::new("procedure")
            .attr("classCode", "PROC")
            .attr("moodCode", "EVN")
            .child(create_codable_text("code", name))
            .child_opt(
                procedure
                    .comment
                    .as_deref()
                    .map(|c| XmlElement::new("text").text(c)),
            )
            .child_opt(
                procedure
                    .procedure_date
                    .as_ref()
                    .map(|d| create_time("effectiveTime", d)),
            ),
    ))
}

pub fn create_medical_history_item_entry(item: &MedicalHistoryItem) -> Result<XmlElement> {
    let description = required_text(&item.item_description, "MedicalHistoryItem.ItemDescription")?;

    Ok(create_entry(
        XmlElement::new("act")
            .attr("classCode", "ACT")
            .attr("moodCode", "EVN")
            .child(create_code_from_descriptor("code", &codes::MEDICAL_HISTORY_ITEM))
            .child(XmlElement::new("text").text(description))
            .child_opt(
                item.date_time_interval
                    .as_ref()
                    .map(|i| create_interval("effectiveTime", i)),
            )
            .child_opt(optional_text_act(
                "COMP",
                &codes::MEDICAL_HISTORY_ITEM_COMMENT,
                item.comment.as_deref(),
            )),
    ))
}

pub fn create_alert_entry(alert: &Alert) -> Result<XmlElement> {
    let description = required(alert.alert_description.as_ref(), "Alert.AlertDescription")?;
    Ok(create_entry(create_value_observation(
        &codes::ALERT,
        create_value_cd(description),
    )))
}

/// `performer/assignedEntity` for a person or organisation provider
fn create_performer(provider: &Participant, field: &str) -> Result<XmlElement> {
    Ok(XmlElement::new("performer").attr("typeCode", "PRF").child(
        XmlElement::new("assignedEntity")
            .child(create_participant_id(provider))
            .children_from(create_contact_details(provider))
            .child(create_party_entity(
                provider,
                "assignedPerson",
                "representedOrganization",
                field,
            )?),
    ))
}

/// Arranged service, with the booking status as the act mood
pub fn create_arranged_service_entry(service: &ArrangedService) -> Result<XmlElement> {
    let description = required(service.description.as_ref(), "ArrangedService.Description")?;
    let status = required(service.booking_status.as_ref(), "ArrangedService.BookingStatus")?;

    let performer = service
        .provider
        .as_ref()
        .map(|provider| create_performer(provider, "ArrangedService.Provider.Party"))
        .transpose()?;

    Ok(create_entry(
        XmlElement::new("act")
            .attr("classCode", "ACT")
            .attr("moodCode", status.code())
            .child(create_codable_text("code", description))
            .child_opt(
                service
                    .commencement
                    .as_ref()
                    .map(|c| create_interval("effectiveTime", c)),
            )
            .child_opt(performer),
    ))
}

/// `participant/participantRole` under an entry act
fn create_entry_participant(type_code: &str, participant: &Participant, field: &str) -> Result<XmlElement> {
    let playing_entity = match party(participant, field)? {
        Party::Person(person) => XmlElement::new("playingEntity")
            .attr("classCode", "PSN")
            .children_from(person.names.iter().map(create_person_name)),
        Party::Organisation(organisation) => XmlElement::new("playingEntity")
            .attr("classCode", "ORG")
            .child(XmlElement::new("name").text(organisation.display_name())),
        Party::Device(device) => XmlElement::new("playingEntity")
            .attr("classCode", "DEV")
            .child(XmlElement::new("name").text(device.software_name.as_deref().unwrap_or_default())),
    };

    Ok(XmlElement::new("participant").attr("typeCode", type_code).child(
        XmlElement::new("participantRole")
            .child(create_participant_id(participant))
            .children_from(create_contact_details(participant))
            .child(playing_entity),
    ))
}

pub fn create_recommendation_entry(recommendation: &Recommendation) -> Result<XmlElement> {
    let addressee = required(recommendation.addressee.as_ref(), "Recommendation.Addressee")?;
    let narrative = required_text(&recommendation.narrative, "Recommendation.Narrative")?;

    Ok(create_entry(
        XmlElement::new("act")
            .attr("classCode", "INFRM")
            .attr("moodCode", "PRP")
            .child(create_code_from_descriptor("code", &codes::RECOMMENDATION))
            .child(XmlElement::new("text").text(narrative))
            .child_opt(
                recommendation
                    .time_frame
                    .as_ref()
                    .map(|t| create_interval("effectiveTime", t)),
            )
            .child(create_entry_participant("IRCP", addressee, "Recommendation.Addressee.Party")?),
    ))
}

pub fn create_physical_measurement_entry(measurement: &PhysicalMeasurement) -> Result<XmlElement> {
    let measurement_type = required(
        measurement.measurement_type.as_ref(),
        "PhysicalMeasurement.MeasurementType",
    )?;
    let value = required(measurement.value.as_ref(), "PhysicalMeasurement.Value")?;

    Ok(create_entry(
        XmlElement::new("observation")
            .attr("classCode", "OBS")
            .attr("moodCode", "EVN")
            .child(create_coded("code", measurement_type))
            .child_opt(
                measurement
                    .observation_time
                    .as_ref()
                    .map(|t| create_time("effectiveTime", t)),
            )
            .child(create_value_pq(value)?)
            .child_opt(optional_text_act(
                "COMP",
                &codes::ADDITIONAL_COMMENTS,
                measurement.comment.as_deref(),
            )),
    ))
}

/// Prescription item as an intended administration
///
/// The effective time is the date the prescription was written. Repeats and
/// the minimum interval between them are carried on a requested supply.
pub fn create_prescription_item_entry(item: &PrescriptionItem) -> Result<XmlElement> {
    let id = required(item.prescription_item_id.as_ref(), "PrescriptionItem.PrescriptionItemId")?;
    let good = required(item.therapeutic_good_id.as_ref(), "PrescriptionItem.TherapeuticGoodId")?;
    let written = required(
        item.date_time_prescription_written.as_ref(),
        "PrescriptionItem.DateTimePrescriptionWritten",
    )?;
    let directions = required_text(&item.directions, "PrescriptionItem.Directions")?;
    let quantity = required_text(
        &item.quantity_of_therapeutic_good,
        "PrescriptionItem.QuantityOfTherapeuticGood",
    )?;

    let has_repeats =
        item.maximum_number_of_repeats.is_some() || item.minimum_interval_between_repeats.is_some();
    let supply = if has_repeats {
        let interval = match &item.minimum_interval_between_repeats {
            Some(interval) => {
                let value = required(
                    interval.value.as_ref(),
                    "PrescriptionItem.MinimumIntervalBetweenRepeats",
                )?;
                Some(
                    XmlElement::new("expectedUseTime").child(
                        XmlElement::new("width")
                            .attr("value", value.normalize().to_string())
                            .attr("unit", interval.units_or_unity()),
                    ),
                )
            }
            None => None,
        };
        Some(create_entry_relationship(
            "COMP",
            XmlElement::new("supply")
                .attr("classCode", "SPLY")
                .attr("moodCode", "RQO")
                .child_opt(
                    item.maximum_number_of_repeats
                        .map(|n| XmlElement::new("repeatNumber").attr("value", n.to_string())),
                )
                .child_opt(interval),
        ))
    } else {
        None
    };

    Ok(create_entry(
        XmlElement::new("substanceAdministration")
            .attr("classCode", "SBADM")
            .attr("moodCode", "INT")
            .child(create_identifier("id", id))
            .child(XmlElement::new("text").text(directions))
            .child(create_time("effectiveTime", written))
            .child(create_consumable(good))
            .child_opt(supply)
            .child(create_entry_relationship(
                "COMP",
                create_text_act(&codes::QUANTITY_OF_THERAPEUTIC_GOOD, quantity),
            ))
            .child_opt(
                item.grounds_for_concurrent_supply
                    .map(|grounds| coded_observation(&codes::GROUNDS_FOR_CONCURRENT_SUPPLY, &grounds)),
            )
            .child_opt(optional_text_act(
                "RSON",
                &codes::CLINICAL_INDICATION,
                item.clinical_indication.as_deref(),
            ))
            .child_opt(optional_text_act(
                "COMP",
                &codes::ADDITIONAL_COMMENTS,
                item.additional_comments.as_deref(),
            )),
    ))
}

/// Dispense event referring back to its prescription item
pub fn create_dispense_item_entry(item: &DispenseItem) -> Result<XmlElement> {
    let id = required(item.dispense_item_id.as_ref(), "DispenseItem.DispenseItemId")?;
    let prescription = required(item.prescription_item_id.as_ref(), "DispenseItem.PrescriptionItemId")?;
    let good = required(item.therapeutic_good_id.as_ref(), "DispenseItem.TherapeuticGoodId")?;
    let dispensed = required(item.date_time_of_dispense.as_ref(), "DispenseItem.DateTimeOfDispense")?;

    let product = XmlElement::new("product").child(
        XmlElement::new("manufacturedProduct")
            .child(XmlElement::new("manufacturedMaterial").child(create_codable_text("code", good))),
    );

    Ok(create_entry(
        XmlElement::new("supply")
            .attr("classCode", "SPLY")
            .attr("moodCode", "EVN")
            .child(create_identifier("id", id))
            .child(create_time("effectiveTime", dispensed))
            .child_opt(
                item.number_of_this_dispense
                    .map(|n| XmlElement::new("repeatNumber").attr("value", n.to_string())),
            )
            .child(product)
            .child(create_entry_relationship(
                "REFR",
                XmlElement::new("act")
                    .attr("classCode", "ACT")
                    .attr("moodCode", "INT")
                    .child(create_identifier("id", prescription))
                    .child(create_code_from_descriptor("code", &codes::PRESCRIPTION_ITEM_REFERENCE)),
            ))
            .child_opt(item.maximum_number_of_repeats.map(|max| {
                create_entry_relationship(
                    "COMP",
                    XmlElement::new("supply")
                        .attr("classCode", "SPLY")
                        .attr("moodCode", "RQO")
                        .child(XmlElement::new("repeatNumber").attr("value", max.to_string())),
                )
            }))
            .child_opt(item.unit_of_use_quantity_dispensed.as_deref().map(|quantity| {
                create_entry_relationship(
                    "COMP",
                    create_value_observation(
                        &codes::UNIT_OF_USE_QUANTITY_DISPENSED,
                        create_value_st(quantity),
                    ),
                )
            }))
            .child_opt(optional_text_act(
                "COMP",
                &codes::ADDITIONAL_COMMENTS,
                item.additional_comments.as_deref(),
            )),
    ))
}

pub fn create_consumer_note_entry(title: &str, description: &str) -> XmlElement {
    create_entry(
        create_text_act(&codes::CONSUMER_NOTE, description).child(create_entry_relationship(
            "COMP",
            create_value_observation(&codes::CONSUMER_NOTE_TITLE, create_value_st(title)),
        )),
    )
}

pub fn create_acd_custodian_entry(custodian: &AcdCustodian) -> Result<XmlElement> {
    let participant = required(custodian.participant.as_ref(), "AcdCustodian.Participant")?;
    Ok(create_entry(
        XmlElement::new("act")
            .attr("classCode", "ACT")
            .attr("moodCode", "EVN")
            .child(create_code_from_descriptor("code", &codes::ACD_CUSTODIAN))
            .child(create_entry_participant("CST", participant, "AcdCustodian.Participant.Party")?),
    ))
}

fn create_value_bl(value: bool) -> XmlElement {
    XmlElement::new("value")
        .attr("xsi:type", "BL")
        .attr("value", value.to_string())
}

/// Service claimed against an MBS or DVA item
pub fn create_funded_service_entry(service: &MedicareDvaFundedService) -> Result<XmlElement> {
    let item = required(service.service.as_ref(), "MedicareDvaFundedService.Service")?;
    let date = required(service.date_of_service.as_ref(), "MedicareDvaFundedService.DateOfService")?;
    let performer = service
        .service_provider
        .as_ref()
        .map(|provider| create_performer(provider, "MedicareDvaFundedService.ServiceProvider.Party"))
        .transpose()?;

    Ok(create_entry(
        XmlElement::new("act")
            .attr("classCode", "ACT")
            .attr("moodCode", "EVN")
            .child(create_codable_text("code", item))
            .child(create_time("effectiveTime", date))
            .child_opt(performer)
            .child_opt(service.service_in_hospital.map(|in_hospital| {
                create_entry_relationship(
                    "COMP",
                    create_value_observation(&codes::SERVICE_IN_HOSPITAL, create_value_bl(in_hospital)),
                )
            })),
    ))
}

/// Supply of a PBS or RPBS item
///
/// The supply carries the item code; the medicine is the supplied product.
pub fn create_pharmaceutical_benefit_entry(item: &PharmaceuticalBenefitItem) -> Result<XmlElement> {
    let code = required(item.item_code.as_ref(), "PharmaceuticalBenefitItem.ItemCode")?;
    let medicine = required(item.medicine.as_ref(), "PharmaceuticalBenefitItem.Medicine")?;
    let supplied = required(item.date_of_supply.as_ref(), "PharmaceuticalBenefitItem.DateOfSupply")?;

    let product = XmlElement::new("product").child(
        XmlElement::new("manufacturedProduct")
            .child(XmlElement::new("manufacturedMaterial").child(create_codable_text("code", medicine))),
    );

    Ok(create_entry(
        XmlElement::new("supply")
            .attr("classCode", "SPLY")
            .attr("moodCode", "EVN")
            .child(create_codable_text("code", code))
            .child(create_time("effectiveTime", supplied))
            .child_opt(
                item.number_of_repeats
                    .map(|n| XmlElement::new("repeatNumber").attr("value", n.to_string())),
            )
            .child_opt(
                item.quantity
                    .as_deref()
                    .filter(|q| !q.trim().is_empty())
                    .map(|q| XmlElement::new("quantity").child(XmlElement::new("originalText").text(q))),
            )
            .child(product)
            .child_opt(item.date_of_prescribing.as_ref().map(|prescribed| {
                create_entry_relationship(
                    "COMP",
                    observation(&codes::DATE_OF_PRESCRIBING).child(create_time("effectiveTime", prescribed)),
                )
            })),
    ))
}

/// Vaccine administered, with the dose number when known
pub fn create_childhood_immunisation_entry(immunisation: &ChildhoodImmunisation) -> Result<XmlElement> {
    let vaccine = required(immunisation.vaccine.as_ref(), "ChildhoodImmunisation.Vaccine")?;
    let administered = required(
        immunisation.date_administered.as_ref(),
        "ChildhoodImmunisation.DateAdministered",
    )?;

    Ok(create_entry(
        XmlElement::new("substanceAdministration")
            .attr("classCode", "SBADM")
            .attr("moodCode", "EVN")
            .child(create_time("effectiveTime", administered))
            .child(create_consumable(vaccine))
            .child_opt(immunisation.dose_number.map(|dose| {
                create_entry_relationship(
                    "COMP",
                    create_value_observation(
                        &codes::VACCINE_DOSE_NUMBER,
                        XmlElement::new("value")
                            .attr("xsi:type", "INT")
                            .attr("value", dose.to_string()),
                    ),
                )
            })),
    ))
}

/// Donation decision observation, one component per organ or tissue
pub fn create_organ_donor_entry(registration: &OrganDonorRegistration) -> Result<XmlElement> {
    let decision = required(
        registration.donation_decision.as_ref(),
        "OrganDonorRegistration.DonationDecision",
    )?;
    let registered = required(
        registration.date_of_initial_registration.as_ref(),
        "OrganDonorRegistration.DateOfInitialRegistration",
    )?;

    let organs = registration.organs_and_tissues.iter().map(|organ| {
        create_entry_relationship(
            "COMP",
            create_value_observation(&codes::ORGANS_AND_TISSUES, create_value_cd(organ)),
        )
    });

    Ok(create_entry(
        observation(&codes::ORGAN_DONATION_DECISION)
            .child(create_time("effectiveTime", registered))
            .child(create_value_bl(*decision))
            .children_from(organs),
    ))
}
