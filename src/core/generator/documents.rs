//! Document assembly
//!
//! [`CdaDocument`] describes what each document type adds to the shared
//! header: its extra participants, an optional encompassing encounter and its
//! body sections in order. [`assemble`] writes them out in CDA header order.

use super::header::{
    create_author, create_clinical_document, create_component_of, create_coverage,
    create_custodian, create_legal_authenticator, create_participant, create_record_target,
    ParticipantRole,
};
use super::helper::required;
use super::sections::SectionMapper;
use crate::domain::documents::{
    AcdCustodianRecord, AnyDocument, ClinicalDocument, ConsumerEnteredNotes, DischargeSummary,
    EReferral, MedicareOverview, PcehrDispenseRecord, PcehrPrescriptionRecord,
    PhysicalMeasurements,
};
use crate::domain::clinical::Encounter;
use crate::domain::common::Participant;
use crate::domain::Result;
use crate::xml::XmlElement;

/// Mapping hooks for one document type
pub trait CdaDocument: ClinicalDocument {
    /// Document-level `participant` elements, in order
    fn participants(&self) -> Result<Vec<XmlElement>> {
        Ok(Vec::new())
    }

    /// Participants outside the shared context whose entitlements become coverage
    fn extra_participants(&self) -> Vec<&Participant> {
        Vec::new()
    }

    fn component_of(&self) -> Result<Option<XmlElement>> {
        Ok(None)
    }

    /// Body sections in document order
    fn sections(&self, mapper: &SectionMapper<'_>) -> Result<Vec<XmlElement>>;
}

/// Builds the complete `ClinicalDocument` tree
pub fn assemble<D: CdaDocument + ?Sized>(document: &D, mapper: &SectionMapper<'_>) -> Result<XmlElement> {
    let context = document.context();
    let mut root = create_clinical_document(document.kind(), document.header())?;

    root.push(create_record_target(required(
        context.subject_of_care.as_ref(),
        "Context.SubjectOfCare",
    )?)?);
    root.push(create_author(required(context.author.as_ref(), "Context.Author")?)?);
    root.push(create_custodian(required(context.custodian.as_ref(), "Context.Custodian")?)?);
    if let Some(authenticator) = &context.legal_authenticator {
        root.push(create_legal_authenticator(authenticator)?);
    }
    for participant in document.participants()? {
        root.push(participant);
    }

    let entitled = context.participants().into_iter().chain(document.extra_participants());
    for coverage in entitled.flat_map(create_coverage) {
        root.push(coverage);
    }

    if let Some(component_of) = document.component_of()? {
        root.push(component_of);
    }

    let body = XmlElement::new("structuredBody").children_from(document.sections(mapper)?);
    Ok(root.child(XmlElement::new("component").child(body)))
}

impl CdaDocument for EReferral {
    fn participants(&self) -> Result<Vec<XmlElement>> {
        let referee = required(self.referee.as_ref(), "EReferral.Referee")?;
        let referee_participant = required(referee.participant.as_ref(), "EReferral.Referee.Participant")?;
        let mut participants = vec![create_participant(
            ParticipantRole::REFEREE,
            referee_participant,
            referee.role.as_ref(),
            "EReferral.Referee.Participant.Party",
        )?];

        if let Some(gp) = self.usual_gp.as_ref().and_then(|gp| gp.participant.as_ref()) {
            participants.push(create_participant(
                ParticipantRole::USUAL_GP,
                gp,
                None,
                "EReferral.UsualGp.Participant.Party",
            )?);
        }
        Ok(participants)
    }

    fn extra_participants(&self) -> Vec<&Participant> {
        [
            self.referee.as_ref().and_then(|r| r.participant.as_ref()),
            self.usual_gp.as_ref().and_then(|g| g.participant.as_ref()),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn sections(&self, mapper: &SectionMapper<'_>) -> Result<Vec<XmlElement>> {
        let content = &self.content;
        Ok(vec![
            mapper.referral_detail(required(content.referral_detail.as_ref(), "Content.ReferralDetail")?)?,
            mapper.adverse_reactions(required(
                content.adverse_reactions.as_ref(),
                "Content.AdverseReactions",
            )?)?,
            mapper.medications(required(content.medications.as_ref(), "Content.Medications")?)?,
            mapper.medical_history(required(content.medical_history.as_ref(), "Content.MedicalHistory")?)?,
        ])
    }
}

impl CdaDocument for DischargeSummary {
    fn participants(&self) -> Result<Vec<XmlElement>> {
        self.nominated_primary_healthcare_providers
            .iter()
            .enumerate()
            .filter_map(|(index, provider)| provider.participant.as_ref().map(|p| (index, p)))
            .map(|(index, participant)| {
                create_participant(
                    ParticipantRole::NOMINATED_PRIMARY_HEALTHCARE_PROVIDER,
                    participant,
                    None,
                    &format!("DischargeSummary.NominatedPrimaryHealthcareProviders[{index}].Participant.Party"),
                )
            })
            .collect()
    }

    fn extra_participants(&self) -> Vec<&Participant> {
        self.encounter
            .iter()
            .flat_map(Encounter::participants)
            .chain(
                self.nominated_primary_healthcare_providers
                    .iter()
                    .filter_map(|p| p.participant.as_ref()),
            )
            .collect()
    }

    fn component_of(&self) -> Result<Option<XmlElement>> {
        let encounter = required(self.encounter.as_ref(), "DischargeSummary.Encounter")?;
        create_component_of(encounter).map(Some)
    }

    fn sections(&self, mapper: &SectionMapper<'_>) -> Result<Vec<XmlElement>> {
        let content = &self.content;
        let mut sections = vec![mapper.event(required(content.event.as_ref(), "Content.Event")?)?];
        if let Some(medications) = &content.medications {
            sections.extend(mapper.discharge_medications(medications)?);
        }
        sections.push(mapper.health_profile(required(
            content.health_profile.as_ref(),
            "Content.HealthProfile",
        )?)?);
        if let Some(plan) = &content.plan {
            sections.extend(mapper.plan(plan)?);
        }
        Ok(sections)
    }
}

impl CdaDocument for PhysicalMeasurements {
    fn sections(&self, mapper: &SectionMapper<'_>) -> Result<Vec<XmlElement>> {
        let section = required(self.physical_measurements.as_ref(), "PhysicalMeasurements")?;
        Ok(vec![mapper.physical_measurements(section)?])
    }
}

impl CdaDocument for PcehrPrescriptionRecord {
    fn participants(&self) -> Result<Vec<XmlElement>> {
        let organisation = required(self.prescriber_organisation.as_ref(), "Context.PrescriberOrganisation")?;
        let participant = required(
            organisation.participant.as_ref(),
            "Context.PrescriberOrganisation.Participant",
        )?;
        Ok(vec![create_participant(
            ParticipantRole::PRESCRIBER_ORGANISATION,
            participant,
            None,
            "Context.PrescriberOrganisation.Participant.Party",
        )?])
    }

    fn extra_participants(&self) -> Vec<&Participant> {
        self.prescriber_organisation
            .iter()
            .filter_map(|o| o.participant.as_ref())
            .collect()
    }

    fn sections(&self, mapper: &SectionMapper<'_>) -> Result<Vec<XmlElement>> {
        let item = required(self.prescription_item.as_ref(), "PrescriptionItem")?;
        Ok(vec![mapper.prescription_item(item)?])
    }
}

impl CdaDocument for PcehrDispenseRecord {
    fn participants(&self) -> Result<Vec<XmlElement>> {
        let organisation = required(self.dispensing_organisation.as_ref(), "Context.DispensingOrganisation")?;
        let participant = required(
            organisation.participant.as_ref(),
            "Context.DispensingOrganisation.Participant",
        )?;
        Ok(vec![create_participant(
            ParticipantRole::DISPENSING_ORGANISATION,
            participant,
            None,
            "Context.DispensingOrganisation.Participant.Party",
        )?])
    }

    fn extra_participants(&self) -> Vec<&Participant> {
        self.dispensing_organisation
            .iter()
            .filter_map(|o| o.participant.as_ref())
            .collect()
    }

    fn sections(&self, mapper: &SectionMapper<'_>) -> Result<Vec<XmlElement>> {
        let item = required(self.dispense_item.as_ref(), "DispenseItem")?;
        Ok(vec![mapper.dispense_item(item)?])
    }
}

impl CdaDocument for ConsumerEnteredNotes {
    fn sections(&self, mapper: &SectionMapper<'_>) -> Result<Vec<XmlElement>> {
        let note = required(self.note.as_ref(), "ConsumerNote")?;
        Ok(vec![mapper.consumer_note(note)?])
    }
}

impl CdaDocument for AcdCustodianRecord {
    fn sections(&self, mapper: &SectionMapper<'_>) -> Result<Vec<XmlElement>> {
        let custodians = required(self.acd_custodians.as_ref(), "AcdCustodians")?;
        Ok(vec![mapper.acd_custodians(custodians)?])
    }
}

impl CdaDocument for MedicareOverview {
    fn extra_participants(&self) -> Vec<&Participant> {
        self.content
            .funded_services
            .iter()
            .flat_map(|s| &s.services)
            .filter_map(|service| service.service_provider.as_ref())
            .collect()
    }

    fn sections(&self, mapper: &SectionMapper<'_>) -> Result<Vec<XmlElement>> {
        let content = &self.content;
        let mut sections = Vec::new();
        if let Some(services) = &content.funded_services {
            sections.push(mapper.funded_services(services)?);
        }
        if let Some(items) = &content.pharmaceutical_benefit_items {
            sections.push(mapper.pharmaceutical_benefit_items(items)?);
        }
        if let Some(immunisations) = &content.childhood_immunisations {
            sections.push(mapper.childhood_immunisations(immunisations)?);
        }
        if let Some(registration) = &content.organ_donor_registration {
            sections.push(mapper.organ_donor_register(registration)?);
        }
        Ok(sections)
    }
}

impl CdaDocument for AnyDocument {
    fn participants(&self) -> Result<Vec<XmlElement>> {
        crate::dispatch_document!(self, doc => doc.participants())
    }

    fn extra_participants(&self) -> Vec<&Participant> {
        crate::dispatch_document!(self, doc => doc.extra_participants())
    }

    fn component_of(&self) -> Result<Option<XmlElement>> {
        crate::dispatch_document!(self, doc => doc.component_of())
    }

    fn sections(&self, mapper: &SectionMapper<'_>) -> Result<Vec<XmlElement>> {
        crate::dispatch_document!(self, doc => doc.sections(mapper))
    }
}
