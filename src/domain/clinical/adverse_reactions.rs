//! Adverse reactions

use crate::core::validation::{indexed_path, join_path, Presence, Validate, ValidationBuilder};
use crate::domain::common::{validate_list_or_exclusion, CodableText, ExclusionStatement, StrucDocText};
use serde::{Deserialize, Serialize};

/// Adverse reactions section: reactions or an exclusion statement
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdverseReactions {
    pub reactions: Vec<AdverseReaction>,
    pub exclusion_statement: Option<ExclusionStatement>,
    pub custom_narrative: Option<StrucDocText>,
}

impl AdverseReactions {
    pub fn none_known(statement: ExclusionStatement) -> Self {
        Self {
            exclusion_statement: Some(statement),
            ..Default::default()
        }
    }
}

impl Presence for AdverseReactions {}

impl Validate for AdverseReactions {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        validate_list_or_exclusion(
            path,
            "Reactions",
            &self.reactions,
            self.exclusion_statement.as_ref(),
            vb,
        );
    }
}

/// A substance and the reactions it caused
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdverseReaction {
    pub substance_or_agent: Option<CodableText>,
    pub reaction_events: Vec<ReactionEvent>,
}

impl AdverseReaction {
    pub fn new(substance_or_agent: CodableText) -> Self {
        Self {
            substance_or_agent: Some(substance_or_agent),
            reaction_events: Vec::new(),
        }
    }

    pub fn with_manifestation(mut self, manifestation: CodableText) -> Self {
        self.reaction_events.push(ReactionEvent {
            manifestations: vec![manifestation],
        });
        self
    }
}

impl Presence for AdverseReaction {}

impl Validate for AdverseReaction {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        if vb.argument_required_check(path, "SubstanceOrAgent", &self.substance_or_agent) {
            if let Some(substance) = &self.substance_or_agent {
                substance.validate_mandatory(&join_path(path, "SubstanceOrAgent"), vb);
            }
        }
        vb.validate_each(path, "ReactionEvents", &self.reaction_events);
    }
}

/// One occurrence of a reaction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReactionEvent {
    pub manifestations: Vec<CodableText>,
}

impl Validate for ReactionEvent {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        if vb.argument_required_check(path, "Manifestations", &self.manifestations) {
            for (index, manifestation) in self.manifestations.iter().enumerate() {
                manifestation.validate_mandatory(&indexed_path(path, "Manifestations", index), vb);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::codes::GlobalStatement;

    fn penicillin() -> AdverseReaction {
        AdverseReaction::new(CodableText::original_text("Penicillin"))
            .with_manifestation(CodableText::original_text("Rash"))
    }

    #[test]
    fn test_reactions_and_exclusion_give_one_choice_message() {
        let section = AdverseReactions {
            reactions: vec![penicillin()],
            exclusion_statement: Some(ExclusionStatement::new(GlobalStatement::NoneKnown)),
            custom_narrative: None,
        };
        let mut vb = ValidationBuilder::new();
        section.validate("AdverseReactions", &mut vb);

        assert_eq!(vb.len(), 1);
        let m = &vb.messages()[0];
        assert!(m.field_name.contains("Reactions"));
        assert!(m.field_name.contains("ExclusionStatement"));
    }

    #[test]
    fn test_every_reaction_is_validated() {
        let section = AdverseReactions {
            reactions: vec![AdverseReaction::default(), penicillin(), AdverseReaction::default()],
            ..Default::default()
        };
        let mut vb = ValidationBuilder::new();
        section.validate("AR", &mut vb);

        let paths: Vec<_> = vb.messages().iter().map(|m| m.path.as_str()).collect();
        assert_eq!(paths, vec!["AR.Reactions[0]", "AR.Reactions[2]"]);
    }

    #[test]
    fn test_manifestation_must_be_described() {
        let reaction = AdverseReaction {
            substance_or_agent: Some(CodableText::original_text("Latex")),
            reaction_events: vec![ReactionEvent {
                manifestations: vec![CodableText::original_text("Hives"), CodableText::default()],
            }],
        };
        let mut vb = ValidationBuilder::new();
        reaction.validate("R", &mut vb);
        assert_eq!(vb.len(), 1);
        assert_eq!(vb.messages()[0].path, "R.ReactionEvents[0].Manifestations[1]");
    }
}
