//! Coded concept with optional original text

use crate::core::validation::{Presence, Validate, ValidationBuilder};
use crate::domain::codes::{CodedValue, CodingSystem, NullFlavour};
use serde::{Deserialize, Serialize};

/// A coded clinical concept, or free text standing in for one
///
/// # Examples
///
/// ```
/// use pcehr_cda::domain::codes::CodingSystem;
/// use pcehr_cda::domain::common::CodableText;
///
/// let asthma = CodableText::new("195967001", CodingSystem::SnomedCtAu, "Asthma");
/// assert_eq!(asthma.code_system.as_deref(), Some("2.16.840.1.113883.6.96"));
///
/// let free_text = CodableText::original_text("Reaction to bee sting");
/// assert!(free_text.code.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodableText {
    pub code: Option<String>,
    pub display_name: Option<String>,
    /// Code system OID
    pub code_system: Option<String>,
    pub code_system_name: Option<String>,
    pub code_system_version: Option<String>,
    pub original_text: Option<String>,
    pub null_flavour: Option<NullFlavour>,
    pub translations: Vec<CodableText>,
}

impl CodableText {
    pub fn new(
        code: impl Into<String>,
        code_system: CodingSystem,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            code: Some(code.into()),
            display_name: Some(display_name.into()),
            code_system: Some(code_system.oid().to_string()),
            code_system_name: Some(code_system.name().to_string()),
            ..Self::default()
        }
    }

    /// Uncoded concept described only by text
    pub fn original_text(text: impl Into<String>) -> Self {
        Self {
            original_text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Concept taken from a static code table
    pub fn from_coded<C: CodedValue>(value: &C) -> Self {
        let d = value.descriptor();
        Self::new(d.code, d.code_system, d.display_name)
    }

    pub fn null(null_flavour: NullFlavour) -> Self {
        Self {
            null_flavour: Some(null_flavour),
            ..Self::default()
        }
    }

    pub fn with_original_text(mut self, text: impl Into<String>) -> Self {
        self.original_text = Some(text.into());
        self
    }

    pub fn with_translation(mut self, translation: CodableText) -> Self {
        self.translations.push(translation);
        self
    }

    /// The code system, when the OID is one this crate knows
    pub fn resolved_code_system(&self) -> Option<CodingSystem> {
        self.code_system.as_deref().and_then(CodingSystem::from_oid)
    }

    /// Best text for narrative rendering
    pub fn narrative_text(&self) -> String {
        self.original_text
            .as_deref()
            .or(self.display_name.as_deref())
            .or(self.code.as_deref())
            .map(str::to_string)
            .or_else(|| self.null_flavour.map(|nf| nf.display_name().to_string()))
            .unwrap_or_default()
    }

    /// Validation for fields that must also be described in words
    pub fn validate_mandatory(&self, path: &str, vb: &mut ValidationBuilder) {
        self.validate(path, vb);
        if self.null_flavour.is_none() {
            vb.condition_check(
                path,
                "DisplayName",
                self.display_name.is_present() || self.original_text.is_present(),
                "Either DisplayName or OriginalText must be provided",
            );
        }
    }
}

impl Presence for CodableText {
    fn is_present(&self) -> bool {
        self.code.is_present()
            || self.display_name.is_present()
            || self.original_text.is_present()
            || self.null_flavour.is_some()
    }
}

impl Validate for CodableText {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        if self.code.is_present()
            && vb.argument_required_check(path, "CodeSystem", &self.code_system)
            && self.resolved_code_system().is_none()
        {
            vb.add_validation_message(
                path,
                "CodeSystem",
                format!(
                    "CodeSystem '{}' is not a known code system",
                    self.code_system.as_deref().unwrap_or_default()
                ),
            );
        }

        if self.null_flavour.is_some() && self.code.is_present() {
            vb.add_validation_message(path, "NullFlavour", "NullFlavour cannot be combined with Code");
        }

        vb.validate_each(path, "Translations", &self.translations);
    }
}
