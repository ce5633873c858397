//! Consumer entered note

use crate::core::validation::{Presence, Validate, ValidationBuilder};
use crate::domain::common::StrucDocText;
use serde::{Deserialize, Serialize};

/// A note written by the patient themself
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsumerNote {
    pub title: Option<String>,
    pub description: Option<String>,
    pub custom_narrative: Option<StrucDocText>,
}

impl ConsumerNote {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            custom_narrative: None,
        }
    }
}

impl Presence for ConsumerNote {}

impl Validate for ConsumerNote {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.argument_required_check(path, "Title", &self.title);
        vb.argument_required_check(path, "Description", &self.description);
    }
}
