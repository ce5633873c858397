//! Validation message triplet

use super::builder::join_path;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One business-rule violation
///
/// `path` is the traversal route to the owning object (dotted, with `[n]`
/// for list elements) and `field_name` the offending field on that object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationMessage {
    pub path: String,
    pub field_name: String,
    pub message: String,
}

impl ValidationMessage {
    pub fn new(path: impl Into<String>, field_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            field_name: field_name.into(),
            message: message.into(),
        }
    }

    /// Full location of the field, `path.field_name`
    pub fn location(&self) -> String {
        join_path(&self.path, &self.field_name)
    }
}

impl fmt::Display for ValidationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_and_display() {
        let m = ValidationMessage::new("EReferral.AdverseReactions", "Reactions", "Reactions is required");
        assert_eq!(m.location(), "EReferral.AdverseReactions.Reactions");
        assert_eq!(
            m.to_string(),
            "EReferral.AdverseReactions.Reactions: Reactions is required"
        );
    }

    #[test]
    fn test_serializes_as_triplet() {
        let m = ValidationMessage::new("A", "B", "C");
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json, serde_json::json!({"path": "A", "field_name": "B", "message": "C"}));
    }
}
