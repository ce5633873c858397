//! Exclusion statements

use crate::core::validation::{Presence, Validate, ValidationBuilder};
use crate::domain::codes::GlobalStatement;
use serde::{Deserialize, Serialize};

/// Recorded instead of a list when no items apply ("None known", ...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExclusionStatement {
    pub global_statement: Option<GlobalStatement>,
}

impl ExclusionStatement {
    pub fn new(global_statement: GlobalStatement) -> Self {
        Self {
            global_statement: Some(global_statement),
        }
    }
}

impl Presence for ExclusionStatement {}

impl Validate for ExclusionStatement {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.argument_required_check(path, "GlobalStatement", &self.global_statement);
    }
}

/// Validates a "list or exclusion statement" pair
///
/// Exactly one of the non-empty list and the statement must be supplied;
/// whichever is present is then validated.
pub fn validate_list_or_exclusion<T: Validate>(
    path: &str,
    list_name: &str,
    list: &[T],
    exclusion: Option<&ExclusionStatement>,
    vb: &mut ValidationBuilder,
) {
    if vb.choice_check(
        path,
        &[
            (list_name, list.is_present()),
            ("ExclusionStatement", exclusion.is_some()),
        ],
    ) {
        vb.validate_each(path, list_name, list);
        vb.validate_optional(path, "ExclusionStatement", exclusion);
    }
}
