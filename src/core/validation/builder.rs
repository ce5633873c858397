//! Validation context threaded through every `validate` call
//!
//! Checks never short-circuit: each failing check appends a message and
//! returns `false`, so the caller can skip the absent subtree while siblings
//! keep being validated.

use super::message::ValidationMessage;
use super::Validate;

/// Implemented by values that can be tested for "populated"
///
/// Types whose mere existence counts as populated use the default method.
pub trait Presence {
    fn is_present(&self) -> bool {
        true
    }
}

impl<T: Presence> Presence for Option<T> {
    fn is_present(&self) -> bool {
        self.as_ref().is_some_and(Presence::is_present)
    }
}

impl<T> Presence for Vec<T> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Presence for [T] {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for String {
    fn is_present(&self) -> bool {
        !self.trim().is_empty()
    }
}

impl Presence for str {
    fn is_present(&self) -> bool {
        !self.trim().is_empty()
    }
}

impl<T: Presence + ?Sized> Presence for &T {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

impl<T: Presence + ?Sized> Presence for Box<T> {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

impl Presence for bool {}
impl Presence for u32 {}
impl Presence for uuid::Uuid {}
impl Presence for rust_decimal::Decimal {}

/// Joins a traversal path and a field name with a dot
pub fn join_path(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{path}.{name}")
    }
}

/// Path of the `index`th element of list field `name`
pub fn indexed_path(path: &str, name: &str, index: usize) -> String {
    format!("{}[{index}]", join_path(path, name))
}

/// Collects validation messages for one document
#[derive(Debug, Default, Clone)]
pub struct ValidationBuilder {
    messages: Vec<ValidationMessage>,
}

impl ValidationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `"<name> is required"` when `value` is absent or empty
    ///
    /// Returns whether the value is present so callers can gate validation
    /// of the value's own children.
    pub fn argument_required_check<T: Presence + ?Sized>(
        &mut self,
        path: &str,
        name: &str,
        value: &T,
    ) -> bool {
        if value.is_present() {
            return true;
        }
        self.add_validation_message(path, name, format!("{name} is required"));
        false
    }

    /// Requires exactly one of the named fields to be populated
    ///
    /// Zero and several populated fields produce the same single message,
    /// whose field name lists every choice.
    pub fn choice_check(&mut self, path: &str, choices: &[(&str, bool)]) -> bool {
        let populated = choices.iter().filter(|(_, present)| *present).count();
        if populated == 1 {
            return true;
        }
        let names = choices
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(", ");
        self.add_validation_message(
            path,
            &names,
            format!("Exactly one of the following must be provided: {names}"),
        );
        false
    }

    /// Records a message when `condition` does not hold
    pub fn condition_check(
        &mut self,
        path: &str,
        name: &str,
        condition: bool,
        message: impl Into<String>,
    ) -> bool {
        if !condition {
            self.add_validation_message(path, name, message);
        }
        condition
    }

    pub fn add_validation_message(
        &mut self,
        path: &str,
        field_name: &str,
        message: impl Into<String>,
    ) {
        self.messages
            .push(ValidationMessage::new(path, field_name, message));
    }

    /// Validates every element of a list field with an indexed path
    pub fn validate_each<T: Validate>(&mut self, path: &str, name: &str, items: &[T]) {
        for (index, item) in items.iter().enumerate() {
            item.validate(&indexed_path(path, name, index), self);
        }
    }

    /// Validates an optional child only when it is present
    pub fn validate_optional<T: Validate>(&mut self, path: &str, name: &str, item: Option<&T>) {
        if let Some(item) = item {
            item.validate(&join_path(path, name), self);
        }
    }

    /// Requires a child and validates it when present
    pub fn validate_required<T: Validate + Presence>(
        &mut self,
        path: &str,
        name: &str,
        item: Option<&T>,
    ) -> bool {
        match item {
            Some(item) if item.is_present() => {
                item.validate(&join_path(path, name), self);
                true
            }
            _ => {
                self.add_validation_message(path, name, format!("{name} is required"));
                false
            }
        }
    }

    pub fn messages(&self) -> &[ValidationMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn into_messages(self) -> Vec<ValidationMessage> {
        self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(Option<String>);

    impl Presence for Named {}

    impl Validate for Named {
        fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
            vb.argument_required_check(path, "Name", &self.0);
        }
    }

    #[test]
    fn test_required_check_message_text() {
        let mut vb = ValidationBuilder::new();
        assert!(!vb.argument_required_check("Doc.Author", "Name", &None::<String>));
        assert!(vb.argument_required_check("Doc.Author", "Name", &Some("Dr Who".to_string())));

        let m = &vb.messages()[0];
        assert_eq!(m.path, "Doc.Author");
        assert_eq!(m.field_name, "Name");
        assert_eq!(m.message, "Name is required");
        assert_eq!(vb.len(), 1);
    }

    #[test]
    fn test_blank_strings_and_empty_lists_are_absent() {
        let mut vb = ValidationBuilder::new();
        assert!(!vb.argument_required_check("", "Text", &Some("   ".to_string())));
        assert!(!vb.argument_required_check("", "Items", &Vec::<u32>::new()));
        assert!(!vb.argument_required_check("", "Items", &Some(Vec::<u32>::new())));
        assert_eq!(vb.len(), 3);
    }

    #[test]
    fn test_choice_check_none_and_both_give_identical_single_message() {
        let mut neither = ValidationBuilder::new();
        neither.choice_check("Section", &[("Reactions", false), ("ExclusionStatement", false)]);
        let mut both = ValidationBuilder::new();
        both.choice_check("Section", &[("Reactions", true), ("ExclusionStatement", true)]);

        assert_eq!(neither.len(), 1);
        assert_eq!(neither.messages(), both.messages());
        let m = &neither.messages()[0];
        assert_eq!(m.field_name, "Reactions, ExclusionStatement");
        assert!(m.message.contains("Reactions"));
        assert!(m.message.contains("ExclusionStatement"));
    }

    #[test]
    fn test_choice_check_exactly_one() {
        let mut vb = ValidationBuilder::new();
        assert!(vb.choice_check("S", &[("A", false), ("B", true), ("C", false)]));
        assert!(vb.is_empty());
    }

    #[test]
    fn test_validate_each_visits_every_element() {
        let items = vec![
            Named(None),
            Named(Some("ok".to_string())),
            Named(None),
        ];
        let mut vb = ValidationBuilder::new();
        vb.validate_each("Doc", "People", &items);

        let paths: Vec<_> = vb.messages().iter().map(|m| m.path.as_str()).collect();
        assert_eq!(paths, vec!["Doc.People[0]", "Doc.People[2]"]);
    }

    #[test]
    fn test_validate_required_and_optional() {
        let mut vb = ValidationBuilder::new();
        assert!(!vb.validate_required::<Named>("Doc", "Owner", None));
        vb.validate_optional::<Named>("Doc", "Deputy", None);
        vb.validate_optional("Doc", "Deputy", Some(&Named(None)));

        let rendered: Vec<_> = vb.messages().iter().map(|m| m.to_string()).collect();
        assert_eq!(
            rendered,
            vec!["Doc.Owner: Owner is required", "Doc.Deputy.Name: Name is required"]
        );
    }

    #[test]
    fn test_path_helpers() {
        assert_eq!(join_path("", "Root"), "Root");
        assert_eq!(join_path("A.B", "C"), "A.B.C");
        assert_eq!(indexed_path("A", "Items", 3), "A.Items[3]");
    }
}
