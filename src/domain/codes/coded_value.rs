//! Static code tables for enumerations
//!
//! Each coded enumeration carries its (code, display name, code system)
//! triple in a `match` generated by [`coded_enum!`]. Lookups never depend on
//! declaration order or runtime metadata.

use super::code_system::CodingSystem;
use serde::Serialize;

/// A fixed code triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CodeDescriptor {
    pub code: &'static str,
    pub display_name: &'static str,
    pub code_system: CodingSystem,
}

impl CodeDescriptor {
    pub const fn new(code: &'static str, display_name: &'static str, code_system: CodingSystem) -> Self {
        Self {
            code,
            display_name,
            code_system,
        }
    }
}

/// Implemented by every enumeration that renders as a coded element
pub trait CodedValue: Copy {
    fn descriptor(&self) -> CodeDescriptor;

    fn code(&self) -> &'static str {
        self.descriptor().code
    }

    fn display_name(&self) -> &'static str {
        self.descriptor().display_name
    }

    fn code_system(&self) -> CodingSystem {
        self.descriptor().code_system
    }
}

impl CodedValue for CodeDescriptor {
    fn descriptor(&self) -> CodeDescriptor {
        *self
    }
}

/// Declares an enumeration together with its static code table
///
/// ```
/// use pcehr_cda::coded_enum;
/// use pcehr_cda::domain::codes::{CodedValue, CodingSystem};
///
/// coded_enum! {
///     /// Document status
///     pub enum Status [CodingSystem::NctisDocumentStatus] {
///         Final => ("F", "Final"),
///         Interim => ("I", "Interim"),
///     }
/// }
///
/// assert_eq!(Status::Interim.code(), "I");
/// assert_eq!(Status::from_code("F"), Some(Status::Final));
/// ```
#[macro_export]
macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident [$system:expr] {
            $( $(#[$vmeta:meta])* $variant:ident => ($code:literal, $display:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// Looks up a value by its code
            pub fn from_code(code: &str) -> Option<Self> {
                use $crate::domain::codes::CodedValue;
                Self::ALL.iter().copied().find(|value| value.code() == code)
            }
        }

        impl $crate::domain::codes::CodedValue for $name {
            fn descriptor(&self) -> $crate::domain::codes::CodeDescriptor {
                match self {
                    $( $name::$variant => $crate::domain::codes::CodeDescriptor::new($code, $display, $system) ),+
                }
            }
        }

        impl $crate::core::validation::Presence for $name {}

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                use $crate::domain::codes::CodedValue;
                f.write_str(self.display_name())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    coded_enum! {
        pub enum Sample [CodingSystem::Loinc] {
            First => ("1-1", "First"),
            Second => ("2-2", "Second"),
        }
    }

    #[test]
    fn test_descriptor_is_table_driven() {
        let d = Sample::Second.descriptor();
        assert_eq!(d, CodeDescriptor::new("2-2", "Second", CodingSystem::Loinc));
        assert_eq!(Sample::Second.to_string(), "Second");
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Sample::from_code("1-1"), Some(Sample::First));
        assert_eq!(Sample::from_code("3-3"), None);
        assert_eq!(Sample::ALL.len(), 2);
    }

    #[test]
    fn test_serde_uses_snake_case_names() {
        assert_eq!(serde_json::to_string(&Sample::First).unwrap(), "\"first\"");
    }
}
