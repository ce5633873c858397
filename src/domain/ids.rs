//! Identifier syntax and Australian healthcare identifiers
//!
//! CDA `id` roots must be either an ISO OID or a UUID. This module holds the
//! syntax checks used by [`Identifier`](crate::domain::common::Identifier)
//! validation and a newtype for national healthcare identifiers (IHI, HPI-I,
//! HPI-O), which are rendered as OID roots under the HI service arc.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static OID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-2](\.(0|[1-9][0-9]*))+$").expect("OID pattern compiles"));

/// Arc under which national healthcare identifiers are expressed as OIDs
pub const HEALTHCARE_IDENTIFIER_ARC: &str = "1.2.36.1.2001.1003.0";

/// Returns true when `value` is a syntactically valid ISO OID
pub fn is_valid_oid(value: &str) -> bool {
    OID_PATTERN.is_match(value)
}

/// Returns true when `value` is a hyphenated UUID
pub fn is_valid_uuid(value: &str) -> bool {
    value.len() == 36 && uuid::Uuid::parse_str(value).is_ok()
}

/// Returns true when `value` may be used as an identifier root
pub fn is_valid_identifier_root(value: &str) -> bool {
    is_valid_oid(value) || is_valid_uuid(value)
}

/// Kind of national healthcare identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthcareIdentifierKind {
    /// Individual Healthcare Identifier (subject of care)
    Ihi,
    /// Healthcare Provider Identifier - Individual
    HpiI,
    /// Healthcare Provider Identifier - Organisation
    HpiO,
}

impl HealthcareIdentifierKind {
    /// Six digit issuer prefix of the identifier number
    pub fn prefix(&self) -> &'static str {
        match self {
            HealthcareIdentifierKind::Ihi => "800360",
            HealthcareIdentifierKind::HpiI => "800361",
            HealthcareIdentifierKind::HpiO => "800362",
        }
    }

    /// Assigning authority name printed on the CDA identifier
    pub fn authority_name(&self) -> &'static str {
        match self {
            HealthcareIdentifierKind::Ihi => "IHI",
            HealthcareIdentifierKind::HpiI => "HPI-I",
            HealthcareIdentifierKind::HpiO => "HPI-O",
        }
    }

    fn from_number(number: &str) -> Option<Self> {
        [Self::Ihi, Self::HpiI, Self::HpiO]
            .into_iter()
            .find(|kind| number.starts_with(kind.prefix()))
    }
}

/// National healthcare identifier newtype wrapper
///
/// # Examples
///
/// ```
/// use pcehr_cda::domain::ids::{HealthcareIdentifier, HealthcareIdentifierKind};
///
/// let ihi = HealthcareIdentifier::new("8003608833357361").unwrap();
/// assert_eq!(ihi.kind(), HealthcareIdentifierKind::Ihi);
/// assert_eq!(ihi.to_oid(), "1.2.36.1.2001.1003.0.8003608833357361");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HealthcareIdentifier {
    number: String,
    kind: HealthcareIdentifierKind,
}

impl HealthcareIdentifier {
    /// Creates a new identifier from its 16 digit number
    ///
    /// Returns `Err` when the number is not 16 digits or carries an unknown
    /// issuer prefix.
    pub fn new(number: impl Into<String>) -> Result<Self, String> {
        let number = number.into();
        let number = number.trim().to_string();
        if number.len() != 16 || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!(
                "Healthcare identifier must be 16 digits, got: {number}"
            ));
        }
        let kind = HealthcareIdentifierKind::from_number(&number)
            .ok_or_else(|| format!("Unknown healthcare identifier prefix: {number}"))?;
        Ok(Self { number, kind })
    }

    /// Returns the identifier number as a string slice
    pub fn as_str(&self) -> &str {
        &self.number
    }

    /// Identifier kind derived from the issuer prefix
    pub fn kind(&self) -> HealthcareIdentifierKind {
        self.kind
    }

    /// The identifier expressed as an OID root
    pub fn to_oid(&self) -> String {
        format!("{HEALTHCARE_IDENTIFIER_ARC}.{}", self.number)
    }
}

impl fmt::Display for HealthcareIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number)
    }
}

impl FromStr for HealthcareIdentifier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for HealthcareIdentifier {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HealthcareIdentifier> for String {
    fn from(value: HealthcareIdentifier) -> Self {
        value.number
    }
}

impl AsRef<str> for HealthcareIdentifier {
    fn as_ref(&self) -> &str {
        &self.number
    }
}
