//! Point-in-time values and intervals

use super::quantity::Quantity;
use crate::core::validation::{Presence, Validate, ValidationBuilder};
use crate::domain::codes::{CodedValue, NullFlavour};
use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How much of a timestamp is meaningful
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatePrecision {
    Year,
    Month,
    Day,
    Minute,
    #[default]
    Second,
}

/// A timestamp rendered as an HL7 `TS` value at its precision
///
/// # Examples
///
/// ```
/// use pcehr_cda::domain::common::{DatePrecision, IsoDateTime};
///
/// let dob = IsoDateTime::date(1968, 2, 29).unwrap();
/// assert_eq!(dob.to_cda_string(), "19680229");
///
/// let at = IsoDateTime::parse("2024-03-01T09:30:00+10:00").unwrap();
/// assert_eq!(at.to_cda_string(), "20240301093000+1000");
/// assert_eq!(at.with_precision(DatePrecision::Month).to_cda_string(), "202403");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IsoDateTime {
    pub value: DateTime<FixedOffset>,
    #[serde(default)]
    pub precision: DatePrecision,
}

impl IsoDateTime {
    pub fn new(value: DateTime<FixedOffset>) -> Self {
        Self {
            value,
            precision: DatePrecision::Second,
        }
    }

    /// A calendar date with day precision
    pub fn date(year: i32, month: u32, day: u32) -> Option<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        let midnight = date.and_hms_opt(0, 0, 0)?;
        let utc = FixedOffset::east_opt(0)?;
        let value = utc.from_local_datetime(&midnight).single()?;
        Some(Self {
            value,
            precision: DatePrecision::Day,
        })
    }

    /// Parses an RFC 3339 timestamp at second precision
    pub fn parse(value: &str) -> Result<Self, String> {
        DateTime::parse_from_rfc3339(value)
            .map(Self::new)
            .map_err(|e| format!("Invalid timestamp '{value}': {e}"))
    }

    pub fn with_precision(mut self, precision: DatePrecision) -> Self {
        self.precision = precision;
        self
    }

    /// HL7 `TS` literal
    pub fn to_cda_string(&self) -> String {
        let pattern = match self.precision {
            DatePrecision::Year => "%Y",
            DatePrecision::Month => "%Y%m",
            DatePrecision::Day => "%Y%m%d",
            DatePrecision::Minute => "%Y%m%d%H%M%z",
            DatePrecision::Second => "%Y%m%d%H%M%S%z",
        };
        self.value.format(pattern).to_string()
    }

    /// Human-readable form used in narrative
    pub fn to_display_string(&self) -> String {
        let pattern = match self.precision {
            DatePrecision::Year => "%Y",
            DatePrecision::Month => "%b %Y",
            DatePrecision::Day => "%d %b %Y",
            DatePrecision::Minute | DatePrecision::Second => "%d %b %Y %H:%M",
        };
        self.value.format(pattern).to_string()
    }
}

impl fmt::Display for IsoDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

impl Presence for IsoDateTime {}

/// An `IVL_TS` time range
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CdaInterval {
    pub low: Option<IsoDateTime>,
    pub high: Option<IsoDateTime>,
    pub width: Option<Quantity>,
    pub null_flavour: Option<NullFlavour>,
}

impl CdaInterval {
    pub fn low(low: IsoDateTime) -> Self {
        Self {
            low: Some(low),
            ..Self::default()
        }
    }

    pub fn high(high: IsoDateTime) -> Self {
        Self {
            high: Some(high),
            ..Self::default()
        }
    }

    pub fn low_high(low: IsoDateTime, high: IsoDateTime) -> Self {
        Self {
            low: Some(low),
            high: Some(high),
            ..Self::default()
        }
    }

    pub fn width(width: Quantity) -> Self {
        Self {
            width: Some(width),
            ..Self::default()
        }
    }

    pub fn null(null_flavour: NullFlavour) -> Self {
        Self {
            null_flavour: Some(null_flavour),
            ..Self::default()
        }
    }

    /// Narrative form, e.g. "01 Mar 2024 - 05 Mar 2024"
    pub fn to_display_string(&self) -> String {
        if let Some(nf) = self.null_flavour {
            return nf.display_name().to_string();
        }
        match (&self.low, &self.high, &self.width) {
            (Some(low), Some(high), _) => format!("{low} - {high}"),
            (Some(low), None, _) => format!("From {low}"),
            (None, Some(high), _) => format!("Until {high}"),
            (None, None, Some(width)) => width.to_display_string(),
            (None, None, None) => String::new(),
        }
    }
}

impl Presence for CdaInterval {
    fn is_present(&self) -> bool {
        self.low.is_some()
            || self.high.is_some()
            || self.width.is_some()
            || self.null_flavour.is_some()
    }
}

impl Validate for CdaInterval {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        if self.null_flavour.is_some() {
            return;
        }
        vb.condition_check(
            path,
            "Low",
            self.low.is_some() || self.high.is_some() || self.width.is_some(),
            "At least one of Low, High or Width must be provided",
        );
        if let (Some(low), Some(high)) = (&self.low, &self.high) {
            vb.condition_check(path, "High", low.value <= high.value, "High must not be before Low");
        }
        vb.validate_optional(path, "Width", self.width.as_ref());
    }
}
