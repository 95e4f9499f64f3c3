//! Day-granularity grouping key for frozen dates.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use freezo_core::AppError;

/// Key used for records without a usable frozen date.
pub const NO_DATE: &str = "No Date";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The date portion of a record's `frozen_date`, or [`NO_DATE`].
///
/// Ordering is plain ordinal string comparison, so `"No Date"` lands
/// wherever its literal value falls relative to `YYYY-MM-DD` keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(String);

impl DateKey {
    /// Derive the key from a stored `frozen_date`.
    ///
    /// Anything after the date/time separator (`T` or a space) is dropped,
    /// so a timestamp and a plain date on the same calendar day share a key.
    /// Missing or unparseable values map to [`NO_DATE`].
    pub fn from_frozen_date(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.split(['T', ' ']).next())
            .and_then(|day| NaiveDate::parse_from_str(day, DATE_FORMAT).ok())
            .map(Self::from_date)
            .unwrap_or_else(Self::no_date)
    }

    /// Key for a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format(DATE_FORMAT).to_string())
    }

    /// The "No Date" key.
    pub fn no_date() -> Self {
        Self(NO_DATE.to_string())
    }

    /// Whether this key carries an actual date.
    pub fn is_dated(&self) -> bool {
        self.0 != NO_DATE
    }

    /// The calendar date, when present.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, DATE_FORMAT).ok()
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DateKey {
    type Err = AppError;

    /// Accepts `"No Date"` (case-insensitive), a plain date, or a timestamp.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(NO_DATE) {
            return Ok(Self::no_date());
        }
        let key = Self::from_frozen_date(Some(s));
        if key.is_dated() {
            Ok(key)
        } else {
            Err(AppError::validation(format!(
                "Invalid date '{s}'. Expected YYYY-MM-DD or '{NO_DATE}'"
            )))
        }
    }
}
