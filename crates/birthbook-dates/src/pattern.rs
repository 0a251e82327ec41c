//! Named date patterns and the custom-pattern escape hatch.

use birthbook_core::constants::{
    DAY_AND_FULL_MONTH_FORMAT, DAY_AND_MONTH_FORMAT, FULL_DATE_FORMAT, FULL_MONTH_FORMAT,
    HOUR_AND_MINUTE_FORMAT, TIMESTAMP_FORMAT,
};
use serde::{Deserialize, Serialize};

/// Fixed catalogue of date patterns.
///
/// Serialized as the underlying pattern string, so `FullDate` round-trips
/// through JSON as `"yyyy-MM-dd"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateFormatPattern {
    /// `HH:mm`
    #[serde(rename = "HH:mm")]
    HourAndMinute,
    /// `d MMM`
    #[serde(rename = "d MMM")]
    DayAndMonth,
    /// `yyyy-MM-dd`
    #[serde(rename = "yyyy-MM-dd")]
    FullDate,
    /// `yyyy-MM-dd HH:mm`
    #[serde(rename = "yyyy-MM-dd HH:mm")]
    Timestamp,
    /// `d MMMM`
    #[serde(rename = "d MMMM")]
    DayAndFullMonth,
    /// `MMMM`
    #[serde(rename = "MMMM")]
    FullMonth,
}

impl DateFormatPattern {
    pub const ALL: [Self; 6] = [
        Self::HourAndMinute,
        Self::DayAndMonth,
        Self::FullDate,
        Self::Timestamp,
        Self::DayAndFullMonth,
        Self::FullMonth,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HourAndMinute => HOUR_AND_MINUTE_FORMAT,
            Self::DayAndMonth => DAY_AND_MONTH_FORMAT,
            Self::FullDate => FULL_DATE_FORMAT,
            Self::Timestamp => TIMESTAMP_FORMAT,
            Self::DayAndFullMonth => DAY_AND_FULL_MONTH_FORMAT,
            Self::FullMonth => FULL_MONTH_FORMAT,
        }
    }

    /// Looks up the named pattern whose format string is exactly `pattern`.
    #[must_use]
    pub fn from_pattern(pattern: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|named| named.as_str() == pattern)
    }
}

impl std::fmt::Display for DateFormatPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A date format: one of the named patterns or an arbitrary pattern string.
///
/// Custom strings are kept verbatim; whether they compile is only discovered
/// when a [`crate::DateFormatter`] is built from them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DateFormat {
    Named(DateFormatPattern),
    Custom(String),
}

impl DateFormat {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Named(named) => named.as_str(),
            Self::Custom(pattern) => pattern,
        }
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self::Named(DateFormatPattern::FullDate)
    }
}

impl From<DateFormatPattern> for DateFormat {
    fn from(value: DateFormatPattern) -> Self {
        Self::Named(value)
    }
}

impl From<&str> for DateFormat {
    fn from(value: &str) -> Self {
        DateFormatPattern::from_pattern(value)
            .map_or_else(|| Self::Custom(value.to_string()), Self::Named)
    }
}

impl From<String> for DateFormat {
    fn from(value: String) -> Self {
        match DateFormatPattern::from_pattern(&value) {
            Some(named) => Self::Named(named),
            None => Self::Custom(value),
        }
    }
}

impl std::fmt::Display for DateFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
