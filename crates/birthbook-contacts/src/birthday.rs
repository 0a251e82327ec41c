//! Partial birthday data and its projection onto calendar years.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{ContactError, ContactResult};

/// Year used for birthdays that carry no year of their own. A leap year, so
/// that 29 February stays representable.
pub const YEARLESS_REFERENCE_YEAR: i32 = 2000;

/// Birthday as supplied upstream: month and day, optionally a year.
///
/// Either of month or day may be missing in upstream data; such a birthday
/// never resolves to a date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BirthdayComponents {
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub year: Option<i32>,
}

impl BirthdayComponents {
    /// A recurring birthday without a year.
    #[must_use]
    pub fn new(month: u32, day: u32) -> Self {
        Self {
            month: Some(month),
            day: Some(day),
            year: None,
        }
    }

    /// A full birth date.
    #[must_use]
    pub fn with_year(year: i32, month: u32, day: u32) -> Self {
        Self {
            month: Some(month),
            day: Some(day),
            year: Some(year),
        }
    }

    /// `(month, day)` when both are present.
    #[must_use]
    pub fn month_day(&self) -> Option<(u32, u32)> {
        Some((self.month?, self.day?))
    }

    /// ## Summary
    /// Places the birthday in `year`.
    ///
    /// Resolution is calendar-lenient: a day past the end of its month rolls
    /// into the next month, so 29 February in a common year becomes 1 March.
    /// Returns `None` when month or day is missing or out of range.
    #[must_use]
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        let (month, day) = self.month_day()?;
        if !(1..=31).contains(&day) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, 1)?.checked_add_days(Days::new(u64::from(day - 1)))
    }

    /// The birth date itself: the real year when known, otherwise
    /// [`YEARLESS_REFERENCE_YEAR`].
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        self.in_year(self.year.unwrap_or(YEARLESS_REFERENCE_YEAR))
    }

    /// ## Summary
    /// Parses a vCard `BDAY` date value.
    ///
    /// Accepts `YYYY-MM-DD`, `YYYYMMDD`, `--MM-DD` and `--MMDD`. A trailing time
    /// component (`T...`) is ignored.
    ///
    /// ## Errors
    /// Returns `ContactError::InvalidBirthday` for any other shape or for a
    /// month/day combination that never occurs.
    pub fn parse(value: &str) -> ContactResult<Self> {
        let s = value.trim();
        let date_part = s.split_once('T').map_or(s, |(date, _)| date);

        let components = if let Some(rest) = date_part.strip_prefix("--") {
            let (month, day) = match rest.split_once('-') {
                Some((month, day)) => (month, day),
                None if rest.len() == 4 && rest.is_char_boundary(2) => rest.split_at(2),
                None => return Err(invalid(value, "expected --MM-DD or --MMDD")),
            };
            Self::new(number(month, value, "month")?, number(day, value, "day")?)
        } else {
            let parts: Vec<&str> = date_part.split('-').collect();
            match parts.as_slice() {
                [year, month, day] => Self::with_year(
                    number(year, value, "year")?,
                    number(month, value, "month")?,
                    number(day, value, "day")?,
                ),
                [basic] if basic.len() == 8 && basic.is_ascii() => Self::with_year(
                    number(&basic[..4], value, "year")?,
                    number(&basic[4..6], value, "month")?,
                    number(&basic[6..], value, "day")?,
                ),
                _ => return Err(invalid(value, "unrecognised date form")),
            }
        };

        // Validate against a leap year unless the real year is known.
        let check_year = components.year.unwrap_or(YEARLESS_REFERENCE_YEAR);
        let (month, day) = components
            .month_day()
            .ok_or_else(|| invalid(value, "missing month or day"))?;
        if NaiveDate::from_ymd_opt(check_year, month, day).is_none() {
            return Err(invalid(value, "no such date"));
        }

        Ok(components)
    }
}

impl From<NaiveDate> for BirthdayComponents {
    fn from(date: NaiveDate) -> Self {
        Self::with_year(date.year(), date.month(), date.day())
    }
}

fn number<T>(text: &str, value: &str, field: &str) -> ContactResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    text.parse()
        .map_err(|e| invalid(value, &format!("invalid {field}: {e}")))
}

fn invalid(value: &str, reason: &str) -> ContactError {
    ContactError::InvalidBirthday(format!("{value:?}: {reason}"))
}
