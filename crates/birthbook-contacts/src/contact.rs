//! A single contact and the values derived from it.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use birthbook_dates::{DateFormat, DateFormatPattern, DateFormatter, Locale, ordinal, today};
use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::birthday::BirthdayComponents;
use crate::error::ContactResult;
use crate::name::{NameFormatter, NameParts, NameStyle, WesternNameFormatter};

/// Longest look-ahead honoured by upcoming-birthday checks (eight years).
///
/// Long enough to reach a 29 February across a skipped century leap year.
pub const MAX_LOOKAHEAD_DAYS: u32 = 2922;

/// Flat contact record handed over by an upstream source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    /// Opaque, stable identifier assigned upstream.
    pub identifier: String,
    #[serde(default)]
    pub name: NameParts,
    #[serde(default)]
    pub birthday: Option<BirthdayComponents>,
    /// Email addresses in upstream order.
    #[serde(default)]
    pub emails: Vec<String>,
    /// Phone numbers in upstream order.
    #[serde(default)]
    pub phones: Vec<String>,
}

impl ContactRecord {
    #[must_use]
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: NameParts) -> Self {
        self.name = name;
        self
    }

    #[must_use]
    pub fn with_birthday(mut self, birthday: BirthdayComponents) -> Self {
        self.birthday = Some(birthday);
        self
    }

    #[must_use]
    pub fn with_emails<I, S>(mut self, emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.emails = emails.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_phones<I, S>(mut self, phones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.phones = phones.into_iter().map(Into::into).collect();
        self
    }
}

/// Read-only view over one [`ContactRecord`].
///
/// Two contacts are equal, hash alike and order by their identifier only. A
/// newer record for the same person compares equal to the stale one; the
/// contact book's refresh lookups rely on this.
#[derive(Debug, Clone)]
pub struct Contact {
    details: ContactRecord,
}

impl Contact {
    #[must_use]
    pub fn new(details: ContactRecord) -> Self {
        Self { details }
    }

    /// ## Summary
    /// Builds a contact from a JSON-encoded [`ContactRecord`].
    ///
    /// ## Errors
    /// Returns an error if the JSON does not describe a record.
    pub fn from_json(json: &str) -> ContactResult<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.details.identifier
    }

    #[must_use]
    pub fn details(&self) -> &ContactRecord {
        &self.details
    }

    /// Full name in `style`, or `""` when there is nothing to render.
    #[must_use]
    pub fn full_name(&self, style: NameStyle) -> String {
        self.full_name_with(&WesternNameFormatter, style)
    }

    #[must_use]
    pub fn full_name_with(&self, formatter: &impl NameFormatter, style: NameStyle) -> String {
        formatter
            .format(&self.details.name, style)
            .unwrap_or_default()
    }

    /// ## Summary
    /// The birthday as a date, projected onto this year when `current_year` is set.
    ///
    /// Without projection the real birth year is used when known. `None` when
    /// month or day is missing.
    #[must_use]
    pub fn birthday(&self, current_year: bool) -> Option<NaiveDate> {
        if current_year {
            self.birthday_in_year(today().year())
        } else {
            self.details.birthday?.date()
        }
    }

    /// The birthday projected onto `year`.
    #[must_use]
    pub fn birthday_in_year(&self, year: i32) -> Option<NaiveDate> {
        self.details.birthday?.in_year(year)
    }

    /// Formats [`Contact::birthday`] in the process locale; `""` when absent.
    #[must_use]
    pub fn formatted_birthday(
        &self,
        date_format: impl Into<DateFormat>,
        current_year: bool,
    ) -> String {
        self.formatted_birthday_in(date_format, current_year, &Locale::current())
    }

    #[must_use]
    pub fn formatted_birthday_in(
        &self,
        date_format: impl Into<DateFormat>,
        current_year: bool,
        locale: &Locale,
    ) -> String {
        let Some(date) = self.birthday(current_year) else {
            return String::new();
        };
        DateFormatter::new(date_format, locale.clone()).format_date(date)
    }

    #[must_use]
    pub fn first_email_address(&self) -> &str {
        self.details.emails.first().map_or("", String::as_str)
    }

    #[must_use]
    pub fn first_phone_number(&self) -> &str {
        self.details.phones.first().map_or("", String::as_str)
    }

    #[must_use]
    pub fn is_birthday_today(&self) -> bool {
        self.birthday_matches(today())
    }

    /// Whether the birthday falls on the day and month of `date`.
    #[must_use]
    pub fn birthday_matches(&self, date: NaiveDate) -> bool {
        let Some(birthday) = self.birthday(false) else {
            return false;
        };
        let formatter = DateFormatter::new(DateFormatPattern::DayAndMonth, Locale::current());
        formatter.format_date(birthday) == formatter.format_date(date)
    }

    /// Whether the birthday falls within the next `within_days` days, today excluded.
    #[must_use]
    pub fn is_birthday_coming(&self, within_days: u32) -> bool {
        self.is_birthday_coming_from(within_days, today())
    }

    /// ## Summary
    /// Whether the birthday's month and day match any of
    /// `starting + 1 ..= starting + within_days`.
    ///
    /// The window is walked on the real calendar, so it crosses year ends and
    /// only holds 29 February when a leap day is actually in it.
    #[must_use]
    pub fn is_birthday_coming_from(&self, within_days: u32, starting: NaiveDate) -> bool {
        self.month_day().is_some_and(|month_day| {
            upcoming_month_days(starting, within_days).contains(&month_day)
        })
    }

    /// Days from `starting` to the next occurrence of the birthday, looking
    /// ahead at most `within_days` days. `starting` itself never counts.
    #[must_use]
    pub fn days_until_birthday_from(&self, starting: NaiveDate, within_days: u32) -> Option<u32> {
        let (month, day) = self.month_day()?;
        upcoming_dates(starting, within_days)
            .find(|(_, date)| date.month() == month && date.day() == day)
            .map(|(offset, _)| offset)
    }

    /// Age in whole years today; `None` unless the birth year is known.
    #[must_use]
    pub fn age(&self, at_next_birthday: bool) -> Option<u32> {
        self.age_on(today(), at_next_birthday)
    }

    /// ## Summary
    /// Age in whole years on `on`, plus one when `at_next_birthday` is set.
    ///
    /// A birth date after `on` counts as age zero.
    #[must_use]
    pub fn age_on(&self, on: NaiveDate, at_next_birthday: bool) -> Option<u32> {
        let components = self.details.birthday?;
        components.year?;
        let born = components.date()?;

        let age = on.years_since(born).unwrap_or_else(|| {
            tracing::debug!(contact = %self.id(), %born, %on, "Birth date is in the future");
            0
        });
        Some(if at_next_birthday { age + 1 } else { age })
    }

    /// Age as a plain or ordinal string; `""` when the age is unknown.
    #[must_use]
    pub fn age_as_string(&self, at_next_birthday: bool, as_ordinal: bool) -> String {
        self.age_as_string_on(today(), at_next_birthday, as_ordinal, &Locale::current())
    }

    #[must_use]
    pub fn age_as_string_on(
        &self,
        on: NaiveDate,
        at_next_birthday: bool,
        as_ordinal: bool,
        locale: &Locale,
    ) -> String {
        match self.age_on(on, at_next_birthday) {
            None => String::new(),
            Some(age) if as_ordinal => ordinal(i64::from(age), locale),
            Some(age) => age.to_string(),
        }
    }

    /// Current age as an ordinal, e.g. "29th".
    #[must_use]
    pub fn age_as_ordinal(&self) -> String {
        self.age_as_string(false, true)
    }

    /// Age the contact turns on their next birthday.
    #[must_use]
    pub fn age_at_next_birthday(&self) -> Option<u32> {
        self.age(true)
    }

    fn month_day(&self) -> Option<(u32, u32)> {
        self.details.birthday?.month_day()
    }
}

/// `(month, day)` of every date in `starting + 1 ..= starting + within_days`.
#[must_use]
pub fn upcoming_month_days(starting: NaiveDate, within_days: u32) -> HashSet<(u32, u32)> {
    upcoming_dates(starting, within_days)
        .map(|(_, date)| (date.month(), date.day()))
        .collect()
}

/// Each date after `starting` in the window, with its offset in days.
fn upcoming_dates(starting: NaiveDate, within_days: u32) -> impl Iterator<Item = (u32, NaiveDate)> {
    (1..=within_days.min(MAX_LOOKAHEAD_DAYS)).filter_map(move |offset| {
        starting
            .checked_add_days(Days::new(u64::from(offset)))
            .map(|date| (offset, date))
    })
}

impl From<ContactRecord> for Contact {
    fn from(details: ContactRecord) -> Self {
        Self::new(details)
    }
}

impl PartialEq for Contact {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Contact {}

impl Hash for Contact {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl PartialOrd for Contact {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Contact {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id().cmp(other.id())
    }
}
