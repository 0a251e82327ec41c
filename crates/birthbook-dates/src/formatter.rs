//! The date formatting service.

use std::fmt::Write as _;

use chrono::format::{Fixed, Item, Parsed, parse_and_remainder};
use chrono::{Local, NaiveDate, NaiveDateTime};

use crate::compile::{CompiledPattern, Fields, compile};
use crate::error::DateResult;
use crate::locale::Locale;
use crate::names::NameTables;
use crate::pattern::DateFormat;

/// Year assumed when parsing a pattern that carries no year field.
const PARSE_DEFAULT_YEAR: i64 = 2000;

/// A compiled, immutable date formatter.
///
/// Built from a [`DateFormat`] and a [`Locale`]. Construction never fails: a
/// pattern that does not compile produces a formatter that renders `""` and
/// parses nothing. Use [`DateFormatter::try_new`] to surface the error instead.
#[derive(Debug, Clone)]
pub struct DateFormatter {
    date_format: DateFormat,
    locale: Locale,
    compiled: Option<CompiledPattern>,
    names: NameTables,
}

impl DateFormatter {
    #[must_use]
    pub fn new(date_format: impl Into<DateFormat>, locale: Locale) -> Self {
        let date_format = date_format.into();
        let compiled = match compile(date_format.as_str()) {
            Ok(compiled) => Some(compiled),
            Err(e) => {
                tracing::debug!(
                    pattern = %date_format,
                    error = %e,
                    "Date pattern does not compile"
                );
                None
            }
        };
        let names = name_tables(compiled.as_ref(), &locale);
        Self {
            date_format,
            locale,
            compiled,
            names,
        }
    }

    /// ## Summary
    /// Strict constructor for callers that want to validate a custom pattern.
    ///
    /// ## Errors
    /// Returns the compilation error for unsupported or malformed patterns.
    pub fn try_new(date_format: impl Into<DateFormat>, locale: Locale) -> DateResult<Self> {
        let date_format = date_format.into();
        let compiled = compile(date_format.as_str())?;
        let names = name_tables(Some(&compiled), &locale);
        Ok(Self {
            date_format,
            locale,
            compiled: Some(compiled),
            names,
        })
    }

    #[must_use]
    pub fn date_format(&self) -> &DateFormat {
        &self.date_format
    }

    #[must_use]
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Whether the pattern compiled.
    #[must_use]
    pub fn is_supported(&self) -> bool {
        self.compiled.is_some()
    }

    /// Renders `date`; `""` when the pattern is unsupported.
    #[must_use]
    pub fn format(&self, date: &NaiveDateTime) -> String {
        let Some(compiled) = &self.compiled else {
            return String::new();
        };

        let rendered = date
            .and_utc()
            .format_localized_with_items(compiled.items.iter(), self.locale.chrono());

        let mut out = String::new();
        if let Err(e) = write!(out, "{rendered}") {
            tracing::debug!(pattern = %self.date_format, error = %e, "Date rendering failed");
            return String::new();
        }
        out
    }

    /// Renders a calendar date at midnight.
    #[must_use]
    pub fn format_date(&self, date: NaiveDate) -> String {
        date.and_hms_opt(0, 0, 0)
            .map(|midnight| self.format(&midnight))
            .unwrap_or_default()
    }

    /// ## Summary
    /// Parses `input` back into a date-time, or `None` when it does not match.
    ///
    /// Fields the pattern does not carry default to year 2000, January, day 1
    /// and midnight. Month and weekday names are matched in the formatter's
    /// locale or in English, ignoring case. A weekday is only checked when the
    /// pattern also carries year, month and day.
    #[must_use]
    pub fn parse(&self, input: &str) -> Option<NaiveDateTime> {
        let compiled = self.compiled.as_ref()?;

        let mut parsed = Parsed::new();
        let mut rest = input.trim();
        for item in &compiled.items {
            let Some(remainder) = self.parse_item(&mut parsed, rest, item, compiled.fields) else {
                tracing::trace!(
                    input,
                    pattern = %self.date_format,
                    at = rest,
                    "Input does not match pattern"
                );
                return None;
            };
            rest = remainder;
        }
        if !rest.is_empty() {
            tracing::trace!(input, pattern = %self.date_format, trailing = rest, "Trailing input");
            return None;
        }

        resolve(&mut parsed, compiled.fields)
    }

    fn parse_item<'a>(
        &self,
        parsed: &mut Parsed,
        input: &'a str,
        item: &Item<'static>,
        fields: Fields,
    ) -> Option<&'a str> {
        match item {
            Item::Fixed(Fixed::ShortMonthName | Fixed::LongMonthName) => {
                let (month, len) = self.names.month(input)?;
                parsed.set_month(i64::from(month)).ok()?;
                input.get(len..)
            }
            Item::Fixed(Fixed::ShortWeekdayName | Fixed::LongWeekdayName) => {
                let (weekday, len) = self.names.weekday(input)?;
                if fields.has_full_date() {
                    parsed.set_weekday(weekday).ok()?;
                }
                input.get(len..)
            }
            _ => parse_and_remainder(parsed, input, std::iter::once(item)).ok(),
        }
    }
}

fn name_tables(compiled: Option<&CompiledPattern>, locale: &Locale) -> NameTables {
    match compiled {
        Some(compiled) if compiled.fields.has_names() => NameTables::new(locale.chrono()),
        _ => NameTables::default(),
    }
}

fn resolve(parsed: &mut Parsed, fields: Fields) -> Option<NaiveDateTime> {
    if !fields.year {
        parsed.set_year(PARSE_DEFAULT_YEAR).ok()?;
    }
    if !fields.month {
        parsed.set_month(1).ok()?;
    }
    if !fields.day {
        parsed.set_day(1).ok()?;
    }
    let date = parsed.to_naive_date().ok()?;

    if !fields.has_time() {
        return date.and_hms_opt(0, 0, 0);
    }
    if !fields.hour && !fields.hour12 {
        parsed.set_hour(0).ok()?;
    }
    if fields.hour12 && !fields.am_pm {
        parsed.set_ampm(false).ok()?;
    }
    if !fields.minute {
        parsed.set_minute(0).ok()?;
    }
    let time = parsed.to_naive_time().ok()?;

    Some(date.and_time(time))
}

/// Builds a formatter for `date_format` in `locale`.
#[must_use]
pub fn formatter(date_format: impl Into<DateFormat>, locale: Locale) -> DateFormatter {
    DateFormatter::new(date_format, locale)
}

/// Renders `date` in the process locale.
#[must_use]
pub fn format(date: &NaiveDateTime, date_format: impl Into<DateFormat>) -> String {
    DateFormatter::new(date_format, Locale::current()).format(date)
}

/// Renders `date` in `locale`.
#[must_use]
pub fn format_in(
    date: &NaiveDateTime,
    date_format: impl Into<DateFormat>,
    locale: &Locale,
) -> String {
    DateFormatter::new(date_format, locale.clone()).format(date)
}

/// Parses `input` with `date_format`.
#[must_use]
pub fn parse(input: &str, date_format: impl Into<DateFormat>) -> Option<NaiveDateTime> {
    DateFormatter::new(date_format, Locale::current()).parse(input)
}

/// Local wall-clock time.
#[must_use]
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Local calendar date.
#[must_use]
pub fn today() -> NaiveDate {
    now().date()
}
