//! Identifier lists bucketed by formatted date.

use std::collections::HashMap;

use birthbook_core::config::Settings;
use birthbook_dates::{DateFormat, DateFormatPattern, DateFormatter, Locale, now};
use chrono::NaiveDateTime;

use crate::error::ContactResult;

/// A named schedule of identifier lists keyed by date.
///
/// The key of a bucket is the date rendered with the schedule's format, so
/// two dates that render alike share a bucket. Adding to an existing bucket
/// replaces its list.
#[derive(Debug, Clone)]
pub struct ContactSchedule {
    name: String,
    formatter: DateFormatter,
    buckets: HashMap<String, Vec<String>>,
}

impl ContactSchedule {
    /// A schedule keyed by full date (`yyyy-MM-dd`) in the process locale.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_format(name, DateFormatPattern::FullDate)
    }

    #[must_use]
    pub fn with_format(name: impl Into<String>, date_format: impl Into<DateFormat>) -> Self {
        Self {
            name: name.into(),
            formatter: DateFormatter::new(date_format, Locale::current()),
            buckets: HashMap::new(),
        }
    }

    /// Re-keys future insertions with `locale`. Existing buckets are kept as is.
    #[must_use]
    pub fn with_locale(self, locale: Locale) -> Self {
        let date_format = self.formatter.date_format().clone();
        Self {
            formatter: DateFormatter::new(date_format, locale),
            ..self
        }
    }

    /// ## Summary
    /// Builds a schedule from the configured date format.
    ///
    /// ## Errors
    /// Returns an error if the settings are invalid or the configured format
    /// does not compile.
    pub fn from_config(
        name: impl Into<String>,
        settings: &Settings,
        locale: Locale,
    ) -> ContactResult<Self> {
        settings.validate()?;
        let formatter = DateFormatter::try_new(settings.schedule.date_format.as_str(), locale)?;
        Ok(Self {
            name: name.into(),
            formatter,
            buckets: HashMap::new(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn date_format(&self) -> &DateFormat {
        self.formatter.date_format()
    }

    /// Stores `identifiers` under the bucket for `date`.
    pub fn add<I, S>(&mut self, identifiers: I, date: &NaiveDateTime)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let key = self.formatter.format(date);
        self.insert(key, identifiers);
    }

    /// ## Summary
    /// Stores `identifiers` under the bucket for a date written in the
    /// schedule's format.
    ///
    /// The string is parsed and rendered again, so differently written forms
    /// of one date land in the same bucket. Unparseable input is skipped.
    pub fn add_from_str<I, S>(&mut self, identifiers: I, date: &str)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let Some(parsed) = self.formatter.parse(date) else {
            tracing::debug!(
                schedule = %self.name,
                input = date,
                format = %self.date_format(),
                "Skipping unparseable schedule date"
            );
            return;
        };
        let key = self.formatter.format(&parsed);
        self.insert(key, identifiers);
    }

    /// Every bucket.
    #[must_use]
    pub fn schedule(&self) -> &HashMap<String, Vec<String>> {
        &self.buckets
    }

    /// The bucket for `date`, empty when there is none.
    #[must_use]
    pub fn schedule_for(&self, date: &NaiveDateTime) -> &[String] {
        self.buckets
            .get(&self.formatter.format(date))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn schedule_for_today(&self) -> &[String] {
        self.schedule_for(&now())
    }

    /// Removes every bucket.
    pub fn reset(&mut self) {
        self.buckets.clear();
    }

    fn insert<I, S>(&mut self, key: String, identifiers: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let identifiers: Vec<String> = identifiers.into_iter().map(Into::into).collect();
        tracing::trace!(schedule = %self.name, %key, count = identifiers.len(), "Replacing bucket");
        self.buckets.insert(key, identifiers);
    }
}
