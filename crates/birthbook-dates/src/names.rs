//! Month and weekday names for parsing, in a locale and in English.

use std::fmt::Write as _;

use chrono::format::{Fixed, Item};
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Lower-cased names with the value each one stands for.
#[derive(Debug, Clone, Default)]
pub(crate) struct NameTables {
    months: Vec<(String, u32)>,
    weekdays: Vec<(String, Weekday)>,
}

impl NameTables {
    /// Short and long names rendered by `locale`, plus the POSIX (English) ones.
    pub fn new(locale: chrono::Locale) -> Self {
        let mut tables = Self::default();
        for names in [locale, chrono::Locale::POSIX] {
            for month in 1..=12 {
                let Some(first) = NaiveDate::from_ymd_opt(2000, month, 1) else {
                    continue;
                };
                for fixed in [Fixed::ShortMonthName, Fixed::LongMonthName] {
                    if let Some(name) = render(first, fixed, names) {
                        tables.months.push((name, month));
                    }
                }
            }

            // 2000-01-03 is a Monday.
            for offset in 0..7 {
                let Some(day) = NaiveDate::from_ymd_opt(2000, 1, 3)
                    .and_then(|monday| monday.checked_add_days(Days::new(offset)))
                else {
                    continue;
                };
                for fixed in [Fixed::ShortWeekdayName, Fixed::LongWeekdayName] {
                    if let Some(name) = render(day, fixed, names) {
                        tables.weekdays.push((name, day.weekday()));
                    }
                }
            }
        }
        tables
    }

    /// The month whose name starts `input`, and the name's byte length.
    pub fn month(&self, input: &str) -> Option<(u32, usize)> {
        longest_prefix(&self.months, input)
    }

    /// The weekday whose name starts `input`, and the name's byte length.
    pub fn weekday(&self, input: &str) -> Option<(Weekday, usize)> {
        longest_prefix(&self.weekdays, input)
    }
}

fn render(date: NaiveDate, fixed: Fixed, locale: chrono::Locale) -> Option<String> {
    let items = [Item::Fixed(fixed)];
    let rendered = date
        .and_hms_opt(0, 0, 0)?
        .and_utc()
        .format_localized_with_items(items.iter(), locale);

    let mut out = String::new();
    write!(out, "{rendered}").ok()?;
    let name = out.trim().to_lowercase();
    (!name.is_empty()).then_some(name)
}

/// Longest name matching the start of `input`, ignoring case.
fn longest_prefix<T: Copy>(names: &[(String, T)], input: &str) -> Option<(T, usize)> {
    names
        .iter()
        .filter(|(name, _)| {
            input
                .get(..name.len())
                .is_some_and(|head| head.to_lowercase() == *name)
        })
        .max_by_key(|(name, _)| name.len())
        .map(|(name, value)| (*value, name.len()))
}
