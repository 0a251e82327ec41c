#![allow(clippy::expect_used, dead_code)]
//! Test helpers for integration tests.
//!
//! Provides fixture contacts and fixed dates so scenarios never depend on
//! the wall clock or the host locale.

use birthbook_test::component::dates::Locale;
use birthbook_test::component::{BirthdayComponents, Contact, ContactRecord, NameParts};
use chrono::{NaiveDate, NaiveDateTime};

/// Builds a date, panicking on invalid input.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Builds a date-time on the hour.
pub fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    date(year, month, day)
        .and_hms_opt(hour, 0, 0)
        .expect("valid time")
}

pub fn en_us() -> Locale {
    Locale::en_us()
}

pub fn locale(tag: &str) -> Locale {
    Locale::parse(tag).expect("valid locale tag")
}

/// A contact with only an identifier.
pub fn bare(identifier: &str) -> Contact {
    Contact::new(ContactRecord::new(identifier))
}

/// A named contact born on `month`/`day`, year unknown.
pub fn yearless(identifier: &str, given: &str, month: u32, day: u32) -> Contact {
    ContactRecord::new(identifier)
        .with_name(NameParts::simple(given, "Tester"))
        .with_birthday(BirthdayComponents::new(month, day))
        .into()
}

/// A named contact with a full birth date.
pub fn born(identifier: &str, given: &str, year: i32, month: u32, day: u32) -> Contact {
    ContactRecord::new(identifier)
        .with_name(NameParts::simple(given, "Tester"))
        .with_birthday(BirthdayComponents::with_year(year, month, day))
        .into()
}
