//! Tests for birthday arithmetic on single contacts.

use chrono::Datelike;

use birthbook_test::component::dates::today;
use birthbook_test::component::{BirthdayComponents, Contact, ContactRecord, NameParts, NameStyle};

use super::helpers::{bare, born, date, en_us, yearless};

/// ## Summary
/// A birthday the day after the start date is coming; one on the start date is not.
#[test_log::test]
fn birthday_coming_excludes_start_date() {
    let starting = date(2021, 12, 27);

    assert!(yearless("a", "Ann", 12, 28).is_birthday_coming_from(7, starting));
    assert!(!yearless("b", "Bob", 12, 27).is_birthday_coming_from(7, starting));
}

/// ## Summary
/// Every day of the window counts, including the last one, and the window wraps
/// into the next year.
#[test_log::test]
fn birthday_coming_covers_whole_window() {
    let starting = date(2021, 12, 27);
    for offset in 1..=7u64 {
        let target = starting + chrono::Days::new(offset);
        let contact = yearless("x", "Xena", target.month(), target.day());
        assert!(contact.is_birthday_coming_from(7, starting), "offset {offset}");
    }
    assert!(!yearless("y", "Yan", 1, 4).is_birthday_coming_from(7, starting));
}

/// ## Summary
/// A 29 February birthday is coming in a leap year window.
#[test_log::test]
fn leap_day_in_leap_year_window() {
    let contact = yearless("leap", "Lee", 2, 29);
    assert!(contact.is_birthday_coming_from(7, date(2024, 2, 22)));
    assert!(!contact.is_birthday_coming_from(7, date(2023, 2, 22)));
}

/// ## Summary
/// The age at the next birthday is always one more than the current age.
#[test_log::test]
fn next_birthday_age_is_one_more() {
    for (year, month, day) in [(1990, 1, 1), (1985, 6, 15), (2000, 2, 29), (1970, 12, 31)] {
        let contact = born("c", "Cal", year, month, day);
        let now = contact.age(false).expect("age known");
        assert_eq!(contact.age(true), Some(now + 1));
        assert_eq!(contact.age_at_next_birthday(), Some(now + 1));
    }
}

/// ## Summary
/// Without a birth year there is no age.
#[test_log::test]
fn yearless_birthday_has_no_age() {
    let contact = yearless("y", "Yara", 3, 14);
    assert_eq!(contact.age(false), None);
    assert_eq!(contact.age(true), None);
    assert_eq!(contact.age_as_string(false, false), "");
    assert_eq!(contact.age_as_string(true, true), "");
    assert_eq!(contact.age_as_ordinal(), "");
}

/// ## Summary
/// Projection onto the current year always lands in the current year.
#[test_log::test]
fn current_year_projection() {
    let year = today().year();
    for contact in [
        yearless("a", "Ann", 7, 4),
        born("b", "Bob", 1960, 11, 30),
        born("c", "Cy", 1996, 2, 29),
    ] {
        let projected = contact.birthday(true).expect("birthday present");
        assert_eq!(projected.year(), year);
    }
}

/// ## Summary
/// Ages and ordinals on a fixed date.
#[test_log::test]
fn age_strings_on_fixed_date() {
    let contact = born("d", "Dee", 1990, 5, 10);
    let on = date(2020, 1, 1);

    assert_eq!(contact.age_as_string_on(on, false, false, &en_us()), "29");
    assert_eq!(contact.age_as_string_on(on, true, false, &en_us()), "30");
    assert_eq!(contact.age_as_string_on(on, false, true, &en_us()), "29th");
    assert_eq!(contact.age_as_string_on(on, true, true, &en_us()), "30th");
}

/// ## Summary
/// Formatted birthdays use the real birth year unless projected.
#[test_log::test]
fn formatted_birthday_in_locale() {
    let contact = born("e", "Eve", 1988, 3, 9);
    assert_eq!(contact.formatted_birthday_in("yyyy-MM-dd", false, &en_us()), "1988-03-09");
    assert_eq!(contact.formatted_birthday_in("d MMMM", false, &en_us()), "9 March");
    assert_eq!(bare("f").formatted_birthday_in("yyyy-MM-dd", false, &en_us()), "");
}

/// ## Summary
/// Missing data degrades to empty values.
#[test_log::test]
fn missing_data_degrades_to_empty() {
    let contact = bare("empty");
    assert_eq!(contact.full_name(NameStyle::FullName), "");
    assert_eq!(contact.birthday(false), None);
    assert_eq!(contact.birthday(true), None);
    assert_eq!(contact.first_email_address(), "");
    assert_eq!(contact.first_phone_number(), "");
    assert!(!contact.is_birthday_today());
    assert!(!contact.is_birthday_coming(365));
}

/// ## Summary
/// Equality follows the identifier only.
#[test_log::test]
fn equality_is_by_identifier() {
    let first = Contact::new(
        ContactRecord::new("same")
            .with_name(NameParts::simple("One", "Person"))
            .with_emails(["one@example.com"]),
    );
    let second = Contact::new(
        ContactRecord::new("same")
            .with_name(NameParts::simple("Other", "Person"))
            .with_birthday(BirthdayComponents::new(1, 1)),
    );
    assert_eq!(first, second);

    let twin = NameParts::simple("Twin", "Person");
    let twin_a = Contact::new(ContactRecord::new("a").with_name(twin.clone()));
    let twin_b = Contact::new(ContactRecord::new("b").with_name(twin));
    assert_ne!(twin_a, twin_b);
}

/// ## Summary
/// Records arrive as JSON from the upstream source.
#[test_log::test]
fn contact_from_json_record() {
    let json = serde_json::json!({
        "identifier": "abc-123",
        "name": { "given": "Grace", "family": "Hopper" },
        "birthday": { "month": 12, "day": 9, "year": 1906 },
        "emails": ["grace@example.com", "hopper@example.com"],
        "phones": ["+1 555 0100"]
    });
    let contact = Contact::from_json(&json.to_string()).expect("valid record");

    assert_eq!(contact.id(), "abc-123");
    assert_eq!(contact.full_name(NameStyle::FullName), "Grace Hopper");
    assert_eq!(contact.first_email_address(), "grace@example.com");
    assert_eq!(contact.first_phone_number(), "+1 555 0100");
    assert_eq!(contact.age_on(date(2006, 12, 9), false), Some(100));
}

/// ## Summary
/// vCard birthday values feed straight into a record.
#[test_log::test]
fn vcard_birthday_values() {
    let full = BirthdayComponents::parse("19850412").expect("basic date");
    assert_eq!(full, BirthdayComponents::with_year(1985, 4, 12));

    let yearless = BirthdayComponents::parse("--0412").expect("year-less date");
    assert_eq!(yearless, BirthdayComponents::new(4, 12));

    assert!(BirthdayComponents::parse("April").is_err());
}
