//! Tests for `ContactBook` storage, lookup and sampling.

use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use birthbook_test::component::config::Settings;
use birthbook_test::component::ordering::by_birthday_in;
use birthbook_test::component::{Contact, ContactBook};

use super::helpers::{bare, date, yearless};

fn ids<'a>(contacts: impl IntoIterator<Item = &'a Contact>) -> HashSet<String> {
    contacts.into_iter().map(|c| c.id().to_string()).collect()
}

/// ## Summary
/// Asking for exactly as many entries as stored returns all of them.
#[test_log::test]
fn random_elements_at_boundary_returns_everything() {
    let mut book = ContactBook::new("friends");
    book.add_all([bare("a"), bare("b"), bare("c")]);

    let sample = book.random_elements(3, &[]);
    assert_eq!(sample.len(), 3);
    assert_eq!(ids(sample), ids(book.contacts()));

    assert_eq!(book.random_elements(10, &[]).len(), 3);
    assert!(book.random_elements(0, &[]).is_empty());
}

/// ## Summary
/// Samples are distinct and never include excluded contacts.
#[test_log::test]
fn random_elements_respect_exclusions() {
    let mut book = ContactBook::new("friends");
    book.add_all((0..10).map(|i| bare(&format!("id-{i}"))));
    let except = [bare("id-0"), bare("id-1"), bare("not-stored")];

    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let sample = book.random_elements_with(&mut rng, 4, &except);
        let drawn = ids(sample.iter().copied());
        assert_eq!(drawn.len(), 4);
        assert!(!drawn.contains("id-0"));
        assert!(!drawn.contains("id-1"));
    }

    let rest = book.random_elements_with(&mut rng, 8, &except);
    assert_eq!(rest.len(), 8);
}

/// ## Summary
/// Removing by contact uses its identifier, so a custom key survives.
#[test_log::test]
fn custom_key_survives_remove_by_contact() {
    let contact = bare("real-id");
    let mut book = ContactBook::new("friends");
    book.add_with_key(contact.clone(), "custom");

    book.remove_contact(&contact);
    assert!(book.contact("custom").is_some());
    assert_eq!(book.len(), 1);

    book.remove("custom");
    assert!(book.contact("custom").is_none());
    assert!(book.is_empty());
}

/// ## Summary
/// Lookups drop missing keys and refresh stale copies.
#[test_log::test]
fn lookups_and_refresh() {
    let mut book = ContactBook::new("friends");
    book.add_all([yearless("a", "Ann", 1, 2), yearless("b", "Bob", 3, 4)]);

    let found = book.contacts_for_keys(&["a", "missing", "b"]);
    assert_eq!(found.len(), 2);

    let stale = [bare("a"), bare("gone")];
    let refreshed = book.refreshed(stale.iter());
    assert_eq!(refreshed.len(), 1);
    assert!(refreshed[0].birthday(false).is_some());
}

/// ## Summary
/// Upcoming birthdays are ordered by how soon they fall.
#[test_log::test]
fn upcoming_birthdays_across_year_end() {
    let mut book = ContactBook::new("friends");
    book.add_all([
        yearless("jan2", "Jan", 1, 2),
        yearless("dec30", "Dec", 12, 30),
        yearless("dec27", "Today", 12, 27),
        yearless("feb1", "Feb", 2, 1),
        bare("nobody"),
    ]);

    let upcoming: Vec<&str> = book
        .upcoming_birthdays(7, date(2021, 12, 27))
        .into_iter()
        .map(|c| c.id())
        .collect();
    assert_eq!(upcoming, ["dec30", "jan2"]);
}

/// ## Summary
/// Sorting by birthday puts contacts without one last.
#[test_log::test]
fn sorted_by_birthday() {
    let mut book = ContactBook::new("friends");
    book.add_all([
        bare("none"),
        yearless("june", "June", 6, 1),
        yearless("march", "March", 3, 1),
    ]);

    let sorted: Vec<&str> = book
        .sorted_contacts(by_birthday_in(2021))
        .into_iter()
        .map(|c| c.id())
        .collect();
    assert_eq!(sorted, ["march", "june", "none"]);
}

/// ## Summary
/// Reset empties the book but keeps its name.
#[test_log::test]
fn reset_keeps_name() {
    let mut book = ContactBook::new("work");
    book.add(bare("a"));
    book.reset();
    assert!(book.is_empty());
    assert_eq!(book.name(), "work");
}

/// ## Summary
/// The configured look-ahead window drives upcoming birthdays.
#[test_log::test]
fn upcoming_birthdays_follow_settings() {
    let mut book = ContactBook::new("friends");
    book.add_all([yearless("soon", "Sue", 1, 3), yearless("later", "Lee", 2, 20)]);
    let from = date(2021, 12, 27);

    let week = Settings::from_toml("").expect("defaults");
    assert_eq!(book.upcoming_birthdays_from_config(&week, from).len(), 1);

    let quarter = Settings::from_toml("[birthdays]\nupcoming_days = 90\n").expect("valid");
    let ids: Vec<&str> = book
        .upcoming_birthdays_from_config(&quarter, from)
        .into_iter()
        .map(Contact::id)
        .collect();
    assert_eq!(ids, ["soon", "later"]);
}
