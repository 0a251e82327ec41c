//! Comparators for sorting contacts.

use std::cmp::Ordering;

use birthbook_dates::today;
use chrono::Datelike;

use crate::contact::Contact;
use crate::name::NameStyle;

/// Alphabetical by full name.
#[must_use]
pub fn by_full_name(a: &Contact, b: &Contact) -> Ordering {
    a.full_name(NameStyle::FullName)
        .cmp(&b.full_name(NameStyle::FullName))
}

/// Earliest birthday in the current year first; contacts without one last.
#[must_use]
pub fn by_this_years_birthday(a: &Contact, b: &Contact) -> Ordering {
    by_birthday_in(today().year())(a, b)
}

/// Earliest birthday in `year` first; contacts without one last.
#[must_use]
pub fn by_birthday_in(year: i32) -> impl Fn(&Contact, &Contact) -> Ordering {
    move |a: &Contact, b: &Contact| match (a.birthday_in_year(year), b.birthday_in_year(year)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
