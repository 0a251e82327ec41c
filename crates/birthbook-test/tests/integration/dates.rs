//! Tests for date formatting through the public API.

use birthbook_test::component::dates::{DateFormat, DateFormatPattern, DateFormatter, ordinal};

use super::helpers::{at, date, en_us, locale};

/// ## Summary
/// Formatting, parsing and formatting again yields the same string for
/// day-or-coarser patterns.
#[test_log::test]
fn round_trip_through_canonical_form() {
    let patterns = [
        DateFormat::from(DateFormatPattern::FullDate),
        DateFormat::from(DateFormatPattern::DayAndMonth),
        DateFormat::from(DateFormatPattern::DayAndFullMonth),
        DateFormat::from(DateFormatPattern::FullMonth),
        DateFormat::from("d MMM yyyy"),
    ];
    let dates = [at(2020, 1, 1, 8), at(1999, 12, 31, 23), at(2024, 2, 29, 12), at(1970, 7, 4, 0)];

    for names in [en_us(), locale("fr-FR"), locale("de-DE")] {
        for pattern in &patterns {
            let formatter = DateFormatter::new(pattern.clone(), names.clone());
            for when in dates {
                let rendered = formatter.format(&when);
                let parsed = formatter.parse(&rendered).expect("own output parses");
                assert_eq!(formatter.format(&parsed), rendered, "{pattern} in {names}");
            }
        }
    }
}

/// ## Summary
/// Unsupported custom patterns degrade to empty output and no parse.
#[test_log::test]
fn unsupported_pattern_degrades() {
    let formatter = DateFormatter::new("qqqq", en_us());
    assert_eq!(formatter.format(&at(2020, 1, 1, 0)), "");
    assert_eq!(formatter.format_date(date(2020, 1, 1)), "");
    assert_eq!(formatter.parse("anything"), None);
}

/// ## Summary
/// English ordinals.
#[test_log::test]
fn english_ordinals() {
    let rendered: Vec<String> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 101]
        .into_iter()
        .map(|n| ordinal(n, &en_us()))
        .collect();
    assert_eq!(
        rendered,
        ["1st", "2nd", "3rd", "4th", "11th", "12th", "13th", "21st", "22nd", "101st"]
    );
}
