//! Date formatting and parsing with Unicode date patterns.
//!
//! ## Overview
//!
//! Callers describe a rendering either with a named [`DateFormatPattern`] or
//! with a raw pattern string (`"d MMM"`, `"yyyy-MM-dd HH:mm"`). The pattern is
//! compiled once into a [`DateFormatter`], which is immutable and can be shared
//! freely.
//!
//! ```rust
//! use birthbook_dates::{DateFormatPattern, Locale, format_in, parse};
//! use chrono::NaiveDate;
//!
//! let locale = Locale::parse("en-US").unwrap();
//! let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap().and_hms_opt(8, 0, 0).unwrap();
//!
//! assert_eq!(format_in(&date, DateFormatPattern::DayAndMonth, &locale), "1 Jan");
//! let parsed = parse("2020-01-01", DateFormatPattern::FullDate);
//! assert_eq!(parsed.map(|d| d.date()), Some(date.date()));
//! ```
//!
//! Patterns the compiler does not understand are not errors for callers:
//! formatting renders an empty string and parsing yields `None`.

mod compile;
pub mod error;
mod formatter;
mod locale;
mod names;
mod ordinal;
mod pattern;

pub use error::{DateError, DateResult};
pub use formatter::{DateFormatter, format, format_in, formatter, now, parse, today};
pub use locale::Locale;
pub use ordinal::ordinal;
pub use pattern::{DateFormat, DateFormatPattern};
