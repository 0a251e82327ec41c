//! Compiles Unicode (LDML) date patterns into chrono format items.
//!
//! Only the symbols needed for calendar-day and wall-clock renderings are
//! understood. Anything else is reported as unsupported rather than passed
//! through, so callers can degrade to empty output.

use chrono::format::{Fixed, Item, Numeric, Pad};

use crate::error::{DateError, DateResult};

/// Calendar fields a pattern carries, used to fill defaults when parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[expect(clippy::struct_excessive_bools, reason = "one flag per pattern field")]
pub(crate) struct Fields {
    pub year: bool,
    pub month: bool,
    pub day: bool,
    pub hour: bool,
    pub hour12: bool,
    pub am_pm: bool,
    pub minute: bool,
    pub second: bool,
    pub month_name: bool,
    pub weekday: bool,
}

impl Fields {
    pub fn has_time(self) -> bool {
        self.hour || self.hour12 || self.minute || self.second
    }

    /// Whether parsing needs the locale's month or weekday names.
    pub fn has_names(self) -> bool {
        self.month_name || self.weekday
    }

    /// Whether a parsed weekday can be checked against a full date.
    pub fn has_full_date(self) -> bool {
        self.year && self.month && self.day
    }
}

#[derive(Debug, Clone)]
pub(crate) struct CompiledPattern {
    pub items: Vec<Item<'static>>,
    pub fields: Fields,
}

/// ## Summary
/// Tokenizes `pattern` into chrono items.
///
/// Letter runs are field symbols, text between single quotes is literal and
/// `''` is an escaped quote. Every other character is copied verbatim.
///
/// ## Errors
/// Returns an error for an empty pattern, an unterminated quote or a letter
/// run with no chrono equivalent.
pub(crate) fn compile(pattern: &str) -> DateResult<CompiledPattern> {
    if pattern.is_empty() {
        return Err(DateError::EmptyPattern);
    }

    let mut items = Vec::new();
    let mut fields = Fields::default();
    let mut literal = String::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\'' {
            if chars.next_if_eq(&'\'').is_some() {
                literal.push('\'');
                continue;
            }
            let mut closed = false;
            while let Some(q) = chars.next() {
                if q != '\'' {
                    literal.push(q);
                } else if chars.next_if_eq(&'\'').is_some() {
                    literal.push('\'');
                } else {
                    closed = true;
                    break;
                }
            }
            if !closed {
                return Err(DateError::UnterminatedLiteral(pattern.to_string()));
            }
        } else if c.is_ascii_alphabetic() {
            let mut count = 1;
            while chars.next_if_eq(&c).is_some() {
                count += 1;
            }
            flush_literal(&mut items, &mut literal);
            let item = field_item(c, count, &mut fields).ok_or_else(|| {
                DateError::UnsupportedSymbol {
                    symbol: c,
                    count,
                    pattern: pattern.to_string(),
                }
            })?;
            items.push(item);
        } else {
            literal.push(c);
        }
    }
    flush_literal(&mut items, &mut literal);

    Ok(CompiledPattern { items, fields })
}

/// Splits pending literal text into whitespace and non-whitespace items.
/// Whitespace items parse leniently (any amount of whitespace).
fn flush_literal(items: &mut Vec<Item<'static>>, literal: &mut String) {
    let mut run = String::new();
    let mut run_is_space = false;

    for c in literal.drain(..) {
        if !run.is_empty() && c.is_whitespace() != run_is_space {
            items.push(literal_item(std::mem::take(&mut run), run_is_space));
        }
        run_is_space = c.is_whitespace();
        run.push(c);
    }
    if !run.is_empty() {
        items.push(literal_item(run, run_is_space));
    }
}

fn literal_item(text: String, is_space: bool) -> Item<'static> {
    if is_space {
        Item::OwnedSpace(text.into_boxed_str())
    } else {
        Item::OwnedLiteral(text.into_boxed_str())
    }
}

fn field_item(symbol: char, count: usize, fields: &mut Fields) -> Option<Item<'static>> {
    let item = match (symbol, count) {
        ('y', 2) => {
            fields.year = true;
            Item::Numeric(Numeric::YearMod100, Pad::Zero)
        }
        ('y', 1) => {
            fields.year = true;
            Item::Numeric(Numeric::Year, Pad::None)
        }
        ('y', _) => {
            fields.year = true;
            Item::Numeric(Numeric::Year, Pad::Zero)
        }
        ('M' | 'L', 1..=4) => {
            fields.month = true;
            match count {
                1 => Item::Numeric(Numeric::Month, Pad::None),
                2 => Item::Numeric(Numeric::Month, Pad::Zero),
                3 => {
                    fields.month_name = true;
                    Item::Fixed(Fixed::ShortMonthName)
                }
                _ => {
                    fields.month_name = true;
                    Item::Fixed(Fixed::LongMonthName)
                }
            }
        }
        ('d', 1 | 2) => {
            fields.day = true;
            Item::Numeric(Numeric::Day, pad(count))
        }
        ('E', 1..=3) => {
            fields.weekday = true;
            Item::Fixed(Fixed::ShortWeekdayName)
        }
        ('E', 4) => {
            fields.weekday = true;
            Item::Fixed(Fixed::LongWeekdayName)
        }
        ('H', 1 | 2) => {
            fields.hour = true;
            Item::Numeric(Numeric::Hour, pad(count))
        }
        ('h', 1 | 2) => {
            fields.hour12 = true;
            Item::Numeric(Numeric::Hour12, pad(count))
        }
        ('m', 1 | 2) => {
            fields.minute = true;
            Item::Numeric(Numeric::Minute, pad(count))
        }
        ('s', 1 | 2) => {
            fields.second = true;
            Item::Numeric(Numeric::Second, pad(count))
        }
        ('a', 1..=3) => {
            fields.am_pm = true;
            Item::Fixed(Fixed::UpperAmPm)
        }
        _ => return None,
    };
    Some(item)
}

const fn pad(count: usize) -> Pad {
    if count >= 2 { Pad::Zero } else { Pad::None }
}
