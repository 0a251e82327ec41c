//! Ordinal number rendering ("1st", "2e", "3.º").
//!
//! The plural category comes from ICU ordinal rules; the suffix attached to
//! each category is a per-language table.

use icu::plurals::{PluralCategory, PluralRules};

use crate::locale::Locale;

/// Renders `n` as an ordinal in `locale`.
///
/// Languages without a suffix table render the plain number.
#[must_use]
pub fn ordinal(n: i64, locale: &Locale) -> String {
    let category = ordinal_category(n, locale);
    let suffix = match locale.language() {
        "en" => match category {
            PluralCategory::One => "st",
            PluralCategory::Two => "nd",
            PluralCategory::Few => "rd",
            _ => "th",
        },
        "fr" => {
            if category == PluralCategory::One {
                "er"
            } else {
                "e"
            }
        }
        "es" | "pt" | "it" | "gl" => ".º",
        "de" | "da" | "nb" | "nn" | "no" | "fi" | "cs" | "sk" => ".",
        "nl" => "e",
        _ => "",
    };
    format!("{n}{suffix}")
}

fn ordinal_category(n: i64, locale: &Locale) -> PluralCategory {
    match PluralRules::try_new_ordinal(locale.icu().clone().into()) {
        Ok(rules) => rules.category_for(n),
        Err(e) => {
            tracing::debug!(locale = %locale, error = %e, "No ordinal rules for locale");
            PluralCategory::Other
        }
    }
}
