//! Locale handling shared by date rendering and ordinal rules.

use birthbook_core::config::LocaleConfig;
use birthbook_core::constants::LOCALE_ENV_VARS;
use birthbook_core::error::CoreError;

use crate::error::DateResult;

/// A locale resolved for both month/weekday names and plural rules.
///
/// `icu` supplies the language identity and ordinal rules, chrono supplies the
/// name tables used when rendering dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    tag: icu::locale::Locale,
    names: chrono::Locale,
}

impl Locale {
    /// `en-US`, the locale used when nothing else is configured.
    #[must_use]
    pub fn en_us() -> Self {
        Self {
            tag: icu::locale::locale!("en-US"),
            names: chrono::Locale::en_US,
        }
    }

    /// ## Summary
    /// Parses a BCP-47 tag or a POSIX locale name (`en_GB.UTF-8`).
    ///
    /// `C` and `POSIX` resolve to `en-US`. A language chrono has no name table
    /// for still parses, rendering with POSIX (English) names.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidLocale` when the tag is not a valid locale identifier.
    pub fn parse(tag: &str) -> DateResult<Self> {
        let trimmed = tag
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .trim();
        if trimmed.is_empty() || trimmed == "C" || trimmed == "POSIX" {
            return Ok(Self::en_us());
        }

        let normalized = trimmed.replace('_', "-");
        let parsed: icu::locale::Locale = normalized
            .parse()
            .map_err(|e| CoreError::InvalidLocale(format!("{tag}: {e}")))?;

        let names = chrono_names(&parsed);
        Ok(Self { tag: parsed, names })
    }

    /// ## Summary
    /// Resolves the process locale from `LC_ALL`, `LC_TIME` and `LANG`, in that order.
    /// Falls back to `en-US` when none is set or parseable.
    #[must_use]
    pub fn current() -> Self {
        for var in LOCALE_ENV_VARS {
            let Ok(value) = std::env::var(var) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            match Self::parse(&value) {
                Ok(locale) => return locale,
                Err(e) => {
                    tracing::debug!(var, value = %value, error = %e, "Ignoring unparseable locale");
                }
            }
        }
        Self::en_us()
    }

    /// ## Summary
    /// Uses the configured tag, or the process locale when none is configured.
    ///
    /// ## Errors
    /// Returns an error if the configured tag does not parse.
    pub fn from_config(config: &LocaleConfig) -> DateResult<Self> {
        match &config.tag {
            Some(tag) => Self::parse(tag),
            None => Ok(Self::current()),
        }
    }

    /// Language subtag, e.g. `en`.
    #[must_use]
    pub fn language(&self) -> &str {
        self.tag.id.language.as_str()
    }

    #[must_use]
    pub fn icu(&self) -> &icu::locale::Locale {
        &self.tag
    }

    #[must_use]
    pub fn chrono(&self) -> chrono::Locale {
        self.names
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::current()
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag)
    }
}

/// Picks chrono's name table: exact `ll_RR`, then `ll_LL` (`fr_FR`), then POSIX.
fn chrono_names(locale: &icu::locale::Locale) -> chrono::Locale {
    let language = locale.id.language.as_str();
    let mut candidates = Vec::with_capacity(2);
    if let Some(region) = locale.id.region {
        candidates.push(format!("{language}_{}", region.as_str()));
    }
    candidates.push(format!("{language}_{}", language.to_ascii_uppercase()));

    for candidate in &candidates {
        if let Ok(names) = chrono::Locale::try_from(candidate.as_str()) {
            return names;
        }
    }

    tracing::debug!(locale = %locale, "No date name table for locale, using POSIX names");
    chrono::Locale::POSIX
}
