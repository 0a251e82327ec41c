//! Name parts and the name formatting seam.

use serde::{Deserialize, Serialize};

/// Structured name as supplied upstream. Every part may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameParts {
    /// Honorific prefix (e.g., "Dr.").
    pub prefix: String,
    pub given: String,
    pub middle: String,
    pub family: String,
    /// Honorific suffix (e.g., "Jr.").
    pub suffix: String,
    pub phonetic_given: String,
    pub phonetic_family: String,
}

impl NameParts {
    /// Creates a name with given and family names.
    #[must_use]
    pub fn simple(given: impl Into<String>, family: impl Into<String>) -> Self {
        Self {
            given: given.into(),
            family: family.into(),
            ..Self::default()
        }
    }
}

/// Which rendering of a name to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NameStyle {
    #[default]
    FullName,
    /// Phonetic given name, followed by the phonetic family name when present.
    Phonetic,
}

/// Joins name parts into a display string.
///
/// Returns `None` when the name has nothing renderable in the requested style.
pub trait NameFormatter {
    fn format(&self, name: &NameParts, style: NameStyle) -> Option<String>;
}

/// Given-name-first formatting: `prefix given middle family suffix`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WesternNameFormatter;

impl NameFormatter for WesternNameFormatter {
    fn format(&self, name: &NameParts, style: NameStyle) -> Option<String> {
        let (core, parts) = match style {
            NameStyle::FullName => (
                vec![name.given.as_str(), name.middle.as_str(), name.family.as_str()],
                vec![
                    name.prefix.as_str(),
                    name.given.as_str(),
                    name.middle.as_str(),
                    name.family.as_str(),
                    name.suffix.as_str(),
                ],
            ),
            NameStyle::Phonetic => (
                vec![name.phonetic_given.as_str(), name.phonetic_family.as_str()],
                vec![name.phonetic_given.as_str(), name.phonetic_family.as_str()],
            ),
        };

        // Prefix and suffix alone are not a name.
        if core.iter().all(|part| part.trim().is_empty()) {
            return None;
        }

        Some(
            parts
                .into_iter()
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(" "),
        )
    }
}
