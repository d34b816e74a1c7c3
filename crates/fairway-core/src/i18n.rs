//! Site translation lookup with English fallback
//!
//! Dictionaries are embedded at compile time, one JSON document per
//! language. `en` is complete; the other languages may have gaps, in which
//! case lookup falls back to the English value. A key that is missing even
//! in English comes back verbatim so a broken lookup is visible on the page
//! instead of throwing.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Supported site languages
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English, the fallback language
    En,
    /// German
    De,
    /// French
    Fr,
    /// Swedish
    Se,
}

impl Language {
    /// All supported languages, English first
    pub const ALL: [Self; 4] = [Self::En, Self::De, Self::Fr, Self::Se];

    /// Two-letter language code
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
            Self::Fr => "fr",
            Self::Se => "se",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::En
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "de" => Ok(Self::De),
            "fr" => Ok(Self::Fr),
            "se" | "sv" => Ok(Self::Se),
            other => Err(crate::Error::Validation {
                field: "language".to_string(),
                message: format!("unsupported language code: {other}"),
            }),
        }
    }
}

static DICTIONARIES: LazyLock<[Value; 4]> = LazyLock::new(|| {
    [
        parse_dictionary("en", include_str!("../translations/en.json")),
        parse_dictionary("de", include_str!("../translations/de.json")),
        parse_dictionary("fr", include_str!("../translations/fr.json")),
        parse_dictionary("se", include_str!("../translations/se.json")),
    ]
});

fn parse_dictionary(code: &str, raw: &str) -> Value {
    serde_json::from_str(raw)
        .unwrap_or_else(|e| panic!("embedded dictionary '{code}' is not valid JSON: {e}"))
}

const fn dictionary_index(language: Language) -> usize {
    match language {
        Language::En => 0,
        Language::De => 1,
        Language::Fr => 2,
        Language::Se => 3,
    }
}

/// Walk a dot-path through a nested dictionary, yielding a leaf string
fn walk<'v>(dictionary: &'v Value, key: &str) -> Option<&'v str> {
    let mut current = dictionary;
    for segment in key.split('.') {
        current = current.get(segment)?;
    }
    current.as_str()
}

/// Localized string for `key` in `language`
///
/// The key is a dot-path into the nested dictionary, e.g. `nav.home` or
/// `contact.countries.germany`. Lookup order: requested language, then
/// English, then the key itself verbatim. Never panics on a missing key.
pub fn translate(language: Language, key: &str) -> &str {
    // Dictionary leaves are 'static; the key only borrows for the call.
    let dictionaries: &'static [Value; 4] = &DICTIONARIES;

    walk(&dictionaries[dictionary_index(language)], key)
        .or_else(|| walk(&dictionaries[dictionary_index(Language::En)], key))
        .unwrap_or(key)
}
