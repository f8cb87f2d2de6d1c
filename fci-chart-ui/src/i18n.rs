//! Translation lookup for user-facing strings.
//!
//! The dashboard serves Finnish readers by default; an English table exists
//! for the international build. There is no ambient i18n context: apps
//! construct a `Translator` explicitly, components reach it through
//! `AppState`, and pure helpers take it by reference.

/// Display language for all user-facing strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Finnish,
    English,
}

/// Message keys used by the components. Both language tables must cover
/// every entry here.
pub const MESSAGE_KEYS: &[&str] = &[
    "accumulation by healthcare district",
    "cumulative",
    "daily",
    "total",
    "cases",
    "loading data",
    "data could not be loaded",
];

const FINNISH: &[(&str, &str)] = &[
    (
        "accumulation by healthcare district",
        "kertymä sairaanhoitopiireittäin",
    ),
    ("cumulative", "kumulatiivinen"),
    ("daily", "päivittäin"),
    ("total", "yhteensä"),
    ("cases", "tapauksia"),
    ("loading data", "ladataan tietoja"),
    ("data could not be loaded", "tietojen lataus epäonnistui"),
];

const ENGLISH: &[(&str, &str)] = &[
    (
        "accumulation by healthcare district",
        "accumulation by healthcare district",
    ),
    ("cumulative", "cumulative"),
    ("daily", "daily"),
    ("total", "total"),
    ("cases", "cases"),
    ("loading data", "loading data"),
    ("data could not be loaded", "data could not be loaded"),
];

/// Key -> localized display string lookup.
///
/// Unknown keys fall back to the key itself, so a missing table entry
/// degrades to readable English rather than hiding a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Resolve a message key to its localized display string.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        let table = match self.language {
            Language::Finnish => FINNISH,
            Language::English => ENGLISH,
        };
        table
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .unwrap_or(key)
    }
}
