// core/src/phone.rs
//
// Phone classification: the closed set of phonetic categories and the
// immutable symbol -> category table everything else consults to tell
// vowels from consonants.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Phonetic category of a phone symbol.
///
/// The set is closed: these are exactly the categories that appear in the
/// CMU phone classification file. Only `Vowel` matters for locating
/// syllable nuclei; the consonant subtypes are retained so consumers can
/// ask finer questions without reparsing the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhoneType {
    Vowel,
    Stop,
    Affricate,
    Fricative,
    Nasal,
    Liquid,
    Semivowel,
}

impl PhoneType {
    /// Parse a category label as written in the phone table file
    /// (lowercase, e.g. `"vowel"`, `"stop"`). Returns `None` for anything
    /// outside the closed set.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "vowel" => Some(PhoneType::Vowel),
            "stop" => Some(PhoneType::Stop),
            "affricate" => Some(PhoneType::Affricate),
            "fricative" => Some(PhoneType::Fricative),
            "nasal" => Some(PhoneType::Nasal),
            "liquid" => Some(PhoneType::Liquid),
            "semivowel" => Some(PhoneType::Semivowel),
            _ => None,
        }
    }

    /// True if this category marks a syllable nucleus.
    pub fn is_vowel(self) -> bool {
        self == PhoneType::Vowel
    }
}

/// Immutable mapping from phone symbol (e.g. `"AE"`, `"K"`) to its
/// [`PhoneType`].
///
/// Built once from classification entries and read-only afterward; a table
/// is an explicit value passed into [`crate::SyllableParser::new`], never
/// process-wide state, so multiple phone sets can coexist.
///
/// Duplicate symbols in the input follow last-write-wins semantics. The
/// reference phone set has no duplicates, so the policy is only observable
/// with hand-built tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhoneTable {
    map: AHashMap<String, PhoneType>,
}

impl PhoneTable {
    /// Build a table from `(symbol, category)` entries. Later entries for
    /// the same symbol overwrite earlier ones.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, PhoneType)>,
        S: Into<String>,
    {
        let mut map = AHashMap::new();
        for (symbol, phone_type) in entries {
            map.insert(symbol.into(), phone_type);
        }
        Self { map }
    }

    /// Look up the category of a (stress-free) phone symbol.
    pub fn category_of(&self, symbol: &str) -> Option<PhoneType> {
        self.map.get(symbol).copied()
    }

    /// Number of distinct symbols in the table.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over `(symbol, category)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, PhoneType)> {
        self.map.iter().map(|(s, t)| (s.as_str(), *t))
    }
}
